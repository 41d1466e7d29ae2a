//! CLI frontend for the Seventh Sea character sheets.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "svnsea",
    about = "Seventh Sea character sheets and dice pools",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Game settings shared by commands that compute thresholds.
#[derive(Args, Debug, Clone)]
pub(crate) struct SettingsArgs {
    /// JSON settings file ({"variant": "...", "threshold_modifier": N})
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Rule variant: standard or house
    #[arg(long)]
    variant: Option<String>,

    /// Global threshold modifier
    #[arg(long, allow_hyphen_values = true)]
    threshold_modifier: Option<i32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new actor document
    New {
        /// Sheet type: player_character, lieutenant, villain, henchman
        kind: String,

        /// Actor name
        name: String,

        /// Output file (default: `<name>.json`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a character sheet
    Show {
        /// Actor document
        file: PathBuf,

        /// Print the derived sheet as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Roll a skill check
    Roll {
        /// Actor document
        file: PathBuf,

        /// Skill to test
        skill: String,

        /// Attribute or combat attribute to pair with the skill
        attribute: String,

        /// Extra dice (may be negative)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        bonus: i32,

        /// Dice set aside before rolling
        #[arg(short, long, default_value = "0")]
        wager: u32,

        /// Successes needed to pass
        #[arg(short, long, default_value = "2")]
        difficulty: u32,

        /// Roll without a difficulty
        #[arg(long, conflicts_with = "difficulty")]
        no_difficulty: bool,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the roll message as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Click an attribute circle (sets the rating)
    Attribute {
        /// Actor document
        file: PathBuf,
        /// Attribute name
        attribute: String,
        /// Circle, 1 to 5
        index: u32,
    },

    /// Click a skill circle (clicking 1 on a skill at 1 clears it)
    Skill {
        /// Actor document
        file: PathBuf,
        /// Skill name
        skill: String,
        /// Circle, 1 to 5
        index: u32,
    },

    /// Toggle a skill's specialization
    Specialize {
        /// Actor document
        file: PathBuf,
        /// Skill name
        skill: String,
    },

    /// Link a combat attribute to a base attribute
    Link {
        /// Actor document
        file: PathBuf,
        /// Combat attribute
        combat: String,
        /// Base attribute
        attribute: String,
    },

    /// Click a wound circle, or a dramatic star with --dramatic
    Wound {
        /// Actor document
        file: PathBuf,
        /// Circle or star, 1-based
        index: u32,
        /// Click the dramatic star instead
        #[arg(long)]
        dramatic: bool,
    },

    /// Click a backlash circle
    Backlash {
        /// Actor document
        file: PathBuf,
        /// Circle, 1 to 10
        index: u32,
    },

    /// Raise or lower heroism
    Heroism {
        /// Actor document
        file: PathBuf,
        /// up or down
        step: String,
    },

    /// Choose a sorcery school (or "none")
    Sorcery {
        /// Actor document
        file: PathBuf,
        /// porte, sorte, hexen, glamour, sanderis, alquemie, none
        school: String,
    },

    /// Set a henchman's power
    Power {
        /// Actor document
        file: PathBuf,
        /// Power, at least 1
        value: u32,
    },

    /// Manage embedded items
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
}

#[derive(Subcommand)]
enum ItemCommands {
    /// Add a blank item
    Add {
        /// Actor document
        file: PathBuf,
        /// advantage, power, flaw, equipment
        item_type: String,
        /// Name (default: the sheet's placeholder)
        name: Option<String>,
    },
    /// Remove an item
    Remove {
        /// Actor document
        file: PathBuf,
        /// Item ID (short form accepted)
        id: String,
    },
    /// Rename an item
    Rename {
        /// Actor document
        file: PathBuf,
        /// Item ID (short form accepted)
        id: String,
        /// New name
        name: String,
    },
    /// Set the rules text of an advantage, power or flaw
    Describe {
        /// Actor document
        file: PathBuf,
        /// Item ID (short form accepted)
        id: String,
        /// New rules text
        text: String,
    },
    /// Set the category of an advantage
    Category {
        /// Actor document
        file: PathBuf,
        /// Item ID (short form accepted)
        id: String,
        /// passive, situational, heroic, extraordinary
        category: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::New { kind, name, output } => {
            commands::new::run(&kind, &name, output.as_deref())
        }
        Commands::Show {
            file,
            json,
            settings,
        } => commands::show::run(&file, &settings, json),
        Commands::Roll {
            file,
            skill,
            attribute,
            bonus,
            wager,
            difficulty,
            no_difficulty,
            seed,
            json,
            settings,
        } => commands::roll::run(
            &file,
            &commands::roll::RollArgs {
                skill,
                attribute,
                bonus,
                wager,
                difficulty: (!no_difficulty).then_some(difficulty),
                seed,
                json,
            },
            &settings,
        ),
        Commands::Attribute {
            file,
            attribute,
            index,
        } => commands::edit::attribute(&file, &attribute, index),
        Commands::Skill { file, skill, index } => commands::edit::skill(&file, &skill, index),
        Commands::Specialize { file, skill } => commands::edit::specialize(&file, &skill),
        Commands::Link {
            file,
            combat,
            attribute,
        } => commands::edit::link(&file, &combat, &attribute),
        Commands::Wound {
            file,
            index,
            dramatic,
        } => commands::edit::wound(&file, index, dramatic),
        Commands::Backlash { file, index } => commands::edit::backlash(&file, index),
        Commands::Heroism { file, step } => commands::edit::heroism(&file, &step),
        Commands::Sorcery { file, school } => commands::edit::sorcery(&file, &school),
        Commands::Power { file, value } => commands::edit::power(&file, value),
        Commands::Item { command } => match command {
            ItemCommands::Add {
                file,
                item_type,
                name,
            } => commands::item::add(&file, &item_type, name.as_deref()),
            ItemCommands::Remove { file, id } => commands::item::remove(&file, &id),
            ItemCommands::Rename { file, id, name } => commands::item::rename(&file, &id, &name),
            ItemCommands::Describe { file, id, text } => {
                commands::item::describe(&file, &id, &text)
            }
            ItemCommands::Category { file, id, category } => {
                commands::item::category(&file, &id, &category)
            }
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

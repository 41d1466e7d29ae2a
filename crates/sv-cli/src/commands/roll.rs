use std::path::Path;

use colored::Colorize;
use sv_core::{DocumentStore, Skill};
use sv_mechanics::{RngDice, RollChoice, RollMessage, SkillCheck, roll_skill};

use crate::SettingsArgs;

/// The roll dialog, as entered on the command line.
pub struct RollArgs {
    pub skill: String,
    pub attribute: String,
    pub bonus: i32,
    pub wager: u32,
    pub difficulty: Option<u32>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn run(path: &Path, args: &RollArgs, settings: &SettingsArgs) -> Result<(), String> {
    let settings = super::settings(settings)?;
    let skill =
        Skill::parse(&args.skill).ok_or_else(|| format!("unknown skill \"{}\"", args.skill))?;
    let choice = RollChoice::parse(&args.attribute)
        .ok_or_else(|| format!("unknown attribute \"{}\"", args.attribute))?;

    let (store, id) = super::load(path)?;
    let actor = store
        .get(id)
        .ok_or_else(|| format!("actor {id} vanished from the store"))?;

    let check = SkillCheck::new(skill, choice)
        .with_bonus(args.bonus)
        .with_wager(args.wager)
        .with_difficulty(args.difficulty);

    let mut dice = match args.seed {
        Some(seed) => RngDice::seeded(seed),
        None => RngDice::from_os_rng(),
    };
    let message = roll_skill(actor, &check, &settings, &mut dice).map_err(|e| e.to_string())?;

    if args.json {
        let out = serde_json::to_string_pretty(&message).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        print_message(&message);
    }
    Ok(())
}

fn print_message(message: &RollMessage) {
    println!("  {}: {}", message.speaker.bold(), message.title);
    println!(
        "  Succès : {}",
        message.outcome.success_count.to_string().bold()
    );
    if message.wager > 0 {
        println!("  Pari : {}", message.wager);
    }
    if let Some(status) = message.status() {
        if message.outcome.passed == Some(true) {
            println!("  {}", status.green());
        } else {
            println!("  {}", status.red());
        }
    }
    println!("  {}", message.details().dimmed());
    let exploded = message.outcome.exploded();
    if exploded > 0 {
        println!(
            "  {}",
            format!("+{exploded} dés explosés").dimmed()
        );
    }
    if message.outcome.capped {
        println!("  {}", "explosions stopped at the round limit".yellow());
    }
}

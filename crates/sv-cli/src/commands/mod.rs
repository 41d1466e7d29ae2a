pub mod edit;
pub mod item;
pub mod new;
pub mod roll;
pub mod show;

use std::fs;
use std::path::Path;

use colored::Colorize;
use sv_core::{Actor, ActorId, DocumentStore, MemoryStore};
use sv_mechanics::{FieldCommand, FieldValue, RuleVariant, SheetAction, SystemSettings, dispatch};
use tracing::debug;

use crate::SettingsArgs;

/// Read an actor document into a fresh store.
fn load(path: &Path) -> Result<(MemoryStore, ActorId), String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let actor: Actor = serde_json::from_str(&text)
        .map_err(|e| format!("invalid actor document {}: {e}", path.display()))?;
    debug!(path = %path.display(), actor = %actor.id, "loaded actor");

    let mut store = MemoryStore::new();
    let id = store.create(actor).map_err(|e| e.to_string())?;
    Ok((store, id))
}

/// Write an actor back to its document.
fn save(store: &MemoryStore, id: ActorId, path: &Path) -> Result<(), String> {
    let actor = store
        .get(id)
        .ok_or_else(|| format!("actor {id} vanished from the store"))?;
    write_actor(actor, path)
}

fn write_actor(actor: &Actor, path: &Path) -> Result<(), String> {
    let mut json = serde_json::to_string_pretty(actor).map_err(|e| e.to_string())?;
    json.push('\n');
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
}

/// Settings from `--settings`, then `--variant` and `--threshold-modifier`
/// on top.
fn settings(args: &SettingsArgs) -> Result<SystemSettings, String> {
    let mut settings = match &args.settings {
        Some(path) => SystemSettings::from_path(path).map_err(|e| e.to_string())?,
        None => SystemSettings::default(),
    };
    if let Some(variant) = &args.variant {
        let variant = RuleVariant::parse(variant).ok_or_else(|| {
            format!("unknown rule variant \"{variant}\" (expected standard or house)")
        })?;
        settings = settings.with_variant(variant);
    }
    if let Some(modifier) = args.threshold_modifier {
        settings = settings.with_threshold_modifier(modifier);
    }
    Ok(settings)
}

/// Load `path`, carry out `action`, save, and report what changed.
fn apply_action(path: &Path, action: SheetAction) -> Result<(), String> {
    let (mut store, id) = load(path)?;
    let commands = dispatch(&mut store, id, &action).map_err(|e| e.to_string())?;
    save(&store, id, path)?;
    report(&commands);
    Ok(())
}

fn report(commands: &[FieldCommand]) {
    if commands.is_empty() {
        println!("  {}", "No change.".dimmed());
        return;
    }
    for command in commands {
        println!(
            "  {} {} = {}",
            "set".green(),
            command.field,
            describe(&command.value).bold()
        );
    }
}

fn describe(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Flag(b) => b.to_string(),
        FieldValue::Attribute(a) => a.key().to_string(),
        FieldValue::Sorcery(Some(kind)) => kind.label().to_string(),
        FieldValue::Sorcery(None) => "none".to_string(),
        FieldValue::Text(s) => format!("\"{s}\""),
        FieldValue::Category(c) => c.label().to_string(),
    }
}

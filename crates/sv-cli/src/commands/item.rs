use std::path::Path;

use colored::Colorize;
use sv_core::{ActorId, AdvantageCategory, DocumentStore, Item, ItemId, ItemType, MemoryStore};
use sv_mechanics::SheetAction;

pub fn add(path: &Path, item_type: &str, name: Option<&str>) -> Result<(), String> {
    let item_type = ItemType::parse(item_type).ok_or_else(|| {
        format!("unknown item type \"{item_type}\" (expected advantage, power, flaw or equipment)")
    })?;
    let mut item = Item::new_default(item_type);
    if let Some(name) = name {
        item.name = name.to_string();
    }

    let (mut store, id) = super::load(path)?;
    let name = item.name.clone();
    let item_id = store.create_item(id, item).map_err(|e| e.to_string())?;
    super::save(&store, id, path)?;

    println!(
        "  Added '{}' [{}]",
        name.bold(),
        item_id.to_string().dimmed()
    );
    Ok(())
}

pub fn remove(path: &Path, id: &str) -> Result<(), String> {
    let (mut store, actor) = super::load(path)?;
    let item_id = resolve(&store, actor, id)?;
    let removed = store
        .delete_item(actor, item_id)
        .map_err(|e| e.to_string())?;
    super::save(&store, actor, path)?;

    println!("  Removed '{}'", removed.name.bold());
    Ok(())
}

pub fn rename(path: &Path, id: &str, name: &str) -> Result<(), String> {
    let (store, actor) = super::load(path)?;
    let item = resolve(&store, actor, id)?;
    super::apply_action(
        path,
        SheetAction::RenameItem {
            item,
            name: name.to_string(),
        },
    )
}

pub fn describe(path: &Path, id: &str, text: &str) -> Result<(), String> {
    let (store, actor) = super::load(path)?;
    let item = resolve(&store, actor, id)?;
    super::apply_action(
        path,
        SheetAction::DescribeItem {
            item,
            description: text.to_string(),
        },
    )
}

pub fn category(path: &Path, id: &str, category: &str) -> Result<(), String> {
    let category = AdvantageCategory::parse(category).ok_or_else(|| {
        format!(
            "unknown category \"{category}\" (expected passive, situational, heroic or extraordinary)"
        )
    })?;
    let (store, actor) = super::load(path)?;
    let item = resolve(&store, actor, id)?;
    super::apply_action(path, SheetAction::CategorizeAdvantage { item, category })
}

fn resolve(store: &MemoryStore, actor: ActorId, id: &str) -> Result<ItemId, String> {
    let actor = store
        .get(actor)
        .ok_or_else(|| format!("actor {actor} vanished from the store"))?;
    ItemId::resolve(id, &actor.items).ok_or_else(|| format!("no item with ID \"{id}\""))
}

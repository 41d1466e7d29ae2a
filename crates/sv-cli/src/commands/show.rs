use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use sv_core::{Actor, DocumentStore, ItemKind};
use sv_mechanics::sheet::Circle;
use sv_mechanics::{SheetView, WoundLayout};

use crate::SettingsArgs;

pub fn run(path: &Path, settings: &SettingsArgs, json: bool) -> Result<(), String> {
    let settings = super::settings(settings)?;
    let (store, id) = super::load(path)?;
    let actor = store
        .get(id)
        .ok_or_else(|| format!("actor {id} vanished from the store"))?;
    let view = SheetView::build(actor, &settings);

    if json {
        let out = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} [{}] {}",
        view.name.bold(),
        view.kind.to_string().dimmed(),
        format!("({} rules)", view.variant).dimmed()
    );
    println!();

    print_ratings(&view);
    print_wounds(&view.wounds);
    println!("  Héroïsme : {}", view.heroism.to_string().bold());

    if view.show_sorcery {
        let school = actor
            .sorcery
            .kind
            .map_or("aucune", |k| k.label());
        println!("  Sorcellerie : {school}");
        if let Some(backlash) = &view.backlash {
            println!("  {}  {}", backlash, dots(&backlash.circles()));
        }
    }

    print_items(actor);
    Ok(())
}

fn print_ratings(view: &SheetView) {
    let mut attributes = Table::new();
    attributes.set_content_arrangement(ContentArrangement::Dynamic);
    attributes.set_header(vec!["Trait", "Value", "Threshold"]);
    for row in &view.attributes {
        attributes.add_row(vec![
            row.attribute.label().to_string(),
            row.value.to_string(),
            row.threshold.to_string(),
        ]);
    }
    println!("{attributes}");
    println!();

    let mut skills = Table::new();
    skills.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Skill", "Value", "Specialized"];
    if view.variant == sv_mechanics::RuleVariant::Standard {
        header.push("Threshold");
    }
    skills.set_header(header);
    for row in &view.skills {
        let mut cells = vec![
            row.skill.label().to_string(),
            row.value.to_string(),
            if row.specialized { "yes" } else { "" }.to_string(),
        ];
        if let Some(threshold) = row.threshold {
            cells.push(threshold.to_string());
        }
        skills.add_row(cells);
    }
    println!("{skills}");
    println!();

    let mut combat = Table::new();
    combat.set_content_arrangement(ContentArrangement::Dynamic);
    combat.set_header(vec!["Combat", "Linked to", "Value", "Threshold"]);
    for row in &view.combat {
        combat.add_row(vec![
            row.combat.label().to_string(),
            row.linked.label().to_string(),
            row.value.to_string(),
            row.threshold.to_string(),
        ]);
    }
    println!("{combat}");
    println!();
}

fn print_wounds(layout: &WoundLayout) {
    match layout {
        WoundLayout::Grid(grid) => {
            println!("  Blessures (groupes de {})", grid.group_size);
            for group in &grid.groups {
                let star = if group.dramatic { "★" } else { "☆" };
                println!(
                    "    {}  {}",
                    circles(&group.normals),
                    if group.dramatic {
                        star.red().to_string()
                    } else {
                        star.to_string()
                    }
                );
            }
        }
        WoundLayout::Row(row) => {
            println!("  Blessures  {}", circles(row));
        }
    }
    println!();
}

fn circles(row: &[Circle]) -> String {
    dots(&row.iter().map(|c| c.filled).collect::<Vec<_>>())
}

fn dots(filled: &[bool]) -> String {
    filled
        .iter()
        .map(|&f| if f { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_items(actor: &Actor) {
    if actor.items.is_empty() {
        return;
    }
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Type", "Name", "Details"]);
    for item in &actor.items {
        let kind = match &item.kind {
            ItemKind::Advantage { category, .. } => format!("advantage ({})", category.label()),
            other => other.item_type().key().to_string(),
        };
        let details = item.kind.description().unwrap_or_default();
        table.add_row(vec![
            item.id.to_string(),
            kind,
            item.name.clone(),
            details.to_string(),
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_render_filled_first() {
        assert_eq!(dots(&[true, true, false]), "● ● ○");
        assert_eq!(dots(&[]), "");
    }
}

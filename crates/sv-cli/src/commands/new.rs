use std::path::{Path, PathBuf};

use colored::Colorize;
use sv_core::{Actor, ActorKind};

pub fn run(kind: &str, name: &str, file: Option<&Path>) -> Result<(), String> {
    let kind = ActorKind::parse(kind).ok_or_else(|| {
        format!(
            "unknown sheet type \"{kind}\" (expected player_character, lieutenant, villain or henchman)"
        )
    })?;
    if name.trim().is_empty() {
        return Err("actor name cannot be empty".into());
    }

    let target = match file {
        Some(path) => path.to_path_buf(),
        None => default_path(name),
    };
    if target.exists() {
        return Err(format!("{} already exists", target.display()));
    }

    let actor = Actor::new(kind, name.trim());
    super::write_actor(&actor, &target)?;

    println!(
        "  Created {} '{}' [{}] in {}",
        kind,
        actor.name.bold(),
        actor.id.to_string().dimmed(),
        target.display()
    );
    Ok(())
}

fn default_path(name: &str) -> PathBuf {
    let stem: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    PathBuf::from(format!("{stem}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_slugged() {
        assert_eq!(default_path("Aurore du Lac"), PathBuf::from("aurore_du_lac.json"));
        assert_eq!(default_path("  Verdugo "), PathBuf::from("verdugo.json"));
    }
}

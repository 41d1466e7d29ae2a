use std::path::Path;

use sv_core::{Attribute, CombatAttribute, Skill, SorceryKind};
use sv_mechanics::{HeroismStep, SheetAction};

use super::apply_action as apply;

fn parse_attribute(s: &str) -> Result<Attribute, String> {
    Attribute::parse(s).ok_or_else(|| format!("unknown attribute \"{s}\""))
}

fn parse_skill(s: &str) -> Result<Skill, String> {
    Skill::parse(s).ok_or_else(|| format!("unknown skill \"{s}\""))
}

pub fn attribute(path: &Path, attribute: &str, index: u32) -> Result<(), String> {
    let attribute = parse_attribute(attribute)?;
    apply(path, SheetAction::AttributeCircle { attribute, index })
}

pub fn skill(path: &Path, skill: &str, index: u32) -> Result<(), String> {
    let skill = parse_skill(skill)?;
    apply(path, SheetAction::SkillCircle { skill, index })
}

pub fn specialize(path: &Path, skill: &str) -> Result<(), String> {
    let skill = parse_skill(skill)?;
    apply(path, SheetAction::ToggleSpecialized(skill))
}

pub fn link(path: &Path, combat: &str, attribute: &str) -> Result<(), String> {
    let combat = CombatAttribute::parse(combat)
        .ok_or_else(|| format!("unknown combat attribute \"{combat}\""))?;
    let attribute = parse_attribute(attribute)?;
    apply(path, SheetAction::LinkCombat { combat, attribute })
}

pub fn wound(path: &Path, index: u32, dramatic: bool) -> Result<(), String> {
    let action = if dramatic {
        SheetAction::DramaticStar(index)
    } else {
        SheetAction::WoundCircle(index)
    };
    apply(path, action)
}

pub fn backlash(path: &Path, index: u32) -> Result<(), String> {
    apply(path, SheetAction::BacklashCircle(index))
}

pub fn heroism(path: &Path, step: &str) -> Result<(), String> {
    let step = match step.trim().to_lowercase().as_str() {
        "up" | "+" | "increase" => HeroismStep::Increase,
        "down" | "-" | "decrease" => HeroismStep::Decrease,
        _ => return Err(format!("unknown heroism step \"{step}\" (expected up or down)")),
    };
    apply(path, SheetAction::Heroism(step))
}

pub fn sorcery(path: &Path, school: &str) -> Result<(), String> {
    let kind = match school.trim().to_lowercase().as_str() {
        "none" | "aucune" | "" => None,
        _ => Some(
            SorceryKind::parse(school)
                .ok_or_else(|| format!("unknown sorcery school \"{school}\""))?,
        ),
    };
    apply(path, SheetAction::SetSorcery(kind))
}

pub fn power(path: &Path, value: u32) -> Result<(), String> {
    apply(path, SheetAction::SetPower(value))
}

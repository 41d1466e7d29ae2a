//! Rule variants: where a check's threshold and wound penalty come from.
//!
//! | Variant  | Threshold                                   | Wound penalty     |
//! |----------|---------------------------------------------|-------------------|
//! | standard | `10 - skill - modifier`                     | none              |
//! | house    | the attribute's own `10 - value - modifier` | dramatic wounds   |
//!
//! Combat attributes borrow the threshold of the base attribute they link to.

use serde::{Deserialize, Serialize};
use sv_core::{Actor, Attribute, CombatAttribute};

use crate::config::SystemSettings;

/// Which threshold rule a game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleVariant {
    /// Thresholds come from the skill rating.
    Standard,
    /// Thresholds come from the attribute; dramatic wounds cost dice.
    #[serde(alias = "extended")]
    House,
}

impl RuleVariant {
    /// Parse a variant from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "house" | "extended" => Some(Self::House),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::House => write!(f, "house"),
        }
    }
}

/// Threshold of an attribute rated `value`.
pub fn attribute_threshold(value: u32, modifier: i32) -> i32 {
    rating_threshold(value, modifier)
}

/// Threshold of a skill rated `value` (standard variant).
pub fn skill_threshold(value: u32, modifier: i32) -> i32 {
    rating_threshold(value, modifier)
}

fn rating_threshold(value: u32, modifier: i32) -> i32 {
    let value = i32::try_from(value).unwrap_or(i32::MAX);
    10_i32.saturating_sub(value).saturating_sub(modifier)
}

/// The attribute, or combat attribute, a check rolls with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollChoice {
    /// A base attribute.
    Attribute(Attribute),
    /// A combat attribute, standing in for its linked base attribute.
    Combat(CombatAttribute),
}

impl RollChoice {
    /// Parse a base or combat attribute name.
    pub fn parse(s: &str) -> Option<Self> {
        Attribute::parse(s)
            .map(Self::Attribute)
            .or_else(|| CombatAttribute::parse(s).map(Self::Combat))
    }

    /// The base attribute whose rating and threshold the check uses.
    pub fn base(self, actor: &Actor) -> Attribute {
        match self {
            Self::Attribute(a) => a,
            Self::Combat(c) => actor.combat_link(c),
        }
    }

    /// Label shown on the roll message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attribute(a) => a.label(),
            Self::Combat(c) => c.label(),
        }
    }
}

/// Threshold for a check, per the game's variant.
pub fn roll_threshold(settings: &SystemSettings, attribute_value: u32, skill_value: u32) -> i32 {
    match settings.variant {
        RuleVariant::Standard => skill_threshold(skill_value, settings.threshold_modifier),
        RuleVariant::House => attribute_threshold(attribute_value, settings.threshold_modifier),
    }
}

/// Dice a character loses to wounds, per the game's variant.
pub fn wound_penalty(settings: &SystemSettings, dramatic_wounds: u32) -> u32 {
    match settings.variant {
        RuleVariant::Standard => 0,
        RuleVariant::House => dramatic_wounds,
    }
}

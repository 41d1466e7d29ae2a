//! Attributes, combat attributes, and skills.
//!
//! Keys serialize in snake_case English. Labels are the French names printed
//! on the sheet and in roll messages. [`Attribute::parse`] and friends accept
//! either form, case-insensitively.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five base attributes, rated 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Gaillardise.
    Brawn,
    /// Finesse.
    Finesse,
    /// Résolution.
    Resolve,
    /// Esprit.
    Wits,
    /// Panache.
    Panache,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Self; 5] = [
        Self::Wits,
        Self::Finesse,
        Self::Brawn,
        Self::Resolve,
        Self::Panache,
    ];

    /// Stable key used in documents.
    pub fn key(self) -> &'static str {
        match self {
            Self::Brawn => "brawn",
            Self::Finesse => "finesse",
            Self::Resolve => "resolve",
            Self::Wits => "wits",
            Self::Panache => "panache",
        }
    }

    /// Label shown on the sheet.
    pub fn label(self) -> &'static str {
        match self {
            Self::Brawn => "Gaillardise",
            Self::Finesse => "Finesse",
            Self::Resolve => "Résolution",
            Self::Wits => "Esprit",
            Self::Panache => "Panache",
        }
    }

    /// Parse from an English key or a French sheet key.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "brawn" | "gaillardise" => Some(Self::Brawn),
            "finesse" => Some(Self::Finesse),
            "resolve" | "resolution" | "résolution" => Some(Self::Resolve),
            "wits" | "esprit" => Some(Self::Wits),
            "panache" => Some(Self::Panache),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A combat attribute. It has no rating of its own and borrows the value and
/// threshold of the base attribute it is linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatAttribute {
    /// Attaque.
    Attack,
    /// Défense.
    Defense,
    /// Mouvement.
    Movement,
    /// Dégâts.
    Damage,
    /// Robustesse. Also sizes the wound groups.
    Toughness,
}

impl CombatAttribute {
    /// All combat attributes in sheet order.
    pub const ALL: [Self; 5] = [
        Self::Attack,
        Self::Defense,
        Self::Movement,
        Self::Damage,
        Self::Toughness,
    ];

    /// Stable key used in documents.
    pub fn key(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::Movement => "movement",
            Self::Damage => "damage",
            Self::Toughness => "toughness",
        }
    }

    /// Label shown on the sheet.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attaque",
            Self::Defense => "Défense",
            Self::Movement => "Mouvement",
            Self::Damage => "Dégâts",
            Self::Toughness => "Robustesse",
        }
    }

    /// The base attribute a fresh sheet links this combat attribute to.
    pub fn default_link(self) -> Attribute {
        match self {
            Self::Attack => Attribute::Finesse,
            Self::Defense => Attribute::Wits,
            Self::Movement => Attribute::Panache,
            Self::Damage => Attribute::Brawn,
            Self::Toughness => Attribute::Resolve,
        }
    }

    /// Parse from an English key or a French sheet key.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "attack" | "attaque" => Some(Self::Attack),
            "defense" | "défense" => Some(Self::Defense),
            "movement" | "mouvement" => Some(Self::Movement),
            "damage" | "degats" | "dégâts" => Some(Self::Damage),
            "toughness" | "robustesse" => Some(Self::Toughness),
            _ => None,
        }
    }
}

impl fmt::Display for CombatAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

macro_rules! skills {
    ($( $variant:ident => $key:literal, $sheet_key:literal, $label:literal; )*) => {
        /// One of the skills on the character sheet, rated 0 to 5.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Skill {
            $(
                #[doc = $label]
                $variant,
            )*
        }

        impl Skill {
            /// All skills in sheet order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Stable key used in documents.
            pub fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)*
                }
            }

            /// Label shown on the sheet.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }

            /// Parse from an English key or a French sheet key.
            pub fn parse(s: &str) -> Option<Self> {
                let lower = s.trim().to_lowercase();
                Self::ALL.iter().copied().find(|skill| {
                    lower == skill.key()
                        || lower == skill.label().to_lowercase()
                        || lower == match skill {
                            $(Self::$variant => $sheet_key.to_lowercase(),)*
                        }
                })
            }
        }
    };
}

skills! {
    RangedWeapons => "ranged_weapons", "armeDeTir", "Arme de tir";
    MeleeWeapons => "melee_weapons", "armesBlanches", "Armes blanches";
    Athletics => "athletics", "athletisme", "Athlétisme";
    Empathy => "empathy", "empathie", "Empathie";
    Stealth => "stealth", "furtivite", "Furtivité";
    Engineering => "engineering", "ingenierie", "Ingénierie";
    Intrigue => "intrigue", "intrigue", "Intrigue";
    Theft => "theft", "larcin", "Larcin";
    Lore => "lore", "legendes", "Légendes";
    Letters => "letters", "lettre", "Lettre";
    Sailing => "sailing", "navigation", "Navigation";
    Persuasion => "persuasion", "persuasion", "Persuasion";
    Etiquette => "etiquette", "protocole", "Protocole";
    Research => "research", "recherche", "Recherche";
    Religion => "religion", "religion", "Religion";
    Performance => "performance", "representation", "Représentation";
    Science => "science", "science", "Science";
    Sorcery => "sorcery", "sorcellerie", "Sorcellerie";
    Strategy => "strategy", "strategie", "Stratégie";
    Bribery => "bribery", "subornation", "Subornation";
    Survival => "survival", "survie", "Survie";
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_parse_accepts_both_languages() {
        assert_eq!(Attribute::parse("brawn"), Some(Attribute::Brawn));
        assert_eq!(Attribute::parse("Gaillardise"), Some(Attribute::Brawn));
        assert_eq!(Attribute::parse("résolution"), Some(Attribute::Resolve));
        assert_eq!(Attribute::parse("esprit"), Some(Attribute::Wits));
        assert_eq!(Attribute::parse("strength"), None);
    }

    #[test]
    fn combat_attribute_default_links() {
        assert_eq!(
            CombatAttribute::Toughness.default_link(),
            Attribute::Resolve
        );
        assert_eq!(CombatAttribute::Attack.default_link(), Attribute::Finesse);
    }

    #[test]
    fn skill_table_is_complete() {
        assert_eq!(Skill::ALL.len(), 21);
        assert_eq!(Skill::ALL[0], Skill::RangedWeapons);
    }

    #[test]
    fn skill_parse_variants() {
        assert_eq!(Skill::parse("melee_weapons"), Some(Skill::MeleeWeapons));
        assert_eq!(Skill::parse("armesBlanches"), Some(Skill::MeleeWeapons));
        assert_eq!(Skill::parse("Armes blanches"), Some(Skill::MeleeWeapons));
        assert_eq!(Skill::parse("sorcellerie"), Some(Skill::Sorcery));
        assert_eq!(Skill::parse("juggling"), None);
    }

    #[test]
    fn labels_display() {
        assert_eq!(Skill::Performance.to_string(), "Représentation");
        assert_eq!(CombatAttribute::Damage.to_string(), "Dégâts");
        assert_eq!(Attribute::Wits.to_string(), "Esprit");
    }

    #[test]
    fn serde_keys_are_snake_case() {
        let json = serde_json::to_string(&Skill::RangedWeapons).unwrap();
        assert_eq!(json, "\"ranged_weapons\"");
        let back: Attribute = serde_json::from_str("\"panache\"").unwrap();
        assert_eq!(back, Attribute::Panache);
    }
}

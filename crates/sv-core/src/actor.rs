use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::item::{Item, ItemId};
use crate::stats::{Attribute, CombatAttribute, Skill};

/// Unique identifier for every actor document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Generate a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The sheet type of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// A hero run by a player.
    PlayerCharacter,
    /// A villain's lieutenant: a full sheet with only two dramatic wounds.
    Lieutenant,
    /// A villain (scélérat).
    Villain,
    /// A nameless henchman (second couteau) with a single wound row.
    Henchman,
}

impl ActorKind {
    /// Parse a kind from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "player_character" | "pc" | "hero" | "playercharacter" => Some(Self::PlayerCharacter),
            "lieutenant" => Some(Self::Lieutenant),
            "villain" | "scelerat" => Some(Self::Villain),
            "henchman" | "second_couteau" | "secondcouteau" => Some(Self::Henchman),
            _ => None,
        }
    }

    /// Number of dramatic wounds this kind of actor can take.
    pub fn max_dramatic_wounds(self) -> u32 {
        match self {
            Self::Lieutenant => 2,
            _ => 4,
        }
    }

    /// Whether this kind of actor may show a sorcery section at all.
    pub fn can_wield_sorcery(self) -> bool {
        matches!(self, Self::PlayerCharacter | Self::Villain | Self::Lieutenant)
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerCharacter => write!(f, "player character"),
            Self::Lieutenant => write!(f, "lieutenant"),
            Self::Villain => write!(f, "villain"),
            Self::Henchman => write!(f, "henchman"),
        }
    }
}

/// A skill rating plus its specialization flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    /// Rating, 0 for untrained.
    pub value: u32,
    /// Specialized skills explode on tens.
    #[serde(default)]
    pub specialized: bool,
}

/// Wound counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wounds {
    /// Marked normal wound circles.
    pub normal: u32,
    /// Marked dramatic wound stars.
    pub dramatic: u32,
}

/// The schools of sorcery a character may practise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SorceryKind {
    /// Porté.
    Porte,
    /// Sorte. The only school that tracks backlash.
    Sorte,
    /// Hexenwerk.
    Hexen,
    /// Glamour.
    Glamour,
    /// Sanderis.
    Sanderis,
    /// Alquimia.
    Alquemie,
}

impl SorceryKind {
    /// Every school, in sheet order.
    pub const ALL: [Self; 6] = [
        Self::Porte,
        Self::Sorte,
        Self::Hexen,
        Self::Glamour,
        Self::Sanderis,
        Self::Alquemie,
    ];

    /// Parse a school name (case-insensitive, accents ignored).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "porte" | "porté" => Some(Self::Porte),
            "sorte" => Some(Self::Sorte),
            "hexen" | "hexenwerk" => Some(Self::Hexen),
            "glamour" => Some(Self::Glamour),
            "sanderis" => Some(Self::Sanderis),
            "alquemie" | "alquimia" => Some(Self::Alquemie),
            _ => None,
        }
    }

    /// Label shown on the sheet.
    pub fn label(self) -> &'static str {
        match self {
            Self::Porte => "Porte",
            Self::Sorte => "Sorte",
            Self::Hexen => "Hexen",
            Self::Glamour => "Glamour",
            Self::Sanderis => "Sanderis",
            Self::Alquemie => "Alquemie",
        }
    }
}

/// Sorcery section of a sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorcery {
    /// Chosen school, if any.
    pub kind: Option<SorceryKind>,
    /// Backlash (contrecoup) marked so far, 0 to 10.
    #[serde(default)]
    pub backlash: u32,
}

/// An actor document: every character on the table is one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier for this actor.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Sheet type.
    pub kind: ActorKind,
    /// Base attribute ratings.
    pub attributes: BTreeMap<Attribute, u32>,
    /// Skill ratings.
    pub skills: BTreeMap<Skill, SkillRating>,
    /// Which base attribute each combat attribute borrows from.
    pub combat_links: BTreeMap<CombatAttribute, Attribute>,
    /// Wound counters.
    #[serde(default)]
    pub wounds: Wounds,
    /// Heroism points.
    #[serde(default)]
    pub heroism: u32,
    /// Sorcery section.
    #[serde(default)]
    pub sorcery: Sorcery,
    /// Henchman strength (puissance); sizes the henchman wound row.
    #[serde(default = "default_power")]
    pub power: u32,
    /// Embedded items.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Timestamp when the actor was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the actor was last modified.
    pub updated_at: DateTime<Utc>,
}

fn default_power() -> u32 {
    1
}

impl Actor {
    /// Create a fresh actor: every attribute at 1, every skill at 0,
    /// combat attributes on their default links.
    pub fn new(kind: ActorKind, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind,
            attributes: Attribute::ALL.iter().map(|a| (*a, 1)).collect(),
            skills: Skill::ALL
                .iter()
                .map(|s| (*s, SkillRating::default()))
                .collect(),
            combat_links: CombatAttribute::ALL
                .iter()
                .map(|c| (*c, c.default_link()))
                .collect(),
            wounds: Wounds::default(),
            heroism: 0,
            sorcery: Sorcery::default(),
            power: default_power(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rating of a base attribute, 0 if the document lacks it.
    pub fn attribute(&self, attribute: Attribute) -> u32 {
        self.attributes.get(&attribute).copied().unwrap_or(0)
    }

    /// Rating and specialization of a skill, untrained if missing.
    pub fn skill(&self, skill: Skill) -> SkillRating {
        self.skills.get(&skill).copied().unwrap_or_default()
    }

    /// The base attribute a combat attribute borrows from.
    pub fn combat_link(&self, combat: CombatAttribute) -> Attribute {
        self.combat_links
            .get(&combat)
            .copied()
            .unwrap_or_else(|| combat.default_link())
    }

    /// Value of a combat attribute (the linked attribute's value).
    pub fn combat_value(&self, combat: CombatAttribute) -> u32 {
        self.attribute(self.combat_link(combat))
    }

    /// Find an embedded item by ID.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Find an embedded item by ID, mutably.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an item embedded in an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a full UUID or match the 8-character short form against `items`.
    pub fn resolve<'a>(s: &str, items: impl IntoIterator<Item = &'a Item>) -> Option<Self> {
        if let Ok(uuid) = Uuid::parse_str(s) {
            return Some(Self(uuid));
        }
        let s = s.trim().to_lowercase();
        items
            .into_iter()
            .find(|item| item.id.to_string() == s)
            .map(|item| item.id)
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// How often an advantage applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvantageCategory {
    /// Always on.
    #[default]
    Passive,
    /// Applies in specific situations.
    Situational,
    /// Costs heroism to trigger.
    Heroic,
    /// Larger-than-life effects.
    Extraordinary,
}

impl AdvantageCategory {
    /// Every category, in sheet order.
    pub const ALL: [Self; 4] = [
        Self::Passive,
        Self::Situational,
        Self::Heroic,
        Self::Extraordinary,
    ];

    /// Parse a category from user input, English or French.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "passive" | "passif" => Some(Self::Passive),
            "situational" | "situationnel" => Some(Self::Situational),
            "heroic" | "heroique" | "héroïque" => Some(Self::Heroic),
            "extraordinary" | "extraordinaire" => Some(Self::Extraordinary),
            _ => None,
        }
    }

    /// Label shown on the item sheet.
    pub fn label(self) -> &'static str {
        match self {
            Self::Passive => "Passif",
            Self::Situational => "Situationnel",
            Self::Heroic => "Héroïque",
            Self::Extraordinary => "Extraordinaire",
        }
    }
}

/// Item payload by type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// An advantage (avantage).
    Advantage {
        /// Advantage category.
        category: AdvantageCategory,
        /// Rules text.
        description: String,
    },
    /// A power (pouvoir).
    Power {
        /// Rules text.
        description: String,
    },
    /// A flaw (travers).
    Flaw {
        /// Rules text.
        description: String,
    },
    /// A piece of equipment. Name only.
    Equipment,
}

/// The item types an actor can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// See [`ItemKind::Advantage`].
    Advantage,
    /// See [`ItemKind::Power`].
    Power,
    /// See [`ItemKind::Flaw`].
    Flaw,
    /// See [`ItemKind::Equipment`].
    Equipment,
}

impl ItemType {
    /// Serialized tag, as stored in the `type` key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Advantage => "advantage",
            Self::Power => "power",
            Self::Flaw => "flaw",
            Self::Equipment => "equipment",
        }
    }

    /// Parse an item type from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "advantage" | "avantage" => Some(Self::Advantage),
            "power" | "pouvoir" => Some(Self::Power),
            "flaw" | "travers" => Some(Self::Flaw),
            "equipment" | "equipement" | "equipements" => Some(Self::Equipment),
            _ => None,
        }
    }
}

impl ItemKind {
    /// The type tag of this payload.
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Advantage { .. } => ItemType::Advantage,
            Self::Power { .. } => ItemType::Power,
            Self::Flaw { .. } => ItemType::Flaw,
            Self::Equipment => ItemType::Equipment,
        }
    }

    /// Rules text, if the type carries one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Advantage { description, .. }
            | Self::Power { description }
            | Self::Flaw { description } => Some(description),
            Self::Equipment => None,
        }
    }

    /// Mutable rules text, if the type carries one.
    pub fn description_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Advantage { description, .. }
            | Self::Power { description }
            | Self::Flaw { description } => Some(description),
            Self::Equipment => None,
        }
    }

    /// Mutable category, for advantages only.
    pub fn category_mut(&mut self) -> Option<&mut AdvantageCategory> {
        match self {
            Self::Advantage { category, .. } => Some(category),
            _ => None,
        }
    }
}

/// An item embedded in an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Type-specific payload.
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    /// Create an item with an explicit name and payload.
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind,
        }
    }

    /// The blank item created by the sheet's "+" button for a type.
    pub fn new_default(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Advantage => Self::new(
                "Nouvel Avantage",
                ItemKind::Advantage {
                    category: AdvantageCategory::Passive,
                    description: String::new(),
                },
            ),
            ItemType::Power => Self::new(
                "Nouveau Pouvoir",
                ItemKind::Power {
                    description: String::new(),
                },
            ),
            ItemType::Flaw => Self::new(
                "Nouveau Travers",
                ItemKind::Flaw {
                    description: String::new(),
                },
            ),
            ItemType::Equipment => Self::new("Nouvel Equipement", ItemKind::Equipment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_per_type() {
        let adv = Item::new_default(ItemType::Advantage);
        assert_eq!(adv.name, "Nouvel Avantage");
        assert_eq!(
            adv.kind,
            ItemKind::Advantage {
                category: AdvantageCategory::Passive,
                description: String::new(),
            }
        );
        assert_eq!(Item::new_default(ItemType::Flaw).name, "Nouveau Travers");
        assert_eq!(Item::new_default(ItemType::Power).name, "Nouveau Pouvoir");
        let eq = Item::new_default(ItemType::Equipment);
        assert_eq!(eq.kind, ItemKind::Equipment);
        assert!(eq.kind.description().is_none());
    }

    #[test]
    fn item_type_parse() {
        assert_eq!(ItemType::parse("travers"), Some(ItemType::Flaw));
        assert_eq!(ItemType::parse("Equipements"), Some(ItemType::Equipment));
        assert_eq!(ItemType::parse("spell"), None);
        assert_eq!(ItemType::parse(ItemType::Power.key()), Some(ItemType::Power));
    }

    #[test]
    fn category_parse() {
        assert_eq!(
            AdvantageCategory::parse("Héroïque"),
            Some(AdvantageCategory::Heroic)
        );
        assert_eq!(
            AdvantageCategory::parse("situational"),
            Some(AdvantageCategory::Situational)
        );
        assert_eq!(AdvantageCategory::parse("legendary"), None);
        for category in AdvantageCategory::ALL {
            assert_eq!(AdvantageCategory::parse(category.label()), Some(category));
        }
    }

    #[test]
    fn editable_payload_fields() {
        let mut power = Item::new_default(ItemType::Power);
        power.kind.description_mut().unwrap().push_str("Vole une fois par scène.");
        assert_eq!(power.kind.description(), Some("Vole une fois par scène."));
        assert!(power.kind.category_mut().is_none());

        let mut adv = Item::new_default(ItemType::Advantage);
        *adv.kind.category_mut().unwrap() = AdvantageCategory::Extraordinary;
        assert!(matches!(
            adv.kind,
            ItemKind::Advantage {
                category: AdvantageCategory::Extraordinary,
                ..
            }
        ));

        let mut gear = Item::new_default(ItemType::Equipment);
        assert!(gear.kind.description_mut().is_none());
        assert!(gear.kind.category_mut().is_none());
    }

    #[test]
    fn resolve_short_id() {
        let items = vec![Item::new_default(ItemType::Power)];
        let short = items[0].id.to_string();
        assert_eq!(ItemId::resolve(&short, &items), Some(items[0].id));
        assert_eq!(ItemId::resolve("zzzzzzzz", &items), None);
    }

    #[test]
    fn serializes_with_type_tag() {
        let item = Item::new("Sabre", ItemKind::Equipment);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "equipment");
        assert_eq!(json["name"], "Sabre");
    }

    #[test]
    fn category_labels() {
        insta::assert_snapshot!(AdvantageCategory::Heroic.label(), @"Héroïque");
    }
}

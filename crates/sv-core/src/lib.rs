//! Core document model for the Seventh Sea character sheets.
//!
//! Actors (player characters, lieutenants, villains, henchmen) and the items
//! embedded in them are owned by the host. This crate defines their shape and
//! the [`DocumentStore`] capability sheets use to read and mutate them.

/// Actor documents, identifiers, wounds and sorcery.
pub mod actor;
/// Error types used throughout the crate.
pub mod error;
/// Items embedded in actors: advantages, powers, flaws, equipment.
pub mod item;
/// Attributes, combat attributes and skills.
pub mod stats;
/// The document store capability and its in-memory implementation.
pub mod store;

/// Re-export actor types.
pub use actor::{Actor, ActorId, ActorKind, SkillRating, Sorcery, SorceryKind, Wounds};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export item types.
pub use item::{AdvantageCategory, Item, ItemId, ItemKind, ItemType};
/// Re-export rating keys.
pub use stats::{Attribute, CombatAttribute, Skill};
/// Re-export the store.
pub use store::{DocumentStore, MemoryStore};

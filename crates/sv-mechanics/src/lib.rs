//! Sheet mechanics for the Seventh Sea character sheets.
//!
//! Provides the d10 dice pool resolver with exploding tens, the two rule
//! variants for thresholds and wound penalties, derived sheet values, typed
//! sheet mutations, and the skill roll that ties them together.

pub mod check;
pub mod command;
pub mod config;
pub mod dice;
pub mod error;
pub mod message;
pub mod resolution;
pub mod rules;
pub mod sheet;

pub use check::{SkillCheck, build_request, roll_skill};
pub use command::{Field, FieldCommand, FieldValue, HeroismStep, SheetAction, apply, dispatch, plan};
pub use config::SystemSettings;
pub use dice::{DicePool, DiceRoll, DieSource, RngDice, ScriptedDice};
pub use error::{MechError, MechResult};
pub use message::RollMessage;
pub use resolution::{RollOutcome, RollRequest, resolve};
pub use rules::{RollChoice, RuleVariant};
pub use sheet::{SheetView, Track, WoundLayout};

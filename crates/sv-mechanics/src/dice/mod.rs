//! Ten-sided dice and the sources that draw them.
//!
//! Every check in the system rolls d10s. Where the faces come from is a
//! capability ([`DieSource`]): a seeded PRNG for play and tests, or a scripted
//! sequence when replaying a roll the host already made.

pub mod pool;
pub mod roll;
pub mod source;

pub use pool::DicePool;
pub use roll::DiceRoll;
pub use source::{DieSource, RngDice, ScriptedDice};

/// Number of faces on the system's die.
pub const SIDES: u8 = 10;

/// Returns true if `face` is a legal d10 face.
pub fn is_face(face: u8) -> bool {
    (1..=SIDES).contains(&face)
}

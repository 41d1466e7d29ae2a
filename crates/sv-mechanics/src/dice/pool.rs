//! Dice pool size.

use serde::{Deserialize, Serialize};

/// The terms that make up a dice pool.
///
/// `size = attribute + skill + bonus - wager - wound_penalty`. The size can
/// come out zero or negative; callers must reject such pools before rolling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    /// Rating of the chosen attribute (or the attribute a combat attribute links to).
    pub attribute: u32,
    /// Rating of the chosen skill.
    pub skill: u32,
    /// Extra dice. May be negative.
    pub bonus: i32,
    /// Dice set aside before rolling.
    pub wager: u32,
    /// Dice lost to dramatic wounds.
    pub wound_penalty: u32,
}

impl DicePool {
    /// A pool of attribute plus skill, with no modifiers.
    pub fn new(attribute: u32, skill: u32) -> Self {
        Self {
            attribute,
            skill,
            ..Self::default()
        }
    }

    /// Set the bonus dice.
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    /// Set the wager.
    pub fn with_wager(mut self, wager: u32) -> Self {
        self.wager = wager;
        self
    }

    /// Set the wound penalty.
    pub fn with_wound_penalty(mut self, penalty: u32) -> Self {
        self.wound_penalty = penalty;
        self
    }

    /// Number of dice this pool rolls. Zero or negative means no roll.
    pub fn size(&self) -> i64 {
        i64::from(self.attribute) + i64::from(self.skill) + i64::from(self.bonus)
            - i64::from(self.wager)
            - i64::from(self.wound_penalty)
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} + {} + {} - {} - {} = {}",
            self.attribute,
            self.skill,
            self.bonus,
            self.wager,
            self.wound_penalty,
            self.size()
        )
    }
}

//! The dice pool resolver.
//!
//! A check rolls `attribute + skill + bonus - wager - wound_penalty` d10s.
//! Each die at or above the threshold is a success. Specialized skills
//! explode: every 10 buys another die, and those dice explode in turn.
//! With a difficulty, the check passes when successes reach it.
//!
//! The resolver is variant-agnostic: the threshold and wound penalty arrive
//! already computed (see [`crate::rules`]). It draws faces from an injected
//! [`DieSource`] and has no other side effects.

pub mod count;
pub mod explode;

pub use count::{count_successes, judge};
pub use explode::{Explosion, MAX_EXPLOSION_ROUNDS, explode};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::{DicePool, DiceRoll, DieSource};
use crate::error::{MechError, MechResult};

/// Everything the resolver needs for one check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    /// Pool terms.
    pub pool: DicePool,
    /// Lowest face that counts as a success.
    pub threshold: i32,
    /// Tens explode.
    pub specialized: bool,
    /// Successes needed to pass, if the check has a difficulty.
    pub difficulty: Option<u32>,
}

impl RollRequest {
    /// A request for `pool` against `threshold`, unspecialized, no difficulty.
    pub fn new(pool: DicePool, threshold: i32) -> Self {
        Self {
            pool,
            threshold,
            specialized: false,
            difficulty: None,
        }
    }

    /// Enable or disable exploding tens.
    pub fn specialized(mut self, specialized: bool) -> Self {
        self.specialized = specialized;
        self
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Option<u32>) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Number of base dice. Zero or negative means the check cannot be rolled.
    pub fn pool_size(&self) -> i64 {
        self.pool.size()
    }
}

/// The result of a resolved check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Base dice rolled.
    pub pool_size: u32,
    /// Threshold the dice were counted against.
    pub threshold: i32,
    /// Every face, base round first, then each explosion round in order.
    pub dice: DiceRoll,
    /// Number of dice drawn in each round. `rounds[0]` is the base round.
    pub rounds: Vec<usize>,
    /// Dice at or above the threshold.
    pub success_count: u32,
    /// Present only when the request had a difficulty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
    /// True if the explosion cap cut the chain short.
    #[serde(default)]
    pub capped: bool,
}

impl RollOutcome {
    /// Faces of round `index`, if it exists.
    pub fn round(&self, index: usize) -> Option<&[u8]> {
        let len = *self.rounds.get(index)?;
        let start: usize = self.rounds[..index].iter().sum();
        self.dice.faces.get(start..start + len)
    }

    /// Dice added by exploding tens.
    pub fn exploded(&self) -> usize {
        self.dice.count() - self.pool_size as usize
    }
}

/// Resolve a check.
///
/// Fails with [`MechError::InvalidPool`] before drawing anything when the
/// pool is empty or negative, and with [`MechError::PoolTooLarge`] when it
/// does not fit a single draw. Errors from the die source propagate.
pub fn resolve(request: &RollRequest, source: &mut impl DieSource) -> MechResult<RollOutcome> {
    let size = request.pool_size();
    if size <= 0 {
        debug!(size, "rejecting empty pool");
        return Err(MechError::InvalidPool { size });
    }
    let pool_size = u32::try_from(size).map_err(|_| MechError::PoolTooLarge {
        size,
        max: u32::MAX,
    })?;

    let base = source.draw(pool_size)?;
    let mut dice = DiceRoll::new(base);
    let mut rounds = vec![dice.count()];
    let mut capped = false;

    if request.specialized {
        let explosion = explode(&dice.faces, source)?;
        for round in &explosion.rounds {
            rounds.push(round.len());
            dice.extend(round);
        }
        capped = explosion.capped;
    }

    let success_count = count_successes(&dice, request.threshold);
    let passed = judge(success_count, request.difficulty);

    debug!(
        pool = pool_size,
        threshold = request.threshold,
        rounds = rounds.len(),
        successes = success_count,
        ?passed,
        "resolved check"
    );

    Ok(RollOutcome {
        pool_size,
        threshold: request.threshold,
        dice,
        rounds,
        success_count,
        passed,
        capped,
    })
}

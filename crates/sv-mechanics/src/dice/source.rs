//! Die sources.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{SIDES, is_face};
use crate::error::{MechError, MechResult};

/// Something that can draw `count` d10 faces.
///
/// A failure here is fatal for the roll in progress and must be propagated.
pub trait DieSource {
    /// Draw `count` faces, each in `1..=10`.
    fn draw(&mut self, count: u32) -> MechResult<Vec<u8>>;
}

/// Uniform d10s from any random number generator.
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDice<StdRng> {
    /// Deterministic dice from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Dice seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> DieSource for RngDice<R> {
    fn draw(&mut self, count: u32) -> MechResult<Vec<u8>> {
        Ok((0..count)
            .map(|_| self.rng.random_range(1..=SIDES))
            .collect())
    }
}

/// Replays a fixed sequence of faces, in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
    drawn: usize,
}

impl ScriptedDice {
    /// Script the faces to hand out.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            drawn: 0,
        }
    }

    /// How many faces have been handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Faces not yet handed out.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DieSource for ScriptedDice {
    fn draw(&mut self, count: u32) -> MechResult<Vec<u8>> {
        let count = count as usize;
        if count > self.faces.len() {
            return Err(MechError::DiceSource(format!(
                "script exhausted: {count} dice requested, {} left",
                self.faces.len()
            )));
        }
        if let Some(bad) = self.faces.iter().take(count).find(|f| !is_face(**f)) {
            return Err(MechError::DiceSource(format!("scripted face {bad} is not a d10 face")));
        }
        self.drawn += count;
        Ok(self.faces.drain(..count).collect())
    }
}

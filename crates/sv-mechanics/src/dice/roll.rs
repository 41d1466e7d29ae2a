//! Rolled faces and aggregation.

use serde::{Deserialize, Serialize};

use super::SIDES;

/// Faces rolled for a check, in the order they were drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiceRoll {
    /// Individual faces.
    pub faces: Vec<u8>,
}

impl DiceRoll {
    /// Wrap a list of faces.
    pub fn new(faces: Vec<u8>) -> Self {
        Self { faces }
    }

    /// Count faces at or above the given threshold.
    pub fn count_at_or_above(&self, threshold: i32) -> u32 {
        self.faces
            .iter()
            .filter(|f| i32::from(**f) >= threshold)
            .count() as u32
    }

    /// Count faces showing the maximum value.
    pub fn tens(&self) -> u32 {
        count_tens(&self.faces)
    }

    /// Number of faces.
    pub fn count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if nothing was rolled.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Append another round of faces.
    pub fn extend(&mut self, faces: &[u8]) {
        self.faces.extend_from_slice(faces);
    }
}

/// Count faces showing the maximum value in a slice.
pub fn count_tens(faces: &[u8]) -> u32 {
    faces.iter().filter(|f| **f == SIDES).count() as u32
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.faces.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", values.join(", "))
    }
}

//! Circle tracks (wound rows, backlash).
//!
//! A track is a clamped counter drawn as a row of circles. Clicking circle
//! `i` fills the row up to `i`; clicking the last filled circle clears it.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A named counter clamped between 0 and `max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name of the track.
    pub name: String,
    /// Current value.
    pub current: u32,
    /// Maximum value.
    pub max: u32,
}

impl Track {
    /// Create a track, clamping the starting value to `max`.
    pub fn new(name: impl Into<String>, current: u32, max: u32) -> Self {
        Self {
            name: name.into(),
            current: current.min(max),
            max,
        }
    }

    /// Click circle `index` (1-based). Returns the new value.
    pub fn toggle(&mut self, index: u32) -> MechResult<u32> {
        self.current = toggle_value(self.current, index, self.max)?;
        Ok(self.current)
    }

    /// Filled flag for each circle, first circle first.
    pub fn circles(&self) -> Vec<bool> {
        (1..=self.max).map(|i| self.current >= i).collect()
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.current, self.max)
    }
}

/// The value a row holds after clicking circle `index`.
pub fn toggle_value(current: u32, index: u32, max: u32) -> MechResult<u32> {
    if index == 0 || index > max {
        return Err(MechError::InvalidIndex { index, max });
    }
    Ok(if current == index { index - 1 } else { index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_initial() {
        let t = Track::new("Backlash", 100, 10);
        assert_eq!(t.current, 10);
    }

    #[test]
    fn toggle_fills_up_to_index() {
        let mut t = Track::new("Backlash", 0, 10);
        assert_eq!(t.toggle(4).unwrap(), 4);
        assert_eq!(t.toggle(2).unwrap(), 2);
    }

    #[test]
    fn toggle_last_filled_clears_it() {
        let mut t = Track::new("Backlash", 4, 10);
        assert_eq!(t.toggle(4).unwrap(), 3);
        let mut t = Track::new("Wounds", 1, 3);
        assert_eq!(t.toggle(1).unwrap(), 0);
    }

    #[test]
    fn toggle_out_of_range() {
        let mut t = Track::new("Wounds", 0, 3);
        assert!(matches!(
            t.toggle(4),
            Err(MechError::InvalidIndex { index: 4, max: 3 })
        ));
        assert!(t.toggle(0).is_err());
        assert_eq!(t.current, 0);
    }

    #[test]
    fn circles_and_display() {
        let t = Track::new("Backlash", 2, 4);
        assert_eq!(t.circles(), vec![true, true, false, false]);
        assert_eq!(t.to_string(), "Backlash: 2/4");
    }
}

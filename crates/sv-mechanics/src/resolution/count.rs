//! Success counting and difficulty judgement.
//!
//! A die is a success when its face is at or above the threshold. The
//! threshold is fixed for the whole roll, explosion rounds included.

use crate::dice::DiceRoll;

/// Count the successes in a finished roll.
pub fn count_successes(roll: &DiceRoll, threshold: i32) -> u32 {
    roll.count_at_or_above(threshold)
}

/// `Some(successes >= difficulty)` when a difficulty was set, `None` otherwise.
pub fn judge(successes: u32, difficulty: Option<u32>) -> Option<bool> {
    difficulty.map(|d| successes >= d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_faces_at_or_above_threshold() {
        let roll = DiceRoll::new(vec![6, 7, 2]);
        assert_eq!(count_successes(&roll, 6), 2);
        assert_eq!(count_successes(&roll, 8), 0);
    }

    #[test]
    fn judge_with_difficulty() {
        assert_eq!(judge(2, Some(2)), Some(true));
        assert_eq!(judge(1, Some(2)), Some(false));
        assert_eq!(judge(0, Some(0)), Some(true));
    }

    #[test]
    fn judge_without_difficulty() {
        assert_eq!(judge(5, None), None);
    }
}

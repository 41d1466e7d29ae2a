//! Roll messages: what gets posted to the table after a check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resolution::RollOutcome;

/// A shareable record of one check. Carries the full outcome so the host can
/// store it for audit or replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollMessage {
    /// Who rolled.
    pub speaker: String,
    /// "<attribute> - <skill>".
    pub title: String,
    /// Dice set aside for the roll.
    pub wager: u32,
    /// Successes needed, if any.
    pub difficulty: Option<u32>,
    /// The resolved dice.
    pub outcome: RollOutcome,
}

impl RollMessage {
    /// Status line, when the check had a difficulty.
    pub fn status(&self) -> Option<String> {
        let difficulty = self.difficulty?;
        let passed = self.outcome.passed?;
        Some(if passed {
            format!("Réussite (Difficulté {difficulty})")
        } else {
            format!("Échec (Difficulté {difficulty})")
        })
    }

    /// Detail line listing every face and the threshold.
    pub fn details(&self) -> String {
        format!(
            "Dés : {} (Seuil : {})",
            self.outcome.dice, self.outcome.threshold
        )
    }
}

impl fmt::Display for RollMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.speaker, self.title)?;
        writeln!(f, "Succès : {}", self.outcome.success_count)?;
        if self.wager > 0 {
            writeln!(f, "Pari : {}", self.wager)?;
        }
        if let Some(status) = self.status() {
            writeln!(f, "{status}")?;
        }
        write!(f, "{}", self.details())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceRoll;

    fn message(wager: u32, difficulty: Option<u32>, passed: Option<bool>) -> RollMessage {
        RollMessage {
            speaker: "Aurore".into(),
            title: "Finesse - Armes blanches".into(),
            wager,
            difficulty,
            outcome: RollOutcome {
                pool_size: 3,
                threshold: 6,
                dice: DiceRoll::new(vec![6, 7, 2]),
                rounds: vec![3],
                success_count: 2,
                passed,
                capped: false,
            },
        }
    }

    #[test]
    fn details_line() {
        insta::assert_snapshot!(message(0, None, None).details(), @"Dés : 6, 7, 2 (Seuil : 6)");
    }

    #[test]
    fn status_lines() {
        assert_eq!(
            message(0, Some(2), Some(true)).status().as_deref(),
            Some("Réussite (Difficulté 2)")
        );
        assert_eq!(
            message(0, Some(3), Some(false)).status().as_deref(),
            Some("Échec (Difficulté 3)")
        );
        assert_eq!(message(0, None, None).status(), None);
    }

    #[test]
    fn rendering_without_wager_or_difficulty() {
        let text = message(0, None, None).to_string();
        assert_eq!(
            text,
            "Aurore: Finesse - Armes blanches\nSuccès : 2\nDés : 6, 7, 2 (Seuil : 6)"
        );
    }

    #[test]
    fn rendering_with_wager_and_difficulty() {
        let text = message(1, Some(2), Some(true)).to_string();
        assert!(text.contains("Pari : 1\n"));
        assert!(text.contains("Réussite (Difficulté 2)\n"));
    }
}

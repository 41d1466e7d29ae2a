//! Exploding tens.
//!
//! After each round, every 10 in that round buys one more die. The next round
//! draws exactly that many dice and the check repeats on it, until a round
//! shows no 10.

use tracing::warn;

use crate::dice::DieSource;
use crate::dice::roll::count_tens;
use crate::error::MechResult;

/// Most explosion rounds rolled after the base round.
///
/// A chain this long has probability 10^-100, so the cap never fires at a
/// real table. When it does, the outcome is flagged instead of looping on.
pub const MAX_EXPLOSION_ROUNDS: usize = 100;

/// Rounds drawn after a base round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explosion {
    /// Faces of each explosion round, in draw order.
    pub rounds: Vec<Vec<u8>>,
    /// True if the round cap stopped the chain while tens were still pending.
    pub capped: bool,
}

/// Draw explosion rounds for `base` until a round contains no 10.
pub fn explode(base: &[u8], source: &mut impl DieSource) -> MechResult<Explosion> {
    let mut explosion = Explosion::default();
    let mut pending = count_tens(base);

    while pending > 0 {
        if explosion.rounds.len() >= MAX_EXPLOSION_ROUNDS {
            warn!(
                rounds = MAX_EXPLOSION_ROUNDS,
                pending, "explosion cap reached; remaining tens not rerolled"
            );
            explosion.capped = true;
            break;
        }
        let round = source.draw(pending)?;
        pending = count_tens(&round);
        explosion.rounds.push(round);
    }

    Ok(explosion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn no_tens_no_rounds() {
        let mut dice = ScriptedDice::default();
        let e = explode(&[1, 5, 9], &mut dice).unwrap();
        assert!(e.rounds.is_empty());
        assert!(!e.capped);
    }

    #[test]
    fn chained_rounds() {
        // Two tens in the base, one ten in round one, none in round two.
        let mut dice = ScriptedDice::new([10, 4, 7]);
        let e = explode(&[10, 10, 3], &mut dice).unwrap();
        assert_eq!(e.rounds, vec![vec![10, 4], vec![7]]);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn cap_stops_endless_tens() {
        let mut dice = ScriptedDice::new(std::iter::repeat_n(10, MAX_EXPLOSION_ROUNDS + 5));
        let e = explode(&[10], &mut dice).unwrap();
        assert!(e.capped);
        assert_eq!(e.rounds.len(), MAX_EXPLOSION_ROUNDS);
        assert_eq!(dice.drawn(), MAX_EXPLOSION_ROUNDS);
    }

    #[test]
    fn source_failure_propagates() {
        let mut dice = ScriptedDice::default();
        assert!(explode(&[10], &mut dice).is_err());
    }
}

//! Dice scoring combinatorics.
//!
//! [`score_dice`] is a pure function over the multiset of faces supplied:
//! input order never affects the result, and nothing about game state is
//! consulted. Rules are evaluated in a fixed order and each contributing
//! rule is recorded in the breakdown:
//!
//! 1. **Straight** — all six faces exactly once: flat 1500, no other rule.
//! 2. **Three of a kind** — per face ascending: 1000 for ones, `face * 100`
//!    otherwise. Fires at most once per face (exactly three dice consumed,
//!    so four of a kind leaves one leftover die).
//! 3. **Single ones** — 100 each.
//! 4. **Single fives** — 50 each.
//!
//! Anything left over scores nothing and is returned as `unscored`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, DICE_PER_TURN, DIE_FACES};

/// Up to six faces, inline.
pub type Faces = SmallVec<[u8; 6]>;

/// Points for a straight of all six faces.
pub const STRAIGHT_POINTS: u32 = 1500;

/// Points for three ones.
pub const TRIPLE_ONES_POINTS: u32 = 1000;

/// Points per leftover single one.
pub const SINGLE_ONE_POINTS: u32 = 100;

/// Points per leftover single five.
pub const SINGLE_FIVE_POINTS: u32 = 50;

/// The rule a scoring detail entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreReason {
    /// All six faces exactly once.
    Straight,
    /// Three matching faces.
    ThreeOfAKind,
    /// Leftover ones after triples.
    SingleOnes,
    /// Leftover fives after triples.
    SingleFives,
}

/// One contributing rule: which rule, the faces it consumed, the points it paid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringDetail {
    pub reason: ScoreReason,
    pub values: Faces,
    pub points: u32,
}

/// Result of scoring a set of dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceScore {
    /// Sum of all contributing rules.
    pub total: u32,
    /// Faces that scored nothing, ascending.
    pub unscored: Faces,
    /// Contributing rules in evaluation order.
    pub details: Vec<ScoringDetail>,
}

impl DiceScore {
    fn empty() -> Self {
        Self {
            total: 0,
            unscored: Faces::new(),
            details: Vec::new(),
        }
    }
}

/// Score a set of up to six dice.
///
/// Rejects more than six dice (`DiceCount`) or a face outside 1..=6
/// (`InvalidFace`). An empty set scores zero with an empty breakdown.
///
/// ```
/// use farkle_engine::scoring::score_dice;
///
/// let score = score_dice(&[1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(score.total, 1500);
///
/// let score = score_dice(&[1, 1, 1, 5]).unwrap();
/// assert_eq!(score.total, 1050);
/// ```
pub fn score_dice(dice: &[u8]) -> Result<DiceScore, EngineError> {
    if dice.is_empty() {
        return Ok(DiceScore::empty());
    }

    if dice.len() > DICE_PER_TURN {
        return Err(EngineError::DiceCount {
            got: dice.len(),
            max: DICE_PER_TURN,
        });
    }

    let mut counts = [0u8; DIE_FACES as usize + 1];
    for &face in dice {
        if !(1..=DIE_FACES).contains(&face) {
            return Err(EngineError::InvalidFace { face });
        }
        counts[face as usize] += 1;
    }

    // Straight: every face exactly once. No other rule applies.
    if dice.len() == DICE_PER_TURN && counts[1..].iter().all(|&c| c == 1) {
        return Ok(DiceScore {
            total: STRAIGHT_POINTS,
            unscored: Faces::new(),
            details: vec![ScoringDetail {
                reason: ScoreReason::Straight,
                values: Faces::from_slice(dice),
                points: STRAIGHT_POINTS,
            }],
        });
    }

    let mut total = 0u32;
    let mut details = Vec::new();

    // Three of a kind, ascending by face. Exactly three dice consumed per
    // face, so the rule fires at most once per face per call.
    for face in 1..=DIE_FACES {
        if counts[face as usize] >= 3 {
            let points = if face == 1 {
                TRIPLE_ONES_POINTS
            } else {
                u32::from(face) * 100
            };
            total += points;
            details.push(ScoringDetail {
                reason: ScoreReason::ThreeOfAKind,
                values: Faces::from_slice(&[face; 3]),
                points,
            });
            counts[face as usize] -= 3;
        }
    }

    // Leftover single ones and fives.
    if counts[1] > 0 {
        let points = u32::from(counts[1]) * SINGLE_ONE_POINTS;
        total += points;
        details.push(ScoringDetail {
            reason: ScoreReason::SingleOnes,
            values: std::iter::repeat(1).take(counts[1] as usize).collect(),
            points,
        });
        counts[1] = 0;
    }

    if counts[5] > 0 {
        let points = u32::from(counts[5]) * SINGLE_FIVE_POINTS;
        total += points;
        details.push(ScoringDetail {
            reason: ScoreReason::SingleFives,
            values: std::iter::repeat(5).take(counts[5] as usize).collect(),
            points,
        });
        counts[5] = 0;
    }

    let mut unscored = Faces::new();
    for face in 1..=DIE_FACES {
        for _ in 0..counts[face as usize] {
            unscored.push(face);
        }
    }

    Ok(DiceScore {
        total,
        unscored,
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        let score = score_dice(&[]).unwrap();
        assert_eq!(score.total, 0);
        assert!(score.unscored.is_empty());
        assert!(score.details.is_empty());
    }

    #[test]
    fn test_too_many_dice_rejected() {
        let err = score_dice(&[1, 2, 3, 4, 5, 6, 1]).unwrap_err();
        assert_eq!(err, EngineError::DiceCount { got: 7, max: 6 });
    }

    #[test]
    fn test_invalid_face_rejected() {
        let err = score_dice(&[1, 7]).unwrap_err();
        assert_eq!(err, EngineError::InvalidFace { face: 7 });

        let err = score_dice(&[0]).unwrap_err();
        assert_eq!(err, EngineError::InvalidFace { face: 0 });
    }

    #[test]
    fn test_straight() {
        let score = score_dice(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(score.total, 1500);
        assert!(score.unscored.is_empty());
        assert_eq!(score.details.len(), 1);
        assert_eq!(score.details[0].reason, ScoreReason::Straight);
        assert_eq!(score.details[0].points, 1500);
    }

    #[test]
    fn test_straight_any_order() {
        let score = score_dice(&[6, 3, 1, 5, 2, 4]).unwrap();
        assert_eq!(score.total, 1500);
        assert_eq!(score.details[0].reason, ScoreReason::Straight);
    }

    #[test]
    fn test_triple_ones() {
        let score = score_dice(&[1, 1, 1]).unwrap();
        assert_eq!(score.total, 1000);
        assert_eq!(score.details.len(), 1);
        assert_eq!(score.details[0].reason, ScoreReason::ThreeOfAKind);
    }

    #[test]
    fn test_triple_twos() {
        assert_eq!(score_dice(&[2, 2, 2]).unwrap().total, 200);
    }

    #[test]
    fn test_triple_fives() {
        assert_eq!(score_dice(&[5, 5, 5]).unwrap().total, 500);
    }

    #[test]
    fn test_four_of_a_kind_leaves_leftover() {
        // Triple fires once; the fourth one scores as a single.
        let score = score_dice(&[1, 1, 1, 1]).unwrap();
        assert_eq!(score.total, 1100);
        assert_eq!(score.details.len(), 2);
        assert_eq!(score.details[0].reason, ScoreReason::ThreeOfAKind);
        assert_eq!(score.details[1].reason, ScoreReason::SingleOnes);
    }

    #[test]
    fn test_five_of_a_kind_leaves_two() {
        let score = score_dice(&[5, 5, 5, 5, 5]).unwrap();
        assert_eq!(score.total, 500 + 100);
        assert_eq!(score.details[1].reason, ScoreReason::SingleFives);
        assert_eq!(score.details[1].values.as_slice(), &[5, 5]);
    }

    #[test]
    fn test_singles() {
        let score = score_dice(&[1, 5]).unwrap();
        assert_eq!(score.total, 150);
        assert_eq!(score.details.len(), 2);
    }

    #[test]
    fn test_nothing_scores() {
        let score = score_dice(&[2, 3, 4, 6]).unwrap();
        assert_eq!(score.total, 0);
        assert_eq!(score.unscored.as_slice(), &[2, 3, 4, 6]);
        assert!(score.details.is_empty());
    }

    #[test]
    fn test_mixed_roll() {
        // Triple twos + single one + single five, one unscored six.
        let score = score_dice(&[2, 2, 2, 1, 5, 6]).unwrap();
        assert_eq!(score.total, 200 + 100 + 50);
        assert_eq!(score.unscored.as_slice(), &[6]);
        assert_eq!(
            score.details.iter().map(|d| d.reason).collect::<Vec<_>>(),
            vec![
                ScoreReason::ThreeOfAKind,
                ScoreReason::SingleOnes,
                ScoreReason::SingleFives
            ]
        );
    }

    #[test]
    fn test_two_triples() {
        let score = score_dice(&[3, 3, 3, 4, 4, 4]).unwrap();
        assert_eq!(score.total, 300 + 400);
        assert_eq!(score.details.len(), 2);
        // Ascending by face.
        assert_eq!(score.details[0].values.as_slice(), &[3, 3, 3]);
        assert_eq!(score.details[1].values.as_slice(), &[4, 4, 4]);
    }

    #[test]
    fn test_six_of_a_kind() {
        // The triple consumes exactly three; the rest fall through to the
        // singles rule (ones) or go unscored (other faces).
        let score = score_dice(&[1, 1, 1, 1, 1, 1]).unwrap();
        assert_eq!(score.total, 1000 + 300);

        let score = score_dice(&[2, 2, 2, 2, 2, 2]).unwrap();
        assert_eq!(score.total, 200);
        assert_eq!(score.unscored.as_slice(), &[2, 2, 2]);
    }

    #[test]
    fn test_order_independent() {
        let a = score_dice(&[1, 5, 2, 2, 2, 6]).unwrap();
        let b = score_dice(&[6, 2, 2, 1, 2, 5]).unwrap();
        assert_eq!(a.total, b.total);
        assert_eq!(a.unscored, b.unscored);
    }
}

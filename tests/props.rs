//! Property tests for the scorer and the deck lifecycle.

use proptest::prelude::*;

use im::Vector;
use farkle_engine::core::{GameRng, MacroState, PlayerUid, TurnState};
use farkle_engine::deck::{build_deck, default_catalog, draw_card};
use farkle_engine::engine::add_player;
use farkle_engine::scoring::score_dice;
use farkle_engine::GameState;

fn dice_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=6, 0..=6)
}

proptest! {
    /// Scoring consults the face multiset only: any permutation of the
    /// input produces the same total and the same unscored remainder.
    #[test]
    fn prop_score_is_order_independent(dice in dice_strategy()) {
        let original = score_dice(&dice).unwrap();

        let mut sorted = dice.clone();
        sorted.sort_unstable();
        let reordered = score_dice(&sorted).unwrap();

        prop_assert_eq!(original.total, reordered.total);
        prop_assert_eq!(original.unscored, reordered.unscored);
    }

    /// Every input die is either consumed by a scoring detail or returned
    /// unscored; none appear out of nowhere.
    #[test]
    fn prop_score_accounts_for_every_die(dice in dice_strategy()) {
        let score = score_dice(&dice).unwrap();

        let consumed: usize = score.details.iter().map(|d| d.values.len()).sum();
        prop_assert_eq!(consumed + score.unscored.len(), dice.len());

        let mut accounted: Vec<u8> = score
            .details
            .iter()
            .flat_map(|d| d.values.iter().copied())
            .chain(score.unscored.iter().copied())
            .collect();
        accounted.sort_unstable();

        let mut input = dice.clone();
        input.sort_unstable();
        prop_assert_eq!(accounted, input);
    }

    /// Detail points always sum to the total.
    #[test]
    fn prop_details_sum_to_total(dice in dice_strategy()) {
        let score = score_dice(&dice).unwrap();
        let sum: u32 = score.details.iter().map(|d| d.points).sum();
        prop_assert_eq!(sum, score.total);
    }

    /// Drawing repeatedly, across arbitrary seeds and draw counts, never
    /// creates or loses a card.
    #[test]
    fn prop_deck_conservation(seed in any::<u64>(), draws in 1usize..120) {
        let mut rng = GameRng::new(seed);
        let deck = build_deck(&default_catalog(), &mut rng);
        let total = deck.len();

        let mut state = GameState::new(4, 10_000, PlayerUid::new("c"), deck);
        state.macro_state = MacroState::InProgress;

        for _ in 0..draws {
            state.turn_state = TurnState::Drawing;
            state = draw_card(&state, &mut rng).unwrap();
            prop_assert_eq!(state.card_count(), total);
        }
    }

    /// The roster never exceeds its seat limit, whatever the limit and
    /// however many joins are attempted.
    #[test]
    fn prop_roster_respects_max_players(max in 1usize..8, attempts in 0usize..16) {
        let mut state = GameState::new(max, 10_000, PlayerUid::new("c"), Vector::new());

        for i in 0..attempts {
            let uid = PlayerUid::new(format!("player-{i}"));
            match add_player(&state, format!("Player {i}"), uid) {
                Ok(next) => state = next,
                Err(_) => prop_assert_eq!(state.players.len(), max),
            }
        }

        prop_assert!(state.players.len() <= max);
    }
}

//! The per-turn state machine.
//!
//! Phase cycle for the active player:
//!
//! ```text
//! Drawing → Rolling → SettingAside → Deciding → Drawing (next player)
//!                         ↘ (roll again with remaining dice) ↗
//! ```
//!
//! [`end_turn`] runs the win check; at `score_goal` or above the game becomes
//! `GameOver` and no further transitions are accepted.
//!
//! Every function is a pure transform: it reads the snapshot, and either
//! returns a fresh successor snapshot or a rejection. The only mutation is
//! of the injected RNG, which advances on rolls.
//!
//! Out-of-phase calls reject with `PhaseMismatch`, with two deliberate
//! exceptions kept as idempotent no-ops: `pre_roll` while the game is over,
//! and `pre_roll` while the dice are already in the air.

use im::Vector;
use tracing::debug;

use crate::core::{
    fresh_dice, EngineError, GameRng, GameState, MacroState, PlayerUid, TurnState, DICE_PER_TURN,
};
use crate::deck::CardKind;
use crate::scoring::score_dice;

/// Announce a roll.
///
/// Only the current player may roll (`WrongPlayer`). Calling while the game
/// is over or while already rolling returns the snapshot unchanged; calling
/// before the game starts rejects.
pub fn pre_roll(state: &GameState, actor: &PlayerUid) -> Result<GameState, EngineError> {
    if state.macro_state == MacroState::Waiting {
        return Err(EngineError::PhaseMismatch { action: "pre_roll" });
    }

    let current = state
        .current_player_ref()
        .ok_or(EngineError::PhaseMismatch { action: "pre_roll" })?;
    if current.uid != *actor {
        return Err(EngineError::WrongPlayer {
            actor: actor.clone(),
        });
    }

    if state.macro_state == MacroState::GameOver || state.rolling {
        return Ok(state.clone());
    }

    Ok(GameState {
        rolling: true,
        ..state.clone()
    })
}

/// Resolve a roll announced by [`pre_roll`].
///
/// Rolls fresh dice for every slot not yet banked this turn, then hands the
/// result to the player for setting aside. Rejects when no roll is in the
/// air; re-rolls from the deciding phase are reached through `pre_roll` the
/// same way the first roll of a turn is.
pub fn post_roll(state: &GameState, rng: &mut GameRng) -> Result<GameState, EngineError> {
    if state.macro_state == MacroState::GameOver {
        return Err(EngineError::GameFinished);
    }
    if state.macro_state != MacroState::InProgress || !state.rolling {
        return Err(EngineError::PhaseMismatch { action: "post_roll" });
    }

    let count = DICE_PER_TURN - state.scoring_dice.len();
    let dice_values: Vector<u8> = Vector::from(rng.roll_dice(count));

    Ok(GameState {
        dice_values,
        rolling: false,
        turn_state: TurnState::SettingAside,
        ..state.clone()
    })
}

/// Bank the dice at `indices` (0-based positions into the dice in play).
///
/// The selected dice are scored and their points added to the turn score;
/// the faces move from play to the banked pile. Out-of-range or repeated
/// indices reject with `InvalidIndex`.
pub fn set_aside_dice(state: &GameState, indices: &[usize]) -> Result<GameState, EngineError> {
    match state.macro_state {
        MacroState::GameOver => return Err(EngineError::GameFinished),
        MacroState::Waiting => {
            return Err(EngineError::PhaseMismatch { action: "set_aside_dice" })
        }
        MacroState::InProgress => {}
    }

    let len = state.dice_values.len();
    let mut seen = vec![false; len];
    for &index in indices {
        if index >= len || seen[index] {
            return Err(EngineError::InvalidIndex { index, len });
        }
        seen[index] = true;
    }

    let selected: Vec<u8> = indices.iter().map(|&i| state.dice_values[i]).collect();
    let remaining: Vector<u8> = state
        .dice_values
        .iter()
        .enumerate()
        .filter(|(i, _)| !indices.contains(i))
        .map(|(_, &face)| face)
        .collect();

    let score = score_dice(&selected)?;

    let mut scoring_dice = state.scoring_dice.clone();
    scoring_dice.extend(selected);

    Ok(GameState {
        dice_values: remaining,
        scoring_dice,
        turn_score: state.turn_score + score.total,
        turn_state: TurnState::Deciding,
        ..state.clone()
    })
}

/// All dice banked this turn.
#[must_use]
pub fn has_passed_the_cheese(state: &GameState) -> bool {
    state.dice_values.is_empty()
}

/// Bust: the dice on the table score nothing, or everything is banked.
#[must_use]
pub fn has_cut_the_cheese(state: &GameState) -> bool {
    if has_passed_the_cheese(state) {
        return true;
    }
    let faces: Vec<u8> = state.dice_values.iter().copied().collect();
    let table_is_dead = score_dice(&faces).map_or(false, |s| s.total == 0);
    state.turn_state == TurnState::SettingAside && table_is_dead
}

/// Whether the active turn may end right now.
///
/// An active must-pass card vetoes ending while any dice remain unbanked,
/// even on a bust. Otherwise the turn may end after banking everything,
/// after a bust, or whenever the player is in the deciding phase.
#[must_use]
pub fn can_end_turn(state: &GameState) -> bool {
    let must_pass_unmet = matches!(
        state.current_card,
        Some(card) if card.kind == CardKind::MustPass
    ) && !state.dice_values.is_empty();
    if must_pass_unmet {
        return false;
    }

    if has_passed_the_cheese(state) || has_cut_the_cheese(state) {
        return true;
    }

    state.turn_state == TurnState::Deciding
}

/// End the active turn.
///
/// With `cut_the_cheese` the accumulated turn score is forfeited; otherwise
/// it is committed to the current player, plus the active card's bonus when
/// every die was banked. A committed score at or above the goal ends the
/// game with the current player still selected; otherwise play rotates to
/// the next seat. Turn-local fields reset either way.
pub fn end_turn(state: &GameState, cut_the_cheese: bool) -> Result<GameState, EngineError> {
    if state.macro_state == MacroState::GameOver {
        return Err(EngineError::GameFinished);
    }
    if !can_end_turn(state) {
        return Err(EngineError::TurnNotComplete);
    }

    let index = state
        .current_player
        .checked_sub(1)
        .filter(|i| *i < state.players.len())
        .ok_or(EngineError::PhaseMismatch { action: "end_turn" })?;

    let mut players = state.players.clone();
    if !cut_the_cheese {
        let mut gained = state.turn_score;
        if has_passed_the_cheese(state) {
            if let Some(card) = state.current_card {
                gained += card.bonus;
            }
        }
        let player = &mut players[index];
        player.score += gained;
        debug!(uid = %player.uid, gained, total = player.score, "turn score committed");
    } else {
        debug!(turn_score = state.turn_score, "turn busted, score forfeited");
    }

    let game_over = players[index].score >= state.score_goal;
    let current_player = if game_over {
        state.current_player
    } else {
        (state.current_player % players.len()) + 1
    };
    if game_over {
        debug!(winner = %players[index].uid, score = players[index].score, "game over");
    }

    Ok(GameState {
        players,
        current_player,
        macro_state: if game_over {
            MacroState::GameOver
        } else {
            MacroState::InProgress
        },
        turn_score: 0,
        scoring_dice: Vector::new(),
        dice_values: fresh_dice(),
        turn_state: TurnState::Drawing,
        ..state.clone()
    })
}

//! Session setup and admission rules.
//!
//! Governs the `Waiting → InProgress` edge of the game lifecycle: who may
//! join, and who may start the game. Everything here is a pure transform
//! over a [`GameState`] snapshot.

use tracing::debug;

use crate::core::{EngineError, GameRng, GameState, MacroState, Player, PlayerUid, TurnState};
use crate::deck::{build_deck, CardSpec};
use crate::store::GameId;

/// Create a new game session.
///
/// Builds and shuffles the deck from `catalog`, seats nobody, and derives a
/// short opaque [`GameId`] from the entropy source.
#[must_use]
pub fn create_game(
    max_players: usize,
    score_goal: u32,
    created_by: PlayerUid,
    catalog: &[CardSpec],
    rng: &mut GameRng,
) -> (GameId, GameState) {
    let deck = build_deck(catalog, rng);
    let game_id = GameId::new(format!("{:08x}", rng.gen_u32()));
    let state = GameState::new(max_players, score_goal, created_by, deck);
    debug!(game_id = %game_id, max_players, score_goal, "game created");
    (game_id, state)
}

/// Whether `uid` already holds a seat.
#[must_use]
pub fn is_in_game(state: &GameState, uid: &PlayerUid) -> bool {
    state.players.iter().any(|p| p.uid == *uid)
}

/// Seat a new player.
///
/// Rejects when the room is full (`MaxPlayers`), the uid already holds a
/// seat (`DuplicateUser`), or the game has left the `Waiting` state
/// (`PhaseMismatch`). Join order is turn order.
pub fn add_player(
    state: &GameState,
    name: impl Into<String>,
    uid: PlayerUid,
) -> Result<GameState, EngineError> {
    if state.macro_state != MacroState::Waiting {
        return Err(EngineError::PhaseMismatch { action: "add_player" });
    }
    if state.players.len() >= state.max_players {
        return Err(EngineError::MaxPlayers {
            max: state.max_players,
        });
    }
    if is_in_game(state, &uid) {
        return Err(EngineError::DuplicateUser { uid });
    }

    let mut players = state.players.clone();
    let player = Player::new(uid, name);
    debug!(uid = %player.uid, seats = players.len() + 1, "player joined");
    players.push_back(player);

    Ok(GameState {
        players,
        ..state.clone()
    })
}

/// Start the game.
///
/// Only the session creator may start (`NotCreator`), only from `Waiting`
/// (`PhaseMismatch`), and only with at least one seated player (`NoPlayers`).
/// Moves the game to `InProgress` with the first turn in `Drawing`.
pub fn start_game(state: &GameState, actor: &PlayerUid) -> Result<GameState, EngineError> {
    if *actor != state.created_by {
        return Err(EngineError::NotCreator);
    }
    if state.macro_state != MacroState::Waiting {
        return Err(EngineError::PhaseMismatch { action: "start_game" });
    }
    if state.players.is_empty() {
        return Err(EngineError::NoPlayers);
    }

    debug!(players = state.players.len(), "game started");
    Ok(GameState {
        macro_state: MacroState::InProgress,
        turn_state: TurnState::Drawing,
        ..state.clone()
    })
}

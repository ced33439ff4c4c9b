//! # farkle-engine
//!
//! Deterministic rule engine for a turn-based, multiplayer push-your-luck
//! dice game with a card-modifier deck.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation is `(snapshot, inputs) ->
//!    Result<snapshot>`. A rejected call produces no new state; callers may
//!    keep prior snapshots for comparison or logging.
//!
//! 2. **Injected entropy**: dice rolls and deck shuffles draw from a
//!    seedable [`GameRng`](core::GameRng) passed by the caller, so behavior
//!    is reproducible under test and concurrent games share no hidden state.
//!
//! 3. **External I/O**: persistence sits behind the
//!    [`GameStore`](store::GameStore) trait; the engine itself never blocks,
//!    retries, or touches a backend. Serializing concurrent actions against
//!    the same game is the session layer's job.
//!
//! ## Modules
//!
//! - `core`: game state, players, lifecycle enums, RNG, errors
//! - `scoring`: dice-scoring combinatorics with a per-rule breakdown
//! - `deck`: card catalog, deck build/shuffle/draw, reshuffle-on-exhaustion
//! - `engine`: roster admission rules and the per-turn state machine
//! - `store`: the persistence seam plus an in-memory implementation
//!
//! ## Example
//!
//! ```
//! use farkle_engine::core::{GameRng, PlayerUid};
//! use farkle_engine::deck::default_catalog;
//! use farkle_engine::engine::{add_player, create_game, start_game};
//!
//! let mut rng = GameRng::new(42);
//! let creator = PlayerUid::new("alice");
//!
//! let (_id, state) = create_game(4, 10_000, creator.clone(), &default_catalog(), &mut rng);
//! let state = add_player(&state, "Alice", creator.clone()).unwrap();
//! let state = add_player(&state, "Bob", PlayerUid::new("bob")).unwrap();
//! let state = start_game(&state, &creator).unwrap();
//!
//! assert_eq!(state.players.len(), 2);
//! ```

pub mod core;
pub mod deck;
pub mod engine;
pub mod scoring;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    EngineError, ErrorKind, GameRng, GameRngState, GameState, MacroState, Player, PlayerUid,
    StoreError, TurnState,
};

pub use crate::scoring::{score_dice, DiceScore, ScoreReason, ScoringDetail};

pub use crate::deck::{build_deck, default_catalog, draw_card, Card, CardKind, CardSpec};

pub use crate::engine::{
    add_player, can_end_turn, create_game, end_turn, post_roll, pre_roll, set_aside_dice,
    start_game,
};

pub use crate::store::{GameId, GameStore, MemoryStore};

//! Core engine types: players, game state, lifecycle enums, RNG, errors.
//!
//! Everything here is shared by the scoring, deck, and turn modules. The
//! types are plain data; all rule logic lives in the transition functions.

pub mod error;
pub mod rng;
pub mod state;

pub use error::{EngineError, ErrorKind, StoreError};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use state::{
    fresh_dice, GameState, MacroState, Player, PlayerUid, TurnState, DICE_PER_TURN,
    FRESH_TURN_FACE,
};

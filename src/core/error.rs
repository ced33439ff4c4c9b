//! Engine rejection types.
//!
//! Every transition returns `Result<GameState, EngineError>`. A rejected call
//! produces no new state: the caller keeps its snapshot and the error says why
//! the action was refused.
//!
//! Variants group into three kinds via [`EngineError::kind`]:
//!
//! - **Validation**: malformed input (dice count, set-aside index, exhausted deck)
//! - **Authorization**: actor not entitled (wrong player, non-creator, full room)
//! - **IllegalTransition**: action attempted outside its allowed phase

use thiserror::Error;

use super::state::PlayerUid;

/// Broad classification of a rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input.
    Validation,
    /// Actor not entitled to perform the action.
    Authorization,
    /// Action attempted outside its allowed phase.
    IllegalTransition,
}

/// A rejected transition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("at most {max} dice can be scored, got {got}")]
    DiceCount { got: usize, max: usize },

    #[error("die face {face} is outside 1..=6")]
    InvalidFace { face: u8 },

    #[error("die index {index} is out of range for {len} dice in play")]
    InvalidIndex { index: usize, len: usize },

    #[error("deck and discard pile are both empty")]
    DeckExhausted,

    #[error("cannot start a game with no players")]
    NoPlayers,

    #[error("it is not {actor}'s turn")]
    WrongPlayer { actor: PlayerUid },

    #[error("only the game creator may start the game")]
    NotCreator,

    #[error("the game is full ({max} players)")]
    MaxPlayers { max: usize },

    #[error("player {uid} has already joined")]
    DuplicateUser { uid: PlayerUid },

    #[error("turn requirements are not met")]
    TurnNotComplete,

    #[error("{action} is not allowed in the current phase")]
    PhaseMismatch { action: &'static str },

    #[error("the game is over")]
    GameFinished,
}

impl EngineError {
    /// Classify this rejection.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::DiceCount { .. }
            | EngineError::InvalidFace { .. }
            | EngineError::InvalidIndex { .. }
            | EngineError::DeckExhausted
            | EngineError::NoPlayers => ErrorKind::Validation,

            EngineError::WrongPlayer { .. }
            | EngineError::NotCreator
            | EngineError::MaxPlayers { .. }
            | EngineError::DuplicateUser { .. } => ErrorKind::Authorization,

            EngineError::TurnNotComplete
            | EngineError::PhaseMismatch { .. }
            | EngineError::GameFinished => ErrorKind::IllegalTransition,
        }
    }
}

/// Failures from the persistence collaborator.
///
/// Store failures are never swallowed; they surface to the caller alongside
/// engine rejections.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("snapshot codec failure: {0}")]
    Codec(String),

    #[error("store backend failure: {0}")]
    Backend(String),
}

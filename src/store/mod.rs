//! Persistence boundary.
//!
//! The engine never performs I/O; a surrounding session layer loads a
//! snapshot, applies pure transitions, and saves the successor. [`GameStore`]
//! is that seam, keyed by an opaque [`GameId`]. Failures surface to the
//! caller as [`StoreError`], never swallowed.
//!
//! [`MemoryStore`] is the in-process implementation used by tests and
//! embedding callers; it keeps bincode-encoded snapshots so that storage
//! round-trips exercise the same codec path a real backend would.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameState, StoreError};

/// Opaque game identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(String);

impl GameId {
    /// Create a game id from a raw string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Load/save collaborator for game snapshots.
pub trait GameStore {
    /// Fetch the snapshot for `id`, or `None` if the game is unknown.
    fn load(&self, id: &GameId) -> Result<Option<GameState>, StoreError>;

    /// Persist the snapshot for `id`, replacing any previous one.
    fn save(&mut self, id: &GameId, state: &GameState) -> Result<(), StoreError>;
}

/// In-memory store holding bincode-encoded snapshots.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: FxHashMap<GameId, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the store holds no games.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for MemoryStore {
    fn load(&self, id: &GameId) -> Result<Option<GameState>, StoreError> {
        match self.games.get(id) {
            None => Ok(None),
            Some(bytes) => {
                let state = bincode::deserialize(bytes)
                    .map_err(|e| StoreError::Codec(e.to_string()))?;
                Ok(Some(state))
            }
        }
    }

    fn save(&mut self, id: &GameId, state: &GameState) -> Result<(), StoreError> {
        let bytes =
            bincode::serialize(state).map_err(|e| StoreError::Codec(e.to_string()))?;
        self.games.insert(id.clone(), bytes);
        Ok(())
    }
}

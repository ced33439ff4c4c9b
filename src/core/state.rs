//! Game state: the root aggregate every transition operates on.
//!
//! ## Snapshot semantics
//!
//! `GameState` uses `im` persistent vectors for all sequence fields, so a
//! snapshot clones in O(1). Transitions take the current snapshot by
//! reference and return a fresh one; callers may keep the previous snapshot
//! for comparison or logging, and a rejected call produces no new state at
//! all.
//!
//! ## Lifecycle
//!
//! Created in `Waiting` with an empty roster and a shuffled deck, moved to
//! `InProgress` by the roster guard, and terminal once `GameOver` is reached.
//! Archival and deletion belong to the external store, not the engine.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::deck::Card;

/// Dice available to a player at the start of a turn.
pub const DICE_PER_TURN: usize = 6;

/// Sentinel face shown on all dice between turns.
pub const FRESH_TURN_FACE: u8 = 1;

/// Overall game lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacroState {
    /// Players may still join; the game has not started.
    Waiting,
    /// Turns are being played.
    InProgress,
    /// Terminal. No further transitions are accepted.
    GameOver,
}

/// Phase within the active player's turn.
///
/// The cycle is `Drawing → Rolling → SettingAside → Deciding → Drawing`
/// (next player), unless the win check ends the game first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the active player to draw the turn's modifier card.
    Drawing,
    /// Card drawn; waiting for the dice roll.
    Rolling,
    /// Dice rolled; the player picks which dice to bank.
    SettingAside,
    /// Dice banked; the player decides to roll again or end the turn.
    Deciding,
}

/// Opaque player identifier, unique within a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerUid(String);

impl PlayerUid {
    /// Create a new player uid.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// Get the raw uid string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A seated player. Join order is turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique within the game.
    pub uid: PlayerUid,
    /// Display name.
    pub name: String,
    /// Committed score. Non-negative and never decreases.
    pub score: u32,
}

impl Player {
    /// Create a player with a zero score.
    #[must_use]
    pub fn new(uid: PlayerUid, name: impl Into<String>) -> Self {
        Self {
            uid,
            name: name.into(),
            score: 0,
        }
    }
}

/// The root game aggregate.
///
/// One snapshot per game; the session holding the current snapshot is the
/// single owner. All fields are cheap to clone via `im` structural sharing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Overall lifecycle.
    pub macro_state: MacroState,
    /// Phase within the active turn.
    pub turn_state: TurnState,
    /// Seated players, in join order.
    pub players: Vector<Player>,
    /// 1-based index into `players`.
    pub current_player: usize,
    /// Set between `pre_roll` and `post_roll` while dice are in the air.
    pub rolling: bool,
    /// Dice currently in play this turn, not yet banked.
    pub dice_values: Vector<u8>,
    /// Dice banked this turn, excluded from further rolls.
    pub scoring_dice: Vector<u8>,
    /// Accumulated score for the active turn; reset at turn end.
    pub turn_score: u32,
    /// First committed score at or above this ends the game.
    pub score_goal: u32,
    /// Seat limit.
    pub max_players: usize,
    /// Uid of the session creator; only they may start the game.
    pub created_by: PlayerUid,
    /// Remaining draw pile, top at the back.
    pub deck: Vector<Card>,
    /// The modifier card active for the current turn.
    pub current_card: Option<Card>,
    /// Cards cycled out of play, reshuffled into the deck on exhaustion.
    pub discarded_cards: Vector<Card>,
}

impl GameState {
    /// Create a fresh game in `Waiting` with an empty roster.
    #[must_use]
    pub fn new(max_players: usize, score_goal: u32, created_by: PlayerUid, deck: Vector<Card>) -> Self {
        Self {
            macro_state: MacroState::Waiting,
            turn_state: TurnState::Drawing,
            players: Vector::new(),
            current_player: 1,
            rolling: false,
            dice_values: fresh_dice(),
            scoring_dice: Vector::new(),
            turn_score: 0,
            score_goal,
            max_players,
            created_by,
            deck,
            current_card: None,
            discarded_cards: Vector::new(),
        }
    }

    /// The player whose turn it is, if any are seated.
    #[must_use]
    pub fn current_player_ref(&self) -> Option<&Player> {
        self.players.get(self.current_player.checked_sub(1)?)
    }

    /// Dice accounted for this turn: in play plus banked. Never exceeds
    /// [`DICE_PER_TURN`].
    #[must_use]
    pub fn dice_in_turn(&self) -> usize {
        self.dice_values.len() + self.scoring_dice.len()
    }

    /// Total cards across deck, discard pile, and the active card.
    ///
    /// Conserved by every draw and reshuffle.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.discarded_cards.len() + usize::from(self.current_card.is_some())
    }
}

/// Six sentinel dice shown between turns.
#[must_use]
pub fn fresh_dice() -> Vector<u8> {
    std::iter::repeat(FRESH_TURN_FACE).take(DICE_PER_TURN).collect()
}

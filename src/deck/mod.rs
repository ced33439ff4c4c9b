//! Card deck lifecycle: catalog expansion, shuffling, drawing, reshuffle.
//!
//! A deck is built once at game creation by replicating each catalog entry
//! `quantity` times and shuffling with the injected RNG. From then on cards
//! only move between the deck, the active card slot, and the discard pile;
//! [`draw_card`] reshuffles the discard pile back into the deck when the deck
//! runs dry. `GameState::card_count` is conserved by every draw.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EngineError, GameRng, GameState, MacroState, TurnState};

/// What a card does when it is the active modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    /// Plain bonus card: pays `bonus` when the player banks all six dice.
    Bonus,
    /// Forbids ending the turn while any dice remain unbanked.
    MustPass,
}

/// A card in play. The `bonus` pays out only when the turn banks all dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub bonus: u32,
}

impl Card {
    /// A plain bonus card.
    #[must_use]
    pub const fn bonus(points: u32) -> Self {
        Self {
            kind: CardKind::Bonus,
            bonus: points,
        }
    }

    /// A must-pass card with the given payout.
    #[must_use]
    pub const fn must_pass(points: u32) -> Self {
        Self {
            kind: CardKind::MustPass,
            bonus: points,
        }
    }
}

/// Catalog entry: one card type and how many copies go in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    pub kind: CardKind,
    pub bonus: u32,
    pub quantity: usize,
}

impl CardSpec {
    /// The card this entry stamps out.
    #[must_use]
    pub const fn card(&self) -> Card {
        Card {
            kind: self.kind,
            bonus: self.bonus,
        }
    }
}

/// The standard card mix: graded bonus cards plus a few must-pass cards.
#[must_use]
pub fn default_catalog() -> Vec<CardSpec> {
    vec![
        CardSpec { kind: CardKind::Bonus, bonus: 100, quantity: 8 },
        CardSpec { kind: CardKind::Bonus, bonus: 200, quantity: 6 },
        CardSpec { kind: CardKind::Bonus, bonus: 300, quantity: 4 },
        CardSpec { kind: CardKind::Bonus, bonus: 500, quantity: 2 },
        CardSpec { kind: CardKind::MustPass, bonus: 1000, quantity: 4 },
    ]
}

/// Expand a catalog into a shuffled deck.
///
/// The result holds exactly `sum(quantity)` cards in uniform random order.
/// Top of the deck is the back of the vector.
#[must_use]
pub fn build_deck(catalog: &[CardSpec], rng: &mut GameRng) -> Vector<Card> {
    let mut cards: Vec<Card> = Vec::with_capacity(catalog.iter().map(|s| s.quantity).sum());
    for spec in catalog {
        for _ in 0..spec.quantity {
            cards.push(spec.card());
        }
    }
    rng.shuffle(&mut cards);
    Vector::from(cards)
}

/// Draw the turn's modifier card.
///
/// Valid only in the `Drawing` phase of a game in progress; out-of-phase
/// calls reject with `PhaseMismatch`. If the deck is empty the discard pile
/// is reshuffled into a fresh deck first; if that too is empty the draw
/// rejects with `DeckExhausted`. The previous active card, if any, moves to
/// the discard pile, and the turn advances to `Rolling`.
pub fn draw_card(state: &GameState, rng: &mut GameRng) -> Result<GameState, EngineError> {
    match state.macro_state {
        MacroState::GameOver => return Err(EngineError::GameFinished),
        MacroState::Waiting => {
            return Err(EngineError::PhaseMismatch { action: "draw_card" })
        }
        MacroState::InProgress => {}
    }
    if state.turn_state != TurnState::Drawing {
        return Err(EngineError::PhaseMismatch { action: "draw_card" });
    }

    let (mut deck, mut discarded) = if state.deck.is_empty() {
        if state.discarded_cards.is_empty() {
            return Err(EngineError::DeckExhausted);
        }
        let mut cards: Vec<Card> = state.discarded_cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        debug!(cards = cards.len(), "reshuffled discard pile into deck");
        (Vector::from(cards), Vector::new())
    } else {
        (state.deck.clone(), state.discarded_cards.clone())
    };

    let drawn = deck.pop_back().ok_or(EngineError::DeckExhausted)?;
    if let Some(previous) = state.current_card {
        discarded.push_back(previous);
    }

    Ok(GameState {
        deck,
        discarded_cards: discarded,
        current_card: Some(drawn),
        turn_state: TurnState::Rolling,
        ..state.clone()
    })
}

//! Game rules: the roster guard and the turn state machine.
//!
//! All operations are pure transforms `(snapshot, inputs) -> Result<snapshot>`.
//! The roster guard governs the `Waiting → InProgress` edge; the turn module
//! governs everything from the first draw to game over.

pub mod roster;
pub mod turn;

pub use roster::{add_player, create_game, is_in_game, start_game};
pub use turn::{
    can_end_turn, end_turn, has_cut_the_cheese, has_passed_the_cheese, post_roll, pre_roll,
    set_aside_dice,
};

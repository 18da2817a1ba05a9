//! Cards and boards.
//!
//! - `Card`: a symbol plus face-up / matched flags
//! - `Board`: every card of one round, shuffled
//! - `BoardView`: the board as a player sees it

mod board;
mod card;
mod view;

pub use board::{build_board, Board};
pub use card::{Card, CardId};
pub use view::{BoardView, CardView};

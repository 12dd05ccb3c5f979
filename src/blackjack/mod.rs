pub mod action;
pub use action::*;

pub mod game;
pub use game::*;

pub mod hand;
pub use hand::*;

pub mod state;
pub use state::*;

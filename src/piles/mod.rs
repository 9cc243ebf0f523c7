//! Battle-scoped card piles.
//!
//! - `deck`: the face-down draw pile, shuffled at battle start
//! - `hand`: drawn cards plus the reservation layer for two-phase play
//! - `shuffle`: the anti-repeat pass applied after a reshuffle

pub mod deck;
pub mod hand;
pub mod shuffle;

pub use deck::Deck;
pub use hand::Hand;
pub use shuffle::anti_repeat_pass;

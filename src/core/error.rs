//! Errors surfaced at the battle-system boundary.
//!
//! The pile types themselves never fail - out-of-range and empty-pile
//! conditions come back as `Option`/`bool` sentinels. `DeckError` covers
//! the only user-visible refusals: deck editor size policy and the
//! resource cost gate for on-demand draws.

use super::ActorId;

/// A rejected operation at the battle-system boundary.
///
/// Every variant is a policy refusal, not a crash: the caller presents
/// it to the player (a buzzer, a greyed-out command) and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// The actor was never registered with the battle system.
    #[error("{0} is not registered")]
    UnknownActor(ActorId),

    /// Removing a card would shrink the saved deck below the minimum.
    #[error("deck is at the minimum size ({min})")]
    DeckAtMinSize {
        /// Configured minimum deck size.
        min: usize,
    },

    /// Adding a card would grow the saved deck beyond the maximum.
    #[error("deck is at the maximum size ({max})")]
    DeckAtMaxSize {
        /// Configured maximum deck size.
        max: usize,
    },

    /// The actor cannot pay the draw-command cost.
    #[error("not enough resources to draw ({mp} MP, {tp} TP required)")]
    InsufficientResources {
        /// Configured MP cost of the draw command.
        mp: i32,
        /// Configured TP cost of the draw command.
        tp: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeckError::UnknownActor(ActorId::new(3));
        assert_eq!(format!("{}", err), "Actor(3) is not registered");

        let err = DeckError::DeckAtMinSize { min: 5 };
        assert_eq!(format!("{}", err), "deck is at the minimum size (5)");

        let err = DeckError::InsufficientResources { mp: 10, tp: 0 };
        assert_eq!(
            format!("{}", err),
            "not enough resources to draw (10 MP, 0 TP required)"
        );
    }
}

//! Core types: actor identity, battle configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod rng;

pub use config::BattleConfig;
pub use error::DeckError;
pub use rng::{CardRng, CardRngState};

use serde::{Deserialize, Serialize};

/// Identifier of a combatant registered with the battle system.
///
/// The core doesn't own combatants - the host game does. Actors are
/// referenced by this opaque key, assigned by the host at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    /// Create a new actor ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}

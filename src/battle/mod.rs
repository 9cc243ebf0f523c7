//! Per-actor card state and the battle-system facade.
//!
//! - `actor_state`: the aggregate owning deck, hand, piles, and the
//!   persistent saved deck for one combatant
//! - `system`: the registry/facade the battle manager and deck editor
//!   drive through named lifecycle hooks
//! - `snapshot`: plain-data capture of the whole system for mid-battle
//!   saves

pub mod actor_state;
pub mod snapshot;
pub mod system;

pub use actor_state::{ActorCardState, ResourcePool};
pub use snapshot::BattleSnapshot;
pub use system::DeckBattleSystem;

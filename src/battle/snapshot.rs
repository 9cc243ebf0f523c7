//! Mid-battle save data.
//!
//! Everything the card system needs to resume a battle: every actor's
//! aggregate (five collections, saved deck, learned pool, resources,
//! turn-draw flag) plus the RNG state so the shuffle stream continues
//! where it left off. Plain serde data; the host picks the format.

use serde::{Deserialize, Serialize};

use crate::core::{ActorId, CardRngState};

use super::actor_state::ActorCardState;

/// Serializable capture of the whole battle system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    /// Actor entries, sorted by id for stable output.
    pub actors: Vec<(ActorId, ActorCardState)>,

    /// RNG state at capture time.
    pub rng: CardRngState,
}

//! # deck-battle
//!
//! The deck-building card-battle core: rules for how a pool of cards
//! (skills) moves between a draw pile, a hand, a discard pile, and an
//! exhaust pile, across turns and across save/load cycles.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No rendering, input, or sound. The host's
//!    battle manager and menu UI drive the core through the
//!    `DeckBattleSystem` facade and its lifecycle hooks.
//!
//! 2. **Total Operations**: Pile operations never panic. Empty piles and
//!    out-of-range slots come back as `Option`/`bool` sentinels; the
//!    only failure-typed surface is the facade's policy refusals
//!    (`DeckError`).
//!
//! 3. **Injected Capabilities**: The skill catalog and the RNG are
//!    handed in at construction. Deterministic tests supply seeds;
//!    missing catalog entries are skipped, never fatal.
//!
//! ## Card Flow
//!
//! Saved deck (persistent) -> Deck (battle-scoped, shuffled) -> Hand
//! (drawn) -> reserved -> committed -> Discard or Exhaust ->
//! (reshuffle) -> Deck.
//!
//! Reshuffles run a "smart shuffle": after the uniform pass, cards
//! discarded since the last shuffle are swapped out of the next
//! hand-size draw positions to soften immediate redraws.
//!
//! ## Modules
//!
//! - `core`: Actor IDs, configuration, errors, RNG
//! - `cards`: Skill definitions, catalog lookup, exclusion policy
//! - `piles`: Deck, hand with reservations, smart shuffle
//! - `battle`: Per-actor card state and the system facade

pub mod battle;
pub mod cards;
pub mod core;
pub mod piles;

// Re-export commonly used types
pub use crate::core::{ActorId, BattleConfig, CardRng, CardRngState, DeckError};

pub use crate::cards::{CardPool, SkillCatalog, SkillDefinition, SkillId};

pub use crate::piles::{Deck, Hand};

pub use crate::battle::{ActorCardState, BattleSnapshot, DeckBattleSystem, ResourcePool};

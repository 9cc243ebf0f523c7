//! Skill definitions - static card data.
//!
//! `SkillDefinition` holds the immutable properties of a card: costs and
//! the exhaust tag. Piles never store definitions, only `SkillId` keys
//! into the catalog, so the same skill can sit in several piles at once
//! without duplication.

use serde::{Deserialize, Serialize};

/// Unique identifier for a skill in the catalog.
///
/// This identifies the card "type" (e.g., "Fireball"), not a physical
/// copy in a pile. Piles hold copies of the id only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkillId(pub u32);

impl SkillId {
    /// Create a new skill ID.
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

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Skill({})", self.0)
    }
}

/// Static skill definition.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{SkillDefinition, SkillId};
///
/// let fireball = SkillDefinition::new(SkillId::new(10), "Fireball")
///     .with_mp_cost(12)
///     .exhausting();
///
/// assert!(fireball.exhaust);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    /// Unique identifier for this skill.
    pub id: SkillId,

    /// Skill name (for display/debugging).
    pub name: String,

    /// MP cost to play the skill.
    pub mp_cost: i32,

    /// TP cost to play the skill.
    pub tp_cost: i32,

    /// Exhaustible: once played, the card leaves play for the rest of
    /// the battle instead of going to the discard pile.
    pub exhaust: bool,
}

impl SkillDefinition {
    /// Create a new skill definition with zero costs.
    #[must_use]
    pub fn new(id: SkillId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mp_cost: 0,
            tp_cost: 0,
            exhaust: false,
        }
    }

    /// Set the MP cost (builder pattern).
    #[must_use]
    pub fn with_mp_cost(mut self, cost: i32) -> Self {
        self.mp_cost = cost;
        self
    }

    /// Set the TP cost (builder pattern).
    #[must_use]
    pub fn with_tp_cost(mut self, cost: i32) -> Self {
        self.tp_cost = cost;
        self
    }

    /// Tag the skill as exhaustible (builder pattern).
    #[must_use]
    pub fn exhausting(mut self) -> Self {
        self.exhaust = true;
        self
    }
}

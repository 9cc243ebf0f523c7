//! Card pool policy - the global exclusion list.
//!
//! Some catalog entries must never become cards (basic Attack/Guard
//! commands, event-only skills). `CardPool` answers the single question
//! "may this id enter a deck?" and filters sequences accordingly. Pure
//! membership checks, no mutable state after construction.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::definition::SkillId;

/// Global eligibility policy for card identifiers.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{CardPool, SkillId};
///
/// let pool = CardPool::with_excluded([SkillId::new(1), SkillId::new(2)]);
///
/// assert!(!pool.allows(SkillId::new(1)));
/// assert!(pool.allows(SkillId::new(7)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPool {
    excluded: FxHashSet<SkillId>,
}

impl CardPool {
    /// Create a pool that allows every id.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool excluding the given ids.
    #[must_use]
    pub fn with_excluded(ids: impl IntoIterator<Item = SkillId>) -> Self {
        Self {
            excluded: ids.into_iter().collect(),
        }
    }

    /// Check whether an id may enter a deck.
    #[must_use]
    pub fn allows(&self, id: SkillId) -> bool {
        !self.excluded.contains(&id)
    }

    /// Filter a sequence down to the allowed ids, preserving order.
    #[must_use]
    pub fn filter(&self, ids: impl IntoIterator<Item = SkillId>) -> Vec<SkillId> {
        ids.into_iter().filter(|&id| self.allows(id)).collect()
    }

    /// Number of excluded ids.
    #[must_use]
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_allows_everything() {
        let pool = CardPool::new();
        assert!(pool.allows(SkillId::new(0)));
        assert!(pool.allows(SkillId::new(12345)));
        assert_eq!(pool.excluded_count(), 0);
    }

    #[test]
    fn test_exclusion() {
        let pool = CardPool::with_excluded([SkillId::new(1), SkillId::new(2)]);

        assert!(!pool.allows(SkillId::new(1)));
        assert!(!pool.allows(SkillId::new(2)));
        assert!(pool.allows(SkillId::new(3)));
        assert_eq!(pool.excluded_count(), 2);
    }

    #[test]
    fn test_filter_preserves_order() {
        let pool = CardPool::with_excluded([SkillId::new(2)]);

        let input = vec![
            SkillId::new(3),
            SkillId::new(2),
            SkillId::new(1),
            SkillId::new(2),
            SkillId::new(5),
        ];
        let filtered = pool.filter(input);

        assert_eq!(
            filtered,
            vec![SkillId::new(3), SkillId::new(1), SkillId::new(5)]
        );
    }

    #[test]
    fn test_pool_serde() {
        let pool = CardPool::with_excluded([SkillId::new(1), SkillId::new(9)]);

        let json = serde_json::to_string(&pool).unwrap();
        let back: CardPool = serde_json::from_str(&json).unwrap();

        assert_eq!(pool, back);
    }
}

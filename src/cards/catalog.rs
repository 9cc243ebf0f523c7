//! Skill catalog for definition lookup.
//!
//! The `SkillCatalog` stores all skill definitions for a game. The core
//! is handed the catalog at construction and tolerates ids with no
//! entry: unresolvable ids are silently skipped wherever definitions
//! are needed (a pile may reference a skill the host has since removed).

use rustc_hash::FxHashMap;

use super::definition::{SkillDefinition, SkillId};

/// Registry of skill definitions.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{SkillCatalog, SkillDefinition, SkillId};
///
/// let mut catalog = SkillCatalog::new();
/// catalog.register(SkillDefinition::new(SkillId::new(1), "Slash"));
///
/// let found = catalog.get(SkillId::new(1)).unwrap();
/// assert_eq!(found.name, "Slash");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    skills: FxHashMap<SkillId, SkillDefinition>,
    next_id: u32,
}

impl SkillCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a skill definition.
    ///
    /// Panics if a skill with the same ID already exists.
    pub fn register(&mut self, skill: SkillDefinition) {
        if self.skills.contains_key(&skill.id) {
            panic!("Skill with ID {:?} already registered", skill.id);
        }
        self.skills.insert(skill.id, skill);
    }

    /// Register a skill with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, name: impl Into<String>) -> SkillId {
        let id = SkillId::new(self.next_id);
        self.next_id += 1;

        self.register(SkillDefinition::new(id, name));
        id
    }

    /// Get a skill definition by ID.
    #[must_use]
    pub fn get(&self, id: SkillId) -> Option<&SkillDefinition> {
        self.skills.get(&id)
    }

    /// Check if a skill ID is registered.
    #[must_use]
    pub fn contains(&self, id: SkillId) -> bool {
        self.skills.contains_key(&id)
    }

    /// Get the number of registered skills.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Iterate over all skill definitions.
    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.values()
    }

    /// Resolve a sequence of ids to definitions, skipping missing entries.
    pub fn resolve<'a>(
        &'a self,
        ids: impl IntoIterator<Item = SkillId> + 'a,
    ) -> impl Iterator<Item = &'a SkillDefinition> {
        ids.into_iter().filter_map(|id| self.skills.get(&id))
    }

    /// Check whether a skill is tagged exhaustible.
    ///
    /// Unknown ids are not exhaustible.
    #[must_use]
    pub fn is_exhaust(&self, id: SkillId) -> bool {
        self.skills.get(&id).is_some_and(|s| s.exhaust)
    }
}

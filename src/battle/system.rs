//! The battle-system facade.
//!
//! `DeckBattleSystem` owns every registered actor's card state in a
//! registry keyed by `ActorId` and exposes the full operation set the
//! host drives: named lifecycle hooks for the battle manager, draw and
//! discard commands for the action UI, and the saved-deck editing
//! surface for the menu (outside battle only).
//!
//! The facade is where policy lives. Piles never refuse anything; the
//! deck-size limits and the draw-cost gate are enforced here and
//! surfaced as `DeckError`. Unknown actor ids yield sentinel results
//! (`None`, `false`, no-op), never panics.

use log::debug;
use rustc_hash::FxHashMap;

use crate::cards::{SkillCatalog, SkillDefinition, SkillId};
use crate::core::{ActorId, BattleConfig, CardRng, DeckError};

use super::actor_state::{ActorCardState, ResourcePool};
use super::snapshot::BattleSnapshot;

/// Registry and operation surface for the card battle system.
///
/// ## Example
///
/// ```
/// use deck_battle::battle::DeckBattleSystem;
/// use deck_battle::cards::{SkillCatalog, SkillDefinition, SkillId};
/// use deck_battle::core::{ActorId, BattleConfig};
///
/// let mut catalog = SkillCatalog::new();
/// for i in 1..=6 {
///     catalog.register(SkillDefinition::new(SkillId::new(i), format!("Skill {i}")));
/// }
///
/// let mut system = DeckBattleSystem::with_seed(BattleConfig::new(), catalog, 42);
/// let actor = ActorId::new(1);
/// system.register_actor(actor, (1..=6).map(SkillId::new).collect());
///
/// system.on_battle_start(actor);
/// system.on_turn_start(actor);
/// assert_eq!(system.card_state(actor).unwrap().hand().len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct DeckBattleSystem {
    config: BattleConfig,
    catalog: SkillCatalog,
    actors: FxHashMap<ActorId, ActorCardState>,
    rng: CardRng,
}

impl DeckBattleSystem {
    /// Create a system seeded from OS entropy.
    #[must_use]
    pub fn new(config: BattleConfig, catalog: SkillCatalog) -> Self {
        Self {
            config,
            catalog,
            actors: FxHashMap::default(),
            rng: CardRng::from_entropy(),
        }
    }

    /// Create a system with a fixed seed (deterministic shuffles).
    #[must_use]
    pub fn with_seed(config: BattleConfig, catalog: SkillCatalog, seed: u64) -> Self {
        Self {
            config,
            catalog,
            actors: FxHashMap::default(),
            rng: CardRng::new(seed),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// The skill catalog.
    #[must_use]
    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    // --- registry ---

    /// Register an actor with its learned skill pool.
    ///
    /// Re-registering an existing actor replaces the learned pool but
    /// keeps the rest of its state (the host re-syncs on load).
    pub fn register_actor(&mut self, actor: ActorId, learned: Vec<SkillId>) {
        match self.actors.get_mut(&actor) {
            Some(state) => {
                for id in learned {
                    state.learn(id);
                }
            }
            None => {
                debug!("registering {}", actor);
                self.actors.insert(actor, ActorCardState::new(learned));
            }
        }
    }

    /// Check whether an actor is registered.
    #[must_use]
    pub fn is_registered(&self, actor: ActorId) -> bool {
        self.actors.contains_key(&actor)
    }

    /// Record a newly learned skill for an actor.
    pub fn learn_skill(&mut self, actor: ActorId, id: SkillId) {
        if let Some(state) = self.actors.get_mut(&actor) {
            state.learn(id);
        }
    }

    /// Read access to an actor's card state (HUD counts, tests).
    #[must_use]
    pub fn card_state(&self, actor: ActorId) -> Option<&ActorCardState> {
        self.actors.get(&actor)
    }

    // --- lifecycle hooks ---

    /// Battle start: rebuild the battle deck from the saved deck and
    /// clear every battle-scoped pile.
    pub fn on_battle_start(&mut self, actor: ActorId) {
        if let Some(state) = self.actors.get_mut(&actor) {
            state.setup_battle(&self.config.pool, &mut self.rng);
        }
    }

    /// Turn start: commit any residual reservation, apply MP regen,
    /// then draw this turn's hand.
    ///
    /// Idempotent within a turn; the per-actor flag guards the draw.
    pub fn on_turn_start(&mut self, actor: ActorId) {
        if let Some(state) = self.actors.get_mut(&actor) {
            // A reservation left over from last turn is spent now.
            state.commit_reservation(&self.catalog);

            if self.config.mp_regen > 0 {
                let mut resources = state.resources();
                resources.mp += self.config.mp_regen;
                state.set_resources(resources);
            }

            if !state.turn_cards_drawn() {
                state.draw_hand(self.config.hand_size, &mut self.rng);
                state.set_turn_cards_drawn(true);
            }
        }
    }

    /// Action start: the reserved card is actually executed, so commit
    /// the reservation and route the spent cards.
    pub fn on_action_start(&mut self, actor: ActorId) {
        if let Some(state) = self.actors.get_mut(&actor) {
            state.commit_reservation(&self.catalog);
        }
    }

    /// Turn end: discard the hand (unless keep-hand is configured) and
    /// re-arm the turn draw.
    pub fn on_turn_end(&mut self, actor: ActorId) {
        if let Some(state) = self.actors.get_mut(&actor) {
            if !self.config.keep_hand {
                state.discard_hand();
            }
            state.set_turn_cards_drawn(false);
        }
    }

    // --- draws ---

    /// Draw this turn's hand if it hasn't been drawn yet.
    pub fn draw_hand(&mut self, actor: ActorId) {
        if let Some(state) = self.actors.get_mut(&actor) {
            if !state.turn_cards_drawn() {
                state.draw_hand(self.config.hand_size, &mut self.rng);
                state.set_turn_cards_drawn(true);
            }
        }
    }

    /// Draw a single card on demand (the "Draw (+1)" command).
    ///
    /// Cost gating is separate: call `pay_draw_cost` first.
    pub fn draw_card(&mut self, actor: ActorId) -> Option<SkillId> {
        let state = self.actors.get_mut(&actor)?;
        state.draw_card(self.config.hand_size, &mut self.rng)
    }

    /// Check whether the actor can afford the on-demand draw.
    #[must_use]
    pub fn can_pay_draw_cost(&self, actor: ActorId) -> bool {
        self.actors.get(&actor).is_some_and(|state| {
            let r = state.resources();
            r.mp >= self.config.draw_mp_cost && r.tp >= self.config.draw_tp_cost
        })
    }

    /// Deduct the on-demand draw cost.
    pub fn pay_draw_cost(&mut self, actor: ActorId) -> Result<(), DeckError> {
        if !self.can_pay_draw_cost(actor) {
            if !self.actors.contains_key(&actor) {
                return Err(DeckError::UnknownActor(actor));
            }
            return Err(DeckError::InsufficientResources {
                mp: self.config.draw_mp_cost,
                tp: self.config.draw_tp_cost,
            });
        }

        let state = self
            .actors
            .get_mut(&actor)
            .ok_or(DeckError::UnknownActor(actor))?;
        let r = state.resources();
        state.set_resources(ResourcePool::new(
            r.mp - self.config.draw_mp_cost,
            r.tp - self.config.draw_tp_cost,
        ));
        Ok(())
    }

    // --- hand / actions ---

    /// Resolve the current hand to definitions for display.
    ///
    /// Unresolvable ids are omitted. Reserved slots are included; the
    /// caller filters with `Hand::is_reserved` when listing playable
    /// commands.
    #[must_use]
    pub fn hand_skills(&self, actor: ActorId) -> Vec<&SkillDefinition> {
        let Some(state) = self.actors.get(&actor) else {
            return Vec::new();
        };
        self.catalog
            .resolve(state.hand().cards().iter().copied())
            .collect()
    }

    /// Reserve a hand slot for an in-flight action.
    ///
    /// Returns false on an invalid or already-reserved slot.
    pub fn reserve_card(&mut self, actor: ActorId, index: usize) -> bool {
        self.actors
            .get_mut(&actor)
            .map_or(false, |state| state.hand_mut().reserve(index))
    }

    /// Release the most recent reservation (cancelled target selection).
    pub fn release_reservation(&mut self, actor: ActorId) {
        if let Some(state) = self.actors.get_mut(&actor) {
            state.hand_mut().unreserve();
        }
    }

    /// Player-initiated discard of one hand slot.
    pub fn manual_discard(&mut self, actor: ActorId, index: usize) -> Option<SkillId> {
        self.actors.get_mut(&actor)?.manual_discard(index)
    }

    /// Route spent cards to the exhaust or discard pile.
    pub fn process_used_cards(&mut self, actor: ActorId, ids: &[SkillId]) {
        if let Some(state) = self.actors.get_mut(&actor) {
            state.process_used_cards(ids, &self.catalog);
        }
    }

    // --- resources ---

    /// Overwrite an actor's MP/TP from the host.
    pub fn set_resources(&mut self, actor: ActorId, resources: ResourcePool) {
        if let Some(state) = self.actors.get_mut(&actor) {
            state.set_resources(resources);
        }
    }

    /// Current MP/TP for an actor.
    #[must_use]
    pub fn resources(&self, actor: ActorId) -> Option<ResourcePool> {
        self.actors.get(&actor).map(ActorCardState::resources)
    }

    /// Apply the configured MP regeneration, returning the amount gained.
    pub fn apply_mp_regen(&mut self, actor: ActorId) -> i32 {
        let Some(state) = self.actors.get_mut(&actor) else {
            return 0;
        };
        if self.config.mp_regen > 0 {
            let mut r = state.resources();
            r.mp += self.config.mp_regen;
            state.set_resources(r);
        }
        self.config.mp_regen
    }

    // --- deck editor surface (outside battle only) ---

    /// Check saved-deck membership.
    pub fn is_skill_in_deck(&mut self, actor: ActorId, id: SkillId) -> bool {
        self.actors
            .get_mut(&actor)
            .map_or(false, |state| state.is_skill_in_deck(id, &self.config.pool))
    }

    /// Toggle saved-deck membership subject to the size limits.
    ///
    /// Returns the resulting membership, or a refusal when the toggle
    /// would violate the configured minimum or maximum.
    pub fn toggle_deck_skill(&mut self, actor: ActorId, id: SkillId) -> Result<bool, DeckError> {
        let state = self
            .actors
            .get_mut(&actor)
            .ok_or(DeckError::UnknownActor(actor))?;

        let size = state.saved_deck_size(&self.config.pool);
        let in_deck = state.is_skill_in_deck(id, &self.config.pool);

        if in_deck && size <= self.config.min_deck_size {
            return Err(DeckError::DeckAtMinSize {
                min: self.config.min_deck_size,
            });
        }
        if !in_deck && size >= self.config.max_deck_size {
            return Err(DeckError::DeckAtMaxSize {
                max: self.config.max_deck_size,
            });
        }

        Ok(state.toggle_deck_skill(id, &self.config.pool))
    }

    /// Current saved-deck size (0 for unknown actors).
    pub fn deck_size(&mut self, actor: ActorId) -> usize {
        self.actors
            .get_mut(&actor)
            .map_or(0, |state| state.saved_deck_size(&self.config.pool))
    }

    /// Skills the editor lists for an actor: the learned pool minus the
    /// global exclusions, resolved against the catalog.
    #[must_use]
    pub fn editable_skills(&self, actor: ActorId) -> Vec<&SkillDefinition> {
        let Some(state) = self.actors.get(&actor) else {
            return Vec::new();
        };
        let eligible = self.config.pool.filter(state.learned().iter().copied());
        self.catalog.resolve(eligible).collect()
    }

    // --- persistence ---

    /// Capture the whole system as plain data for a mid-battle save.
    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        let mut actors: Vec<_> = self
            .actors
            .iter()
            .map(|(&id, state)| (id, state.clone()))
            .collect();
        actors.sort_by_key(|(id, _)| *id);

        BattleSnapshot {
            actors,
            rng: self.rng.state(),
        }
    }

    /// Restore actor states and the RNG stream from a snapshot.
    pub fn restore(&mut self, snapshot: BattleSnapshot) {
        self.actors = snapshot.actors.into_iter().collect();
        self.rng = CardRng::from_state(&snapshot.rng);
        debug!("restored {} actors from snapshot", self.actors.len());
    }
}

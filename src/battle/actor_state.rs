//! Per-combatant card state.
//!
//! One `ActorCardState` per registered actor, owned by the system's
//! registry. The saved deck is the single source of truth between
//! battles; deck, hand, discard, exhaust, and recent-discards are
//! battle-scoped derivatives rebuilt from it at each battle start.
//!
//! Everything here is plain serde data so a mid-battle save captures
//! the aggregate with full fidelity.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::cards::{CardPool, SkillCatalog, SkillId};
use crate::core::CardRng;
use crate::piles::{Deck, Hand};

/// Host-synced MP/TP for one actor.
///
/// The core only reads and writes this through the draw-cost gate and
/// MP regeneration; the host keeps it in sync with its own combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    /// Current MP.
    pub mp: i32,
    /// Current TP.
    pub tp: i32,
}

impl ResourcePool {
    /// Create a resource pool.
    #[must_use]
    pub const fn new(mp: i32, tp: i32) -> Self {
        Self { mp, tp }
    }
}

/// Aggregate card state for one combatant.
///
/// Created on first registration, reset (not destroyed) at each battle
/// start. Mutation goes through the methods; reads go through the
/// accessors (the HUD wants deck and discard counts).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorCardState {
    deck: Deck,
    hand: Hand,
    discard: Vec<SkillId>,
    exhaust: Vec<SkillId>,
    /// Cards discarded since the last shuffle; consumed by the next
    /// smart shuffle.
    recent_discards: Vec<SkillId>,
    /// Persistent deck configuration. `None` until lazily derived from
    /// the learned pool.
    saved_deck: Option<Vec<SkillId>>,
    /// All skills the actor has learned, synced by the host.
    learned: Vec<SkillId>,
    resources: ResourcePool,
    /// Guards the turn-start hand draw so it runs once per turn.
    turn_cards_drawn: bool,
}

impl ActorCardState {
    /// Create card state for an actor with the given learned pool.
    #[must_use]
    pub fn new(learned: Vec<SkillId>) -> Self {
        Self {
            learned,
            ..Self::default()
        }
    }

    // --- accessors ---

    /// The battle deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The current hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Mutable hand access for reservation plumbing.
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// The discard pile.
    #[must_use]
    pub fn discard(&self) -> &[SkillId] {
        &self.discard
    }

    /// The exhaust pile.
    #[must_use]
    pub fn exhaust(&self) -> &[SkillId] {
        &self.exhaust
    }

    /// Cards discarded since the last shuffle.
    #[must_use]
    pub fn recent_discards(&self) -> &[SkillId] {
        &self.recent_discards
    }

    /// The saved deck, if it has been initialized.
    #[must_use]
    pub fn saved_deck(&self) -> Option<&[SkillId]> {
        self.saved_deck.as_deref()
    }

    /// The learned skill pool.
    #[must_use]
    pub fn learned(&self) -> &[SkillId] {
        &self.learned
    }

    /// Current MP/TP.
    #[must_use]
    pub fn resources(&self) -> ResourcePool {
        self.resources
    }

    /// Overwrite MP/TP from the host.
    pub fn set_resources(&mut self, resources: ResourcePool) {
        self.resources = resources;
    }

    /// Whether this turn's hand has already been drawn.
    #[must_use]
    pub fn turn_cards_drawn(&self) -> bool {
        self.turn_cards_drawn
    }

    // --- learned pool sync ---

    /// Record a newly learned skill.
    ///
    /// Learning never edits the saved deck; the player adds the card
    /// through the editor.
    pub fn learn(&mut self, id: SkillId) {
        if !self.learned.contains(&id) {
            self.learned.push(id);
        }
    }

    // --- battle lifecycle ---

    /// Battle-start reset: derive the saved deck if needed, rebuild the
    /// battle deck from it, clear every battle-scoped pile.
    pub fn setup_battle(&mut self, pool: &CardPool, rng: &mut CardRng) {
        if self.saved_deck.as_ref().map_or(true, Vec::is_empty) {
            self.saved_deck = Some(pool.filter(self.learned.iter().copied()));
        }

        let saved = self.saved_deck.as_deref().unwrap_or(&[]).to_vec();
        self.deck.initialize(&saved, pool, rng);
        self.discard.clear();
        self.exhaust.clear();
        self.recent_discards.clear();
        self.hand.clear();
        self.turn_cards_drawn = false;

        debug!("battle setup: deck of {} cards", self.deck.len());
    }

    /// Draw one card into the hand, reshuffling the discard pile first
    /// if the deck is empty.
    ///
    /// Returns the drawn id, or `None` when both deck and discard are
    /// exhausted (state is left unchanged in that case).
    pub fn draw_card(&mut self, hand_size: usize, rng: &mut CardRng) -> Option<SkillId> {
        if self.deck.is_empty() {
            self.reshuffle_discard(hand_size, rng);
        }
        let id = self.deck.draw()?;
        trace!("drew {}", id);
        self.hand.add(id);
        Some(id)
    }

    /// Draw up to `hand_size` cards.
    pub fn draw_hand(&mut self, hand_size: usize, rng: &mut CardRng) {
        for _ in 0..hand_size {
            self.draw_card(hand_size, rng);
        }
    }

    /// Mark this turn's hand as drawn (or reset the flag at turn end).
    pub fn set_turn_cards_drawn(&mut self, drawn: bool) {
        self.turn_cards_drawn = drawn;
    }

    /// Move the discard pile back into the deck and smart-shuffle.
    ///
    /// No-op when the discard pile is empty. The recent-discards bag is
    /// consumed by the anti-repeat pass and cleared.
    pub fn reshuffle_discard(&mut self, hand_size: usize, rng: &mut CardRng) {
        if self.discard.is_empty() {
            return;
        }

        for id in self.discard.drain(..) {
            self.deck.add(id);
        }

        let recent = std::mem::take(&mut self.recent_discards);
        let swaps = self.deck.smart_shuffle(&recent, hand_size, rng);

        debug!(
            "reshuffled {} cards into the deck ({} anti-repeat swaps)",
            self.deck.len(),
            swaps
        );
    }

    /// Discard the entire hand (turn-end housekeeping).
    pub fn discard_hand(&mut self) {
        let cards = self.hand.clear();
        trace!("discarding hand of {}", cards.len());
        self.recent_discards.extend(cards.iter().copied());
        self.discard.extend(cards);
    }

    /// Player-initiated discard of one hand slot.
    ///
    /// Returns the discarded id, or `None` for an out-of-range index.
    pub fn manual_discard(&mut self, index: usize) -> Option<SkillId> {
        let id = self.hand.remove(index)?;
        self.recent_discards.push(id);
        self.discard.push(id);
        Some(id)
    }

    /// Route spent cards: exhaustible skills leave play for the battle,
    /// everything else goes to the discard pile.
    pub fn process_used_cards(&mut self, ids: &[SkillId], catalog: &SkillCatalog) {
        for &id in ids {
            if catalog.is_exhaust(id) {
                trace!("{} exhausted", id);
                self.exhaust.push(id);
            } else {
                trace!("{} discarded", id);
                self.recent_discards.push(id);
                self.discard.push(id);
            }
        }
    }

    /// Commit the hand's reservation and route the spent cards.
    pub fn commit_reservation(&mut self, catalog: &SkillCatalog) {
        let used = self.hand.commit();
        if !used.is_empty() {
            debug!("committed {} reserved cards", used.len());
            self.process_used_cards(&used, catalog);
        }
    }

    // --- saved deck (persistent configuration) ---

    /// Lazily derive the saved deck from the learned pool.
    ///
    /// Also the recovery path for malformed persisted state: a reset
    /// aggregate repopulates itself here exactly like a fresh actor.
    pub fn ensure_saved_deck(&mut self, pool: &CardPool) {
        if self.saved_deck.is_none() {
            self.saved_deck = Some(pool.filter(self.learned.iter().copied()));
        }
    }

    /// Check saved-deck membership.
    pub fn is_skill_in_deck(&mut self, id: SkillId, pool: &CardPool) -> bool {
        self.ensure_saved_deck(pool);
        self.saved_deck.as_ref().is_some_and(|d| d.contains(&id))
    }

    /// Toggle saved-deck membership, returning the resulting membership.
    ///
    /// The aggregate is a free sequence; size policy belongs to the
    /// editor boundary.
    pub fn toggle_deck_skill(&mut self, id: SkillId, pool: &CardPool) -> bool {
        self.ensure_saved_deck(pool);
        let deck = self.saved_deck.get_or_insert_with(Vec::new);

        if let Some(pos) = deck.iter().position(|&d| d == id) {
            deck.remove(pos);
            false
        } else {
            deck.push(id);
            true
        }
    }

    /// Current saved-deck size.
    pub fn saved_deck_size(&mut self, pool: &CardPool) -> usize {
        self.ensure_saved_deck(pool);
        self.saved_deck.as_ref().map_or(0, Vec::len)
    }
}

//! The hand and its reservation layer.
//!
//! Playing a card is a two-phase gesture: the player tentatively picks a
//! card (reserve), then selects a target. Cancelling target selection
//! must return the card to a fully playable hand (unreserve), and the
//! card only becomes spent when the action actually executes (commit).
//!
//! Reservations are positional slots, not ids: the same skill may occupy
//! several slots and only the chosen copy is locked. Removing any card
//! shifts indices, so `remove` invalidates every outstanding reservation
//! rather than trying to patch slot numbers. In normal play at most one
//! slot is reserved at a time (one action in flight), but the structure
//! supports a stack of them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::SkillId;

/// Cards currently available to play, plus reserved slots.
///
/// ## Example
///
/// ```
/// use deck_battle::piles::Hand;
/// use deck_battle::cards::SkillId;
///
/// let mut hand = Hand::new();
/// hand.add(SkillId::new(1));
/// hand.add(SkillId::new(2));
///
/// assert!(hand.reserve(0));
/// assert_eq!(hand.get(0), None); // reserved slots are not playable
/// assert_eq!(hand.commit(), vec![SkillId::new(1)]);
/// assert_eq!(hand.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<SkillId>,
    /// Reserved slot indices, in reservation order (most recent last).
    reserved: SmallVec<[usize; 2]>,
}

impl Hand {
    /// Create a new empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawn card.
    ///
    /// No upper bound is enforced here; the draw limit lives with the
    /// caller.
    pub fn add(&mut self, id: SkillId) {
        self.cards.push(id);
    }

    /// The card at `index`, unless that slot is reserved or out of range.
    ///
    /// Reserved cards stay in their slots and count toward hand size,
    /// but must not be offered as playable.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<SkillId> {
        if self.reserved.contains(&index) {
            return None;
        }
        self.cards.get(index).copied()
    }

    /// Remove and return the card at `index`.
    ///
    /// Removal shifts every later slot, so all reservations are cleared
    /// as a side effect. Returns `None` for out-of-range input.
    pub fn remove(&mut self, index: usize) -> Option<SkillId> {
        if index >= self.cards.len() {
            return None;
        }
        let removed = self.cards.remove(index);
        self.reserved.clear();
        Some(removed)
    }

    /// Mark `index` as reserved.
    ///
    /// Returns false (and changes nothing) on an out-of-range or
    /// already-reserved index.
    pub fn reserve(&mut self, index: usize) -> bool {
        if index >= self.cards.len() || self.reserved.contains(&index) {
            return false;
        }
        self.reserved.push(index);
        true
    }

    /// Release the most recent reservation.
    ///
    /// Stack discipline: last reserved, first released. No-op when
    /// nothing is reserved.
    pub fn unreserve(&mut self) {
        self.reserved.pop();
    }

    /// Remove all reserved cards, clearing the reservation set.
    ///
    /// Slots are removed from the highest index down so earlier removals
    /// cannot shift later ones. The returned order is unspecified; every
    /// reserved card appears exactly once. Unreserved cards keep their
    /// relative order.
    pub fn commit(&mut self) -> Vec<SkillId> {
        let mut indices: SmallVec<[usize; 2]> = std::mem::take(&mut self.reserved);
        indices.sort_unstable_by(|a, b| b.cmp(a));

        indices.into_iter().map(|i| self.cards.remove(i)).collect()
    }

    /// Remove every card and reservation, returning the removed cards.
    pub fn clear(&mut self) -> Vec<SkillId> {
        self.reserved.clear();
        std::mem::take(&mut self.cards)
    }

    /// Check whether a slot is reserved.
    #[must_use]
    pub fn is_reserved(&self, index: usize) -> bool {
        self.reserved.contains(&index)
    }

    /// Number of reserved slots.
    #[must_use]
    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }

    /// Number of cards in the hand, reserved slots included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in slot order, reserved or not.
    #[must_use]
    pub fn cards(&self) -> &[SkillId] {
        &self.cards
    }

    /// Iterate over the playable (unreserved) slots as `(index, id)`.
    pub fn playable(&self) -> impl Iterator<Item = (usize, SkillId)> + '_ {
        self.cards
            .iter()
            .copied()
            .enumerate()
            .filter(|(i, _)| !self.reserved.contains(i))
    }
}

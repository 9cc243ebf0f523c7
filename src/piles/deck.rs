//! The draw pile.
//!
//! An ordered sequence of skill ids in face-down draw order. The top of
//! the pile is the back of the vector: draws pop from the end, so the
//! safe zone inspected by the anti-repeat pass is the tail of the
//! storage.
//!
//! Battle-scoped: populated from the actor's saved deck at battle
//! start, drained by draws, refilled by reshuffling the discard pile.

use serde::{Deserialize, Serialize};

use crate::cards::{CardPool, SkillId};
use crate::core::CardRng;

use super::shuffle::anti_repeat_pass;

/// Face-down draw pile.
///
/// ## Example
///
/// ```
/// use deck_battle::piles::Deck;
/// use deck_battle::cards::{CardPool, SkillId};
/// use deck_battle::core::CardRng;
///
/// let mut rng = CardRng::new(42);
/// let mut deck = Deck::new();
/// deck.initialize(&[SkillId::new(1), SkillId::new(2)], &CardPool::new(), &mut rng);
///
/// assert_eq!(deck.len(), 2);
/// assert!(deck.draw().is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<SkillId>,
}

impl Deck {
    /// Create a new empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with the pool-filtered input, then shuffle.
    ///
    /// Empty input yields an empty deck; that is not an error.
    pub fn initialize(&mut self, skills: &[SkillId], pool: &CardPool, rng: &mut CardRng) {
        self.cards = pool.filter(skills.iter().copied());
        self.shuffle(rng);
    }

    /// Uniform in-place shuffle.
    pub fn shuffle(&mut self, rng: &mut CardRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Shuffle, then bias the next `safe_zone` draws away from `recent`.
    ///
    /// Returns the number of anti-repeat swaps performed.
    pub fn smart_shuffle(
        &mut self,
        recent: &[SkillId],
        safe_zone: usize,
        rng: &mut CardRng,
    ) -> usize {
        self.shuffle(rng);
        anti_repeat_pass(&mut self.cards, recent, safe_zone, rng)
    }

    /// Remove and return the top card, or `None` when empty.
    pub fn draw(&mut self) -> Option<SkillId> {
        self.cards.pop()
    }

    /// Append one card (used when returning discards before a reshuffle).
    pub fn add(&mut self, id: SkillId) {
        self.cards.push(id);
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in draw-pile order (top of pile at the back).
    #[must_use]
    pub fn cards(&self) -> &[SkillId] {
        &self.cards
    }
}

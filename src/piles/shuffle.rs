//! Anti-repeat bias for freshly reshuffled decks ("smart shuffle").
//!
//! A uniform reshuffle of a small discard pile frequently hands the
//! player the exact cards they just threw away. After the uniform
//! shuffle, this pass looks at the *safe zone* - the next `safe_zone`
//! cards to be drawn, i.e. the tail of the slice since draws pop from
//! the end - and swaps any card that was discarded since the last
//! shuffle into a uniformly random position deeper in the deck.
//!
//! The bias reduces but never eliminates immediate redraws: the swap
//! partner pulled from the remainder may itself be a recent discard,
//! and a card swapped out can be pulled back by a later swap. When the
//! deck is no larger than the safe zone there is no remainder and the
//! pass leaves the slice untouched.

use crate::cards::SkillId;
use crate::core::CardRng;

/// Swap recent discards out of the next-to-draw positions.
///
/// `cards` is ordered draw-pile layout with the draw end at the back.
/// Returns the number of swaps performed.
pub fn anti_repeat_pass(
    cards: &mut [SkillId],
    recent: &[SkillId],
    safe_zone: usize,
    rng: &mut CardRng,
) -> usize {
    if recent.is_empty() {
        return 0;
    }

    // Everything below the safe zone is eligible as a swap target.
    let remainder = cards.len().saturating_sub(safe_zone);
    let mut swaps = 0;

    for i in remainder..cards.len() {
        if recent.contains(&cards[i]) && remainder > 0 {
            let j = rng.gen_range_usize(0..remainder);
            cards.swap(i, j);
            swaps += 1;
        }
    }

    swaps
}

//! Smart shuffle behavior: conservation and the anti-repeat bias.
//!
//! The bias is statistical, so the headline test runs many seeded
//! trials and compares safe-zone hit rates between the uniform shuffle
//! and the biased one.

use deck_battle::cards::SkillId;
use deck_battle::core::CardRng;
use deck_battle::piles::{anti_repeat_pass, Deck};

fn ids(range: std::ops::RangeInclusive<u32>) -> Vec<SkillId> {
    range.map(SkillId::new).collect()
}

fn deck_of(cards: &[SkillId]) -> Deck {
    let mut deck = Deck::new();
    for &id in cards {
        deck.add(id);
    }
    deck
}

fn safe_zone_hits(deck: &Deck, recent: &[SkillId], hand_size: usize) -> usize {
    let cards = deck.cards();
    let start = cards.len().saturating_sub(hand_size);
    cards[start..].iter().filter(|id| recent.contains(id)).count()
}

/// Reshuffling conserves the multiset regardless of swaps.
#[test]
fn test_smart_shuffle_preserves_multiset() {
    let all = ids(1..=30);
    let recent: Vec<_> = ids(1..=10);

    for seed in 0..20 {
        let mut rng = CardRng::new(seed);
        let mut deck = deck_of(&all);

        deck.smart_shuffle(&recent, 5, &mut rng);

        let mut contents = deck.cards().to_vec();
        contents.sort();
        assert_eq!(contents, all);
    }
}

/// With recent discards present and a non-empty remainder, the biased
/// shuffle puts recent cards in the next-draw window strictly less
/// often than the uniform shuffle (measured over many trials).
#[test]
fn test_anti_repeat_bias_reduces_redraws() {
    let all = ids(1..=30);
    let recent = ids(1..=5);
    let hand_size = 5;
    let trials = 2000;

    let mut uniform_hits = 0;
    let mut biased_hits = 0;

    for seed in 0..trials {
        let mut rng = CardRng::new(seed);
        let mut deck = deck_of(&all);
        deck.shuffle(&mut rng);
        uniform_hits += safe_zone_hits(&deck, &recent, hand_size);

        let mut rng = CardRng::new(seed + 100_000);
        let mut deck = deck_of(&all);
        deck.smart_shuffle(&recent, hand_size, &mut rng);
        biased_hits += safe_zone_hits(&deck, &recent, hand_size);
    }

    // Uniform expectation is 5 * 5/30 per trial, i.e. ~1667 hits over
    // 2000 trials. The bias should cut that down by a wide margin; a
    // 40% reduction threshold keeps the test stable across seeds.
    assert!(
        biased_hits * 10 < uniform_hits * 6,
        "expected biased hits ({biased_hits}) well below uniform hits ({uniform_hits})"
    );
}

/// The bias reduces, never guarantees: when every card in the deck is
/// a recent discard, the safe zone necessarily still contains them.
#[test]
fn test_bias_degrades_when_everything_is_recent() {
    let all = ids(1..=6);
    let mut rng = CardRng::new(42);
    let mut deck = deck_of(&all);

    deck.smart_shuffle(&all, 5, &mut rng);

    assert_eq!(safe_zone_hits(&deck, &all, 5), 5);
    let mut contents = deck.cards().to_vec();
    contents.sort();
    assert_eq!(contents, all);
}

/// Deck no larger than the safe zone: the pass runs but cannot swap.
#[test]
fn test_no_remainder_never_swaps() {
    for seed in 0..10 {
        let mut rng = CardRng::new(seed);
        let mut cards = ids(1..=4);
        let before = cards.clone();

        let swaps = anti_repeat_pass(&mut cards, &ids(1..=4), 5, &mut rng);

        assert_eq!(swaps, 0);
        assert_eq!(cards, before);
    }
}

/// The pass only touches positions needed to displace recent cards;
/// deep-deck order outside swap targets is never reordered wholesale.
#[test]
fn test_pass_without_hits_is_identity() {
    for seed in 0..10 {
        let mut rng = CardRng::new(seed);
        let mut cards = ids(1..=20);
        let before = cards.clone();

        // Recent ids that do not occur in the deck at all.
        let recent = ids(100..=105);
        let swaps = anti_repeat_pass(&mut cards, &recent, 5, &mut rng);

        assert_eq!(swaps, 0);
        assert_eq!(cards, before);
    }
}

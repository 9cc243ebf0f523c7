//! Battle configuration.
//!
//! The host game configures the card system at startup: hand size,
//! keep-hand policy, globally excluded skills, deck size limits, the
//! draw-command cost, and per-turn MP regeneration. The core never
//! hardcodes these - defaults mirror a conventional setup (hand of 5,
//! decks of 5-30 cards, free draws).

use crate::cards::CardPool;
use crate::cards::SkillId;

/// Complete configuration for the card battle system.
///
/// Built once by the host and handed to `DeckBattleSystem::new`.
///
/// ## Example
///
/// ```
/// use deck_battle::core::BattleConfig;
/// use deck_battle::cards::SkillId;
///
/// let config = BattleConfig::new()
///     .with_hand_size(4)
///     .with_excluded([SkillId::new(1), SkillId::new(2)])
///     .with_deck_limits(5, 20)
///     .with_draw_cost(10, 0);
/// ```
#[derive(Clone, Debug)]
pub struct BattleConfig {
    /// Cards drawn at the start of each turn.
    pub hand_size: usize,

    /// Keep undiscarded cards across turns instead of discarding the
    /// whole hand at turn end.
    pub keep_hand: bool,

    /// Globally excluded skills (never enter any deck).
    pub pool: CardPool,

    /// Minimum saved-deck size the editor will allow.
    pub min_deck_size: usize,

    /// Maximum saved-deck size the editor will allow.
    pub max_deck_size: usize,

    /// MP cost of the on-demand draw command.
    pub draw_mp_cost: i32,

    /// TP cost of the on-demand draw command.
    pub draw_tp_cost: i32,

    /// MP restored to each actor at the start of their turn.
    pub mp_regen: i32,
}

impl BattleConfig {
    /// Create a configuration with conventional defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hand_size: 5,
            keep_hand: false,
            pool: CardPool::new(),
            min_deck_size: 5,
            max_deck_size: 30,
            draw_mp_cost: 0,
            draw_tp_cost: 0,
            mp_regen: 0,
        }
    }

    /// Set the per-turn hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Keep the hand across turn boundaries.
    #[must_use]
    pub fn keep_hand(mut self) -> Self {
        self.keep_hand = true;
        self
    }

    /// Set the globally excluded skill ids.
    #[must_use]
    pub fn with_excluded(mut self, ids: impl IntoIterator<Item = SkillId>) -> Self {
        self.pool = CardPool::with_excluded(ids);
        self
    }

    /// Set the saved-deck size limits enforced by the editor boundary.
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn with_deck_limits(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "min deck size must not exceed max");
        self.min_deck_size = min;
        self.max_deck_size = max;
        self
    }

    /// Set the resource cost of the on-demand draw command.
    ///
    /// Panics if either cost is negative.
    #[must_use]
    pub fn with_draw_cost(mut self, mp: i32, tp: i32) -> Self {
        assert!(mp >= 0, "draw MP cost must be non-negative");
        assert!(tp >= 0, "draw TP cost must be non-negative");
        self.draw_mp_cost = mp;
        self.draw_tp_cost = tp;
        self
    }

    /// Set the MP restored at each actor's turn start.
    ///
    /// Panics if `amount` is negative.
    #[must_use]
    pub fn with_mp_regen(mut self, amount: i32) -> Self {
        assert!(amount >= 0, "MP regen must be non-negative");
        self.mp_regen = amount;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

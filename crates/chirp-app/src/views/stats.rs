//! # Stats Counter Reconciler
//!
//! Each rendered tweet keeps a [`DisplayStats`]: the last counters it showed.
//! Whenever the totals it is fed change, the display is replaced wholesale
//! (never merged field by field) and every counter gets an animation hint:
//! `-offset` when the new total is above what was on screen (the new number
//! slides in from below), `+offset` otherwise.
//!
//! The hint is presentation only. Consistency with the backend comes from the
//! snapshots fed into [`StatsReconciler::observe`], not from this module.

use chirp_core::StatTotals;
use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_MOVE_OFFSET;

/// Animation hint for a counter, using the default offset.
///
/// Returns `-25` iff `total > current`, `+25` otherwise; never zero.
pub fn move_direction(total: u32, current: u32) -> i32 {
    move_direction_with(total, current, DEFAULT_MOVE_OFFSET)
}

/// Animation hint for a counter with an explicit offset magnitude.
pub fn move_direction_with(total: u32, current: u32, offset: i32) -> i32 {
    let offset = i32::try_from(offset.unsigned_abs()).unwrap_or(i32::MAX).max(1);
    if total > current {
        -offset
    } else {
        offset
    }
}

/// Counter shown under a tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    /// Reply count
    Replies,
    /// Like count
    Likes,
    /// Retweet count
    Retweets,
}

impl StatKind {
    /// Render order of the stats bar.
    pub const ALL: [StatKind; 3] = [StatKind::Replies, StatKind::Retweets, StatKind::Likes];

    /// Position in [`StatKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Replies => 0,
            Self::Retweets => 1,
            Self::Likes => 2,
        }
    }

    fn total(self, totals: &StatTotals) -> u32 {
        match self {
            Self::Replies => totals.replies,
            Self::Likes => totals.likes,
            Self::Retweets => totals.retweets,
        }
    }
}

/// Last counters shown on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStats {
    /// Replies on screen
    pub current_replies: u32,
    /// Likes on screen
    pub current_likes: u32,
    /// Retweets on screen
    pub current_tweets: u32,
}

impl DisplayStats {
    /// Counter for `kind`.
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Replies => self.current_replies,
            StatKind::Likes => self.current_likes,
            StatKind::Retweets => self.current_tweets,
        }
    }
}

impl From<StatTotals> for DisplayStats {
    fn from(totals: StatTotals) -> Self {
        Self {
            current_replies: totals.replies,
            current_likes: totals.likes,
            current_tweets: totals.retweets,
        }
    }
}

/// What a renderer needs for one counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPresentation {
    /// Which counter
    pub kind: StatKind,
    /// Signed animation offset
    pub direction: i32,
    /// Value to draw
    pub displayed_count: u32,
    /// Whether the stats block is shown at all
    pub is_visible: bool,
}

/// Result of feeding totals into the reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsFrame {
    /// Display before the update
    pub previous: DisplayStats,
    /// Display after the update
    pub display: DisplayStats,
    /// Per-counter presentation, in [`StatKind::ALL`] order
    pub stats: [StatPresentation; 3],
}

impl StatsFrame {
    /// Presentation of one counter.
    pub fn get(&self, kind: StatKind) -> StatPresentation {
        self.stats[kind.index()]
    }

    /// Whether the display moved.
    pub fn changed(&self) -> bool {
        self.previous != self.display
    }
}

/// Keeps the on-screen counters in step with the latest totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReconciler {
    totals: StatTotals,
    display: DisplayStats,
    offset: i32,
}

impl StatsReconciler {
    /// Start with the display equal to `totals`.
    pub fn new(totals: StatTotals) -> Self {
        Self::with_offset(totals, DEFAULT_MOVE_OFFSET)
    }

    /// Same as [`new`](Self::new) with a custom animation offset.
    pub fn with_offset(totals: StatTotals, offset: i32) -> Self {
        Self {
            totals,
            display: totals.into(),
            offset,
        }
    }

    /// Latest totals fed in.
    pub fn totals(&self) -> StatTotals {
        self.totals
    }

    /// Counters on screen.
    pub fn display(&self) -> DisplayStats {
        self.display
    }

    /// The stats block is hidden when every total is zero.
    pub fn is_visible(&self) -> bool {
        !self.totals.is_empty()
    }

    /// Animation hint for one counter against the current display.
    pub fn move_for(&self, kind: StatKind) -> i32 {
        move_direction_with(kind.total(&self.totals), self.display.get(kind), self.offset)
    }

    /// Current presentation without feeding new totals.
    pub fn presentation(&self) -> [StatPresentation; 3] {
        self.present(&self.totals, &self.display)
    }

    /// Frame for the current display with no pending movement.
    pub fn frame(&self) -> StatsFrame {
        StatsFrame {
            previous: self.display,
            display: self.display,
            stats: self.presentation(),
        }
    }

    /// Feed the latest totals.
    ///
    /// Hints are computed against the display as it was before this call;
    /// then, if any of the three totals differs from the last ones, the
    /// display is replaced by the new totals in one step.
    pub fn observe(&mut self, totals: StatTotals) -> StatsFrame {
        let previous = self.display;
        let mut stats = self.present(&totals, &previous);

        if totals != self.totals {
            self.totals = totals;
            self.display = totals.into();
        }

        for stat in &mut stats {
            stat.displayed_count = self.display.get(stat.kind);
            stat.is_visible = self.is_visible();
        }

        StatsFrame {
            previous,
            display: self.display,
            stats,
        }
    }

    fn present(&self, totals: &StatTotals, display: &DisplayStats) -> [StatPresentation; 3] {
        StatKind::ALL.map(|kind| StatPresentation {
            kind,
            direction: move_direction_with(kind.total(totals), display.get(kind), self.offset),
            displayed_count: display.get(kind),
            is_visible: !totals.is_empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_like_rising_slides_in_from_below() {
        let mut stats = StatsReconciler::new(StatTotals::new(0, 1, 0));
        let frame = stats.observe(StatTotals::new(0, 2, 0));

        let likes = frame.get(StatKind::Likes);
        assert_eq!(likes.direction, -25);
        assert_eq!(likes.displayed_count, 2);
        assert_eq!(frame.previous.current_likes, 1);
        assert!(frame.changed());

        // Steady after the display caught up.
        assert_eq!(stats.move_for(StatKind::Likes), 25);
    }

    #[test]
    fn test_extreme_offset_saturates() {
        assert_eq!(move_direction_with(2, 1, i32::MIN), -i32::MAX);
        assert_eq!(move_direction_with(1, 1, i32::MIN), i32::MAX);
        assert_eq!(move_direction_with(1, 1, 0), 1);
    }

    #[test]
    fn test_falling_count_moves_up() {
        let mut stats = StatsReconciler::new(StatTotals::new(4, 0, 2));
        let frame = stats.observe(StatTotals::new(4, 0, 1));
        assert_eq!(frame.get(StatKind::Retweets).direction, 25);
        assert_eq!(frame.get(StatKind::Replies).direction, 25);
        assert_eq!(stats.display().current_tweets, 1);
    }

    #[test]
    fn test_unchanged_totals_do_not_touch_display() {
        let mut stats = StatsReconciler::new(StatTotals::new(1, 1, 1));
        let frame = stats.observe(StatTotals::new(1, 1, 1));
        assert!(!frame.changed());
    }

    #[test]
    fn test_visibility() {
        let mut stats = StatsReconciler::new(StatTotals::default());
        assert!(!stats.is_visible());
        let frame = stats.observe(StatTotals::new(0, 0, 1));
        assert!(frame.stats.iter().all(|s| s.is_visible));
        let frame = stats.observe(StatTotals::default());
        assert!(frame.stats.iter().all(|s| !s.is_visible));
    }

    #[test]
    fn test_custom_offset() {
        assert_eq!(move_direction_with(3, 1, 40), -40);
        assert_eq!(move_direction_with(1, 3, 40), 40);
    }

    fn totals() -> impl Strategy<Value = StatTotals> {
        (0u32..50, 0u32..50, 0u32..50).prop_map(|(r, l, t)| StatTotals::new(r, l, t))
    }

    proptest! {
        #[test]
        fn prop_move_direction_is_signed_offset(total in 0u32..1000, current in 0u32..1000) {
            let m = move_direction(total, current);
            prop_assert!(m == 25 || m == -25);
            prop_assert_eq!(m == -25, total > current);
        }

        #[test]
        fn prop_display_equals_latest_observed(seq in proptest::collection::vec(totals(), 1..12)) {
            let mut stats = StatsReconciler::new(StatTotals::default());
            for t in &seq {
                stats.observe(*t);
            }
            let last = *seq.last().unwrap();
            prop_assert_eq!(stats.display(), DisplayStats::from(last));
            prop_assert_eq!(stats.is_visible(), !(last.replies == 0 && last.likes == 0 && last.retweets == 0));
        }
    }
}

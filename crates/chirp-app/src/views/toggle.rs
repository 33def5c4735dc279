//! # Membership Toggle Reconciliation
//!
//! Tracks one actor's membership in one set (likers of a tweet, retweeters of
//! a tweet, or their own bookmarks) while a toggle travels to the backend.
//!
//! ```text
//!            begin(d) -> t          confirm(t)
//! Confirmed ─────────► Pending{d, t} ─────────► Confirmed (member = d.target)
//!     ▲                    │
//!     │  sync(snapshot)    │ fail(t, reason)
//!     └──────────────── Failed{d} (member unchanged)
//! ```
//!
//! While pending, the displayed membership is the optimistic target. A failure
//! drops back to the last confirmed membership, so the UI reverts on its own.
//! Only one toggle per set may be pending at a time.
//!
//! `begin` hands out a [`ToggleTicket`]. Only the result carrying that ticket
//! may settle the toggle; a result for a toggle that was reset in the meantime
//! (session switch, sign-out) is ignored.

use chirp_core::{ChirpError, Direction};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one `begin` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleTicket(Uuid);

impl ToggleTicket {
    fn issue() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ToggleTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of the latest toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TogglePhase {
    /// Display matches the confirmed membership
    #[default]
    Confirmed,
    /// A mutation is in flight
    Pending {
        /// Direction sent to the backend
        direction: Direction,
        /// Ticket of the in-flight mutation
        ticket: ToggleTicket,
    },
    /// The last mutation failed and was reverted
    Failed {
        /// Direction that failed
        direction: Direction,
        /// Failure description
        reason: String,
    },
}

impl TogglePhase {
    /// Short label for logging/serialization
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending { .. } => "pending",
            Self::Failed { .. } => "failed",
        }
    }
}

/// One actor's membership in one set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipToggle {
    confirmed: bool,
    phase: TogglePhase,
}

impl MembershipToggle {
    /// Start from a confirmed membership.
    pub fn new(confirmed: bool) -> Self {
        Self {
            confirmed,
            phase: TogglePhase::Confirmed,
        }
    }

    /// Last membership the backend confirmed.
    pub fn confirmed_member(&self) -> bool {
        self.confirmed
    }

    /// Current phase.
    pub fn phase(&self) -> &TogglePhase {
        &self.phase
    }

    /// Whether a mutation is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, TogglePhase::Pending { .. })
    }

    /// Whether the last mutation failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.phase, TogglePhase::Failed { .. })
    }

    /// Membership to draw.
    pub fn displayed_member(&self) -> bool {
        match self.phase {
            TogglePhase::Pending { direction, .. } => direction.target_membership(),
            _ => self.confirmed,
        }
    }

    /// Adjustment of the set size implied by the optimistic display.
    pub fn count_delta(&self) -> i64 {
        i64::from(self.displayed_member()) - i64::from(self.confirmed)
    }

    /// Enter `Pending`. Rejected while another toggle is in flight.
    pub fn begin(&mut self, direction: Direction) -> Result<ToggleTicket, ChirpError> {
        if let TogglePhase::Pending {
            direction: current, ..
        } = self.phase
        {
            return Err(ChirpError::in_flight(format!(
                "{current:?} still pending, {direction:?} rejected"
            )));
        }
        let ticket = ToggleTicket::issue();
        self.phase = TogglePhase::Pending { direction, ticket };
        Ok(ticket)
    }

    /// Direction of the pending toggle if it was started with `ticket`.
    fn pending_for(&self, ticket: ToggleTicket) -> Option<Direction> {
        match self.phase {
            TogglePhase::Pending {
                direction,
                ticket: current,
            } if current == ticket => Some(direction),
            _ => None,
        }
    }

    /// The backend accepted the mutation started with `ticket`.
    ///
    /// Returns the confirmed direction, or `None` when that toggle is no
    /// longer pending.
    pub fn confirm(&mut self, ticket: ToggleTicket) -> Option<Direction> {
        let direction = self.pending_for(ticket)?;
        self.confirmed = direction.target_membership();
        self.phase = TogglePhase::Confirmed;
        Some(direction)
    }

    /// The backend rejected the mutation started with `ticket`; revert to the
    /// confirmed membership.
    pub fn fail(&mut self, ticket: ToggleTicket, reason: impl Into<String>) -> Option<Direction> {
        let direction = self.pending_for(ticket)?;
        self.phase = TogglePhase::Failed {
            direction,
            reason: reason.into(),
        };
        Some(direction)
    }

    /// Adopt membership from a fresh authoritative snapshot.
    ///
    /// A pending toggle stays pending; its outcome is decided by the
    /// mutation result, not by snapshot timing.
    pub fn sync(&mut self, member: bool) {
        self.confirmed = member;
        if !self.is_pending() {
            self.phase = TogglePhase::Confirmed;
        }
    }
}

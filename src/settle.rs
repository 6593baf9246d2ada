//! Deferred decisions waiting for the throw animation to settle

use crate::types::{DecisionToken, Direction};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDecision {
    pub direction: Direction,
    pub token: DecisionToken,
    pub due: Instant,
}

#[derive(Debug, Default)]
pub struct SettleQueue {
    pending: Vec<PendingDecision>,
}

impl SettleQueue {
    pub fn schedule(&mut self, direction: Direction, token: DecisionToken, now: Instant, delay: Duration) {
        self.pending.push(PendingDecision {
            direction,
            token,
            due: now + delay,
        });
    }

    /// Remove and return every decision due at `now`, oldest first
    pub fn drain_due(&mut self, now: Instant) -> Vec<PendingDecision> {
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| p.due);
        due
    }

    /// Time until the next decision fires, zero if one is already due
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due.saturating_duration_since(now))
            .min()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

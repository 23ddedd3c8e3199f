// crates/citygrid-core/src/generation.rs
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number tagging one issued search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(pub u64);

/// No request in flight.
const IDLE: u64 = 0;

/// Hands out monotonically increasing generations and decides which
/// response may be applied.
///
/// Only the most recently issued generation is ever accepted, and only once.
/// A response for an older generation is stale and must be dropped.
#[derive(Debug, Default)]
pub struct GenerationTracker {
    latest: AtomicU64,
    in_flight: AtomicU64,
}

impl GenerationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next generation; it supersedes every earlier one.
    pub fn issue(&self) -> Generation {
        let next = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        self.in_flight.store(next, Ordering::Release);
        Generation(next)
    }

    pub fn latest(&self) -> Option<Generation> {
        match self.latest.load(Ordering::Acquire) {
            IDLE => None,
            n => Some(Generation(n)),
        }
    }

    /// `true` while `generation` is the newest one and has not settled.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 != IDLE && self.in_flight.load(Ordering::Acquire) == generation.0
    }

    /// Claims the right to apply the response for `generation`.
    ///
    /// Succeeds at most once, and only for the newest generation.
    pub fn try_settle(&self, generation: Generation) -> bool {
        generation.0 != IDLE
            && self
                .in_flight
                .compare_exchange(generation.0, IDLE, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
    }

    /// Drops whatever is in flight; its response will be treated as stale.
    pub fn abandon(&self) {
        self.in_flight.store(IDLE, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_increase() {
        let t = GenerationTracker::new();
        assert_eq!(t.latest(), None);
        let a = t.issue();
        let b = t.issue();
        assert!(b > a);
        assert_eq!(t.latest(), Some(b));
    }

    #[test]
    fn only_latest_settles_once() {
        let t = GenerationTracker::new();
        let old = t.issue();
        let new = t.issue();
        assert!(!t.is_current(old));
        assert!(!t.try_settle(old));
        assert!(t.is_current(new));
        assert!(t.try_settle(new));
        assert!(!t.try_settle(new));
    }

    #[test]
    fn abandon_makes_in_flight_stale() {
        let t = GenerationTracker::new();
        let g = t.issue();
        t.abandon();
        assert!(!t.try_settle(g));
    }
}

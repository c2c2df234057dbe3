//! Lamport clock for mark creation order.
//!
//! Each replica owns one clock. Creating a mark ticks it; observing any mark
//! raises it to at least that mark's timestamp, so the next local mark sorts
//! after everything the replica has seen.
//!
//! # Examples
//!
//! ```
//! use weave_crdt::LamportClock;
//!
//! let mut a = LamportClock::new("A");
//! assert_eq!(a.tick(), Some(1));
//! assert_eq!(a.tick(), Some(2));
//!
//! let mut b = LamportClock::new("B");
//! b.observe_timestamp(a.now());
//! assert_eq!(b.tick(), Some(3));
//! ```

use tracing::trace;
use weave_core::ReplicaId;

use crate::mark::TimestampMark;

/// A per-replica Lamport clock. Starts at 0 and never decreases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LamportClock {
    replica_id: ReplicaId,
    timestamp: u64,
}

impl LamportClock {
    /// Create a clock at timestamp 0.
    pub fn new(replica_id: impl Into<ReplicaId>) -> Self {
        Self {
            replica_id: replica_id.into(),
            timestamp: 0,
        }
    }

    pub fn replica_id(&self) -> &ReplicaId {
        &self.replica_id
    }

    /// The highest timestamp created or observed so far.
    pub fn now(&self) -> u64 {
        self.timestamp
    }

    /// Advance by exactly one and return the new timestamp.
    ///
    /// `None` once the clock sits at `u64::MAX`; the clock is left unchanged.
    pub fn tick(&mut self) -> Option<u64> {
        let next = self.timestamp.checked_add(1)?;
        self.timestamp = next;
        Some(next)
    }

    /// Raise the clock to `timestamp` if it is ahead.
    pub fn observe_timestamp(&mut self, timestamp: u64) {
        if timestamp > self.timestamp {
            trace!(
                replica_id = %self.replica_id,
                from = self.timestamp,
                to = timestamp,
                "clock advanced by observed mark"
            );
            self.timestamp = timestamp;
        }
    }

    /// Raise the clock to the mark's timestamp. A no-op for marks this
    /// clock created itself.
    pub fn observe<A>(&mut self, mark: &TimestampMark<A>) {
        self.observe_timestamp(mark.timestamp());
    }
}


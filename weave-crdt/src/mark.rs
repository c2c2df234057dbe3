//! Timestamped marks and their total order.
//!
//! A mark is identified by `(creator_id, timestamp)`. Each replica's clock
//! only moves forward and replica ids are distinct, so that pair is unique
//! across every mark ever created. Ordering is timestamp first, then
//! creator id by byte order.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//! use serde_json::json;
//! use weave_crdt::{compare_marks, TimestampMark};
//!
//! let a = TimestampMark::new(0, 4, "bold", json!(true), "A", 1);
//! let b = TimestampMark::new(0, 4, "bold", json!(null), "B", 1);
//!
//! // Same timestamp: "A" < "B".
//! assert_eq!(compare_marks(&a, &b), Ordering::Less);
//! assert!(b.is_delete());
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use weave_core::{IOrderedMark, ReplicaId};

/// An immutable formatting operation over `[start, end]`.
///
/// `value == Value::Null` means "clear `key`". Equality, ordering and hashing
/// use only the `(timestamp, creator_id)` identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimestampMark<A> {
    start: A,
    end: A,
    key: String,
    value: Value,
    #[serde(rename = "creatorID")]
    creator_id: ReplicaId,
    timestamp: u64,
}

impl<A> TimestampMark<A> {
    /// Build a mark from all of its parts.
    ///
    /// Local marks come from `TimestampFormatting::create`; this is for marks
    /// received from other replicas or rebuilt from storage.
    pub fn new(
        start: A,
        end: A,
        key: impl Into<String>,
        value: Value,
        creator_id: impl Into<ReplicaId>,
        timestamp: u64,
    ) -> Self {
        Self {
            start,
            end,
            key: key.into(),
            value,
            creator_id: creator_id.into(),
            timestamp,
        }
    }

    pub fn start(&self) -> &A {
        &self.start
    }

    pub fn end(&self) -> &A {
        &self.end
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn creator_id(&self) -> &ReplicaId {
        &self.creator_id
    }

    /// Lamport timestamp. Always ≥ 1 for marks created by a clock.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// True when this mark deletes `key` from resolved formats.
    pub fn is_delete(&self) -> bool {
        self.value.is_null()
    }
}

/// Total order over marks: timestamp, then creator id (byte order).
///
/// Pure and replica-independent, so any two replicas holding the same marks
/// agree on their order.
pub fn compare_marks<A>(a: &TimestampMark<A>, b: &TimestampMark<A>) -> Ordering {
    a.timestamp
        .cmp(&b.timestamp)
        .then_with(|| a.creator_id.as_str().cmp(b.creator_id.as_str()))
}

impl<A> PartialEq for TimestampMark<A> {
    fn eq(&self, other: &Self) -> bool {
        compare_marks(self, other) == Ordering::Equal
    }
}

impl<A> Eq for TimestampMark<A> {}

impl<A> PartialOrd for TimestampMark<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for TimestampMark<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_marks(self, other)
    }
}

impl<A> Hash for TimestampMark<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp.hash(state);
        self.creator_id.hash(state);
    }
}

impl<A: Clone> IOrderedMark for TimestampMark<A> {
    type Anchor = A;

    fn start(&self) -> &A {
        &self.start
    }

    fn end(&self) -> &A {
        &self.end
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn value(&self) -> &Value {
        &self.value
    }

    fn compare(&self, other: &Self) -> Ordering {
        compare_marks(self, other)
    }
}

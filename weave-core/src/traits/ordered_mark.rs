use std::cmp::Ordering;

use serde_json::Value;

/// A range-tagged formatting operation with a total order.
///
/// Stores are generic over this capability: they read the range, key and
/// value, and use `compare` as their only sort order. Implementations must
/// make `compare` a strict total order that every replica evaluates the same
/// way, independent of arrival order or wall-clock time.
pub trait IOrderedMark: Clone {
    /// Opaque range endpoint, interpreted only by the store.
    type Anchor;

    fn start(&self) -> &Self::Anchor;
    fn end(&self) -> &Self::Anchor;
    fn key(&self) -> &str;
    fn value(&self) -> &Value;

    /// True when this mark clears `key` instead of setting it.
    fn is_delete(&self) -> bool {
        self.value().is_null()
    }

    /// Total order over marks. `Equal` only for the same mark identity.
    fn compare(&self, other: &Self) -> Ordering;
}

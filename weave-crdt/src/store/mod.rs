//! Mark stores.
//!
//! [`SortedMarkStore`] is the in-memory reference engine: it keeps the live
//! mark set in comparator order and nothing else. Engines that resolve
//! formats implement [`weave_core::IMarkStore`] themselves.

pub mod sorted_store;

pub use sorted_store::SortedMarkStore;

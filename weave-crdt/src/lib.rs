//! # weave-crdt
//!
//! Convergent ordering for formatting marks in collaborative text.
//!
//! Every mark carries a Lamport timestamp and its creator's replica id.
//! Replicas order marks by `(timestamp, creator_id)` with no coordination,
//! so any two replicas holding the same marks agree on their order and
//! resolve the same formatting.
//!
//! - [`LamportClock`] — per-replica counter; ticks on create, raises on observe
//! - [`TimestampMark`] — immutable mark; [`compare_marks`] is its total order
//! - [`SortedMarkStore`] — reference in-memory mark engine
//! - [`TimestampFormatting`] — clock + store: create, add, delete, save, load
//!
//! ## Guarantees
//!
//! 1. A created mark sorts after every mark its replica created or observed.
//! 2. `load(save())` leaves the marks and their order unchanged.
//! 3. After `load`, new marks sort after everything loaded.

pub mod clock;
pub mod formatting;
pub mod mark;
pub mod store;

// Re-export public API
pub use clock::LamportClock;
pub use formatting::TimestampFormatting;
pub use mark::{compare_marks, TimestampMark};
pub use store::SortedMarkStore;

//! # weave-core
//!
//! Foundation crate for Weave.
//! Defines the mark capability traits, replica identifiers, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClockConfig, LoadOrderPolicy, WeaveConfig};
pub use errors::{WeaveError, WeaveResult};
pub use models::ReplicaId;
pub use traits::{IMarkStore, IOrderedMark};

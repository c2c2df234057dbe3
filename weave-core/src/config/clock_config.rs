//! Configuration for a replica's Lamport clock.
//!
//! # Examples
//!
//! ```
//! use weave_core::config::{ClockConfig, LoadOrderPolicy};
//!
//! let config = ClockConfig::default();
//! assert!(config.replica_id.is_none());
//! assert_eq!(config.load_order, LoadOrderPolicy::Verify);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ReplicaId;

/// How `load` treats the ordering precondition on a saved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOrderPolicy {
    /// Reject a state that is not strictly ascending. Nothing is modified.
    Verify,
    /// Sort and deduplicate before loading.
    Sort,
    /// Assume the state is sorted. The clock is advanced from the last
    /// element, so an unsorted state restores a clock that may be too low.
    Trust,
}

impl Default for LoadOrderPolicy {
    fn default() -> Self {
        defaults::DEFAULT_LOAD_ORDER
    }
}

/// Per-replica clock settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Fixed replica id. `None` generates one per session.
    pub replica_id: Option<String>,
    /// Precondition handling for `load`. Default: verify.
    pub load_order: LoadOrderPolicy,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            replica_id: None,
            load_order: LoadOrderPolicy::default(),
        }
    }
}

impl ClockConfig {
    /// The configured replica id, or a freshly generated one.
    pub fn resolve_replica_id(&self) -> ReplicaId {
        match &self.replica_id {
            Some(id) => ReplicaId::new(id.clone()),
            None => ReplicaId::generate(),
        }
    }
}

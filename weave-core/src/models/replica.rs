//! Replica identifiers.
//!
//! # Examples
//!
//! ```
//! use weave_core::ReplicaId;
//!
//! let a = ReplicaId::new("alice");
//! assert_eq!(a.as_str(), "alice");
//!
//! let generated = ReplicaId::generate();
//! assert_ne!(generated, ReplicaId::generate());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of one replica. Used as the `creatorID` of every mark
/// the replica creates, and as the tie-breaker between equal timestamps.
///
/// Two live replicas must never share an id: marks would then collide on
/// `(creatorID, timestamp)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplicaId(String);

impl ReplicaId {
    /// Wrap a caller-chosen identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a collision-resistant identifier (UUID v4, simple form).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for ReplicaId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for ReplicaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReplicaId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ReplicaId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ReplicaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

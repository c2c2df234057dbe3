//! Value types shared across crates.

pub mod replica;

pub use replica::ReplicaId;

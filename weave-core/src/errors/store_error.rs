/// Errors raised while moving marks in or out of a store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A saved state was not strictly ascending under the mark order.
    /// `index` is the first element that does not sort after its predecessor.
    #[error("saved state is not sorted: element {index} does not follow its predecessor")]
    UnsortedState { index: usize },

    /// The replica's clock is at `u64::MAX`, so no new mark can sort after
    /// the marks it has observed.
    #[error("clock exhausted for replica {replica_id}: no timestamp after {timestamp}")]
    ClockExhausted { replica_id: String, timestamp: u64 },
}

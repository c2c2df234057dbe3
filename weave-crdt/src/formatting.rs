//! A replica's formatting session: a Lamport clock composed with a mark store.
//!
//! The session stamps new marks, observes every mark that enters the store,
//! and restores its clock from saved state so that a mark created after
//! `load` still sorts after everything loaded.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use weave_crdt::TimestampFormatting;
//!
//! let mut alice: TimestampFormatting<u32> = TimestampFormatting::new("alice");
//! let bold = alice.create(0, 5, "bold", json!(true)).unwrap();
//! alice.add_mark(bold.clone());
//!
//! let mut bob: TimestampFormatting<u32> = TimestampFormatting::new("bob");
//! bob.add_mark(bold.clone());
//! let unbold = bob.create(2, 3, "bold", json!(null)).unwrap();
//! assert!(unbold > bold);
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace, warn};
use weave_core::errors::StoreError;
use weave_core::{ClockConfig, IMarkStore, LoadOrderPolicy, ReplicaId, WeaveResult};

use crate::clock::LamportClock;
use crate::mark::{compare_marks, TimestampMark};
use crate::store::SortedMarkStore;

/// Lamport-ordered marks for one replica.
///
/// `S` is the engine the marks live in; it defaults to the in-memory
/// [`SortedMarkStore`]. Not thread-safe: share behind a lock if needed.
#[derive(Debug, Clone)]
pub struct TimestampFormatting<A, S = SortedMarkStore<TimestampMark<A>>> {
    clock: LamportClock,
    store: S,
    load_order: LoadOrderPolicy,
    _anchor: PhantomData<fn() -> A>,
}

impl<A, S> TimestampFormatting<A, S>
where
    A: Clone,
    S: IMarkStore<TimestampMark<A>> + Default,
{
    /// Empty session for `replica_id` with the default load policy.
    pub fn new(replica_id: impl Into<ReplicaId>) -> Self {
        Self::with_store(replica_id, S::default())
    }
}

impl<A, S> Default for TimestampFormatting<A, S>
where
    A: Clone,
    S: IMarkStore<TimestampMark<A>> + Default,
{
    /// Empty session with a generated replica id.
    fn default() -> Self {
        Self::new(ReplicaId::generate())
    }
}

impl<A, S> TimestampFormatting<A, S>
where
    A: Clone,
    S: IMarkStore<TimestampMark<A>>,
{
    /// Session over an existing store. Marks already in `store` are observed.
    pub fn with_store(replica_id: impl Into<ReplicaId>, store: S) -> Self {
        let mut clock = LamportClock::new(replica_id);
        for mark in store.iter() {
            clock.observe(mark);
        }
        Self {
            clock,
            store,
            load_order: LoadOrderPolicy::default(),
            _anchor: PhantomData,
        }
    }

    /// Session configured from `config`; generates a replica id if none is set.
    pub fn from_config(config: &ClockConfig, store: S) -> Self {
        Self::with_store(config.resolve_replica_id(), store).with_load_order(config.load_order)
    }

    /// Replace the load ordering policy.
    pub fn with_load_order(mut self, load_order: LoadOrderPolicy) -> Self {
        self.load_order = load_order;
        self
    }

    pub fn replica_id(&self) -> &ReplicaId {
        self.clock.replica_id()
    }

    /// Current Lamport timestamp.
    pub fn clock_value(&self) -> u64 {
        self.clock.now()
    }

    pub fn clock(&self) -> &LamportClock {
        &self.clock
    }

    pub fn load_order(&self) -> LoadOrderPolicy {
        self.load_order
    }

    /// Direct access to the engine for its own queries.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stamp a new mark. The clock ticks; the store is not touched.
    ///
    /// The mark compares greater than every mark created or observed so far.
    /// Fails with [`StoreError::ClockExhausted`] once the clock has reached
    /// `u64::MAX`.
    pub fn create(
        &mut self,
        start: A,
        end: A,
        key: impl Into<String>,
        value: Value,
    ) -> WeaveResult<TimestampMark<A>> {
        let Some(timestamp) = self.clock.tick() else {
            warn!(
                replica_id = %self.clock.replica_id(),
                timestamp = self.clock.now(),
                "clock exhausted"
            );
            return Err(StoreError::ClockExhausted {
                replica_id: self.clock.replica_id().to_string(),
                timestamp: self.clock.now(),
            }
            .into());
        };
        let mark = TimestampMark::new(
            start,
            end,
            key,
            value,
            self.clock.replica_id().clone(),
            timestamp,
        );
        trace!(
            replica_id = %self.clock.replica_id(),
            timestamp,
            key = mark.key(),
            "created mark"
        );
        Ok(mark)
    }

    /// Advance the clock past `mark` without storing it.
    pub fn observe(&mut self, mark: &TimestampMark<A>) {
        self.clock.observe(mark);
    }

    /// Merge a local or foreign mark: observe it, then store it.
    /// Returns `false` if the mark was already present.
    pub fn add_mark(&mut self, mark: TimestampMark<A>) -> bool {
        self.clock.observe(&mark);
        self.store.add_mark(mark)
    }

    /// Remove a mark from the live set. The clock is unchanged.
    pub fn delete_mark(&mut self, mark: &TimestampMark<A>) -> bool {
        self.store.delete_mark(mark)
    }

    /// Remove every mark. The clock is unchanged.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn contains(&self, mark: &TimestampMark<A>) -> bool {
        self.store.contains(mark)
    }

    /// Live marks, ascending.
    pub fn marks(&self) -> impl Iterator<Item = &TimestampMark<A>> + '_ {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// All live marks, ascending. This is the whole exported state; the
    /// clock is rebuilt from it on load.
    pub fn save(&self) -> Vec<TimestampMark<A>> {
        self.store.iter().cloned().collect()
    }

    /// Overwrite the local marks with `saved_state` and advance the clock to
    /// its greatest timestamp. An empty state clears the store and leaves the
    /// clock as is.
    ///
    /// The ordering precondition is handled per [`LoadOrderPolicy`]. Under
    /// `Verify`, an out-of-order state fails with
    /// [`StoreError::UnsortedState`] and nothing changes.
    pub fn load(&mut self, mut saved_state: Vec<TimestampMark<A>>) -> WeaveResult<()> {
        match self.load_order {
            LoadOrderPolicy::Verify => {
                if let Some(index) = first_out_of_order(&saved_state) {
                    warn!(
                        replica_id = %self.clock.replica_id(),
                        index,
                        "rejected unsorted saved state"
                    );
                    return Err(StoreError::UnsortedState { index }.into());
                }
            }
            LoadOrderPolicy::Sort => {
                saved_state.sort_by(compare_marks);
                saved_state.dedup_by(|a, b| compare_marks(a, b) == Ordering::Equal);
            }
            LoadOrderPolicy::Trust => {}
        }

        // Ascending order puts the maximum timestamp last.
        let last_timestamp = saved_state.last().map(TimestampMark::timestamp);
        let count = saved_state.len();
        self.store.replace_all(saved_state);
        if let Some(timestamp) = last_timestamp {
            self.clock.observe_timestamp(timestamp);
        }

        debug!(
            replica_id = %self.clock.replica_id(),
            count,
            clock = self.clock.now(),
            "loaded saved state"
        );
        Ok(())
    }
}

impl<A, S> TimestampFormatting<A, S>
where
    A: Clone + Serialize + DeserializeOwned,
    S: IMarkStore<TimestampMark<A>>,
{
    /// [`save`](Self::save) encoded as a JSON array.
    pub fn save_json(&self) -> WeaveResult<String> {
        Ok(serde_json::to_string(&self.save())?)
    }

    /// Decode a JSON array of marks and [`load`](Self::load) it.
    pub fn load_json(&mut self, json: &str) -> WeaveResult<()> {
        let saved_state: Vec<TimestampMark<A>> = serde_json::from_str(json)?;
        self.load(saved_state)
    }
}

/// Index of the first mark that does not sort strictly after its predecessor.
fn first_out_of_order<A>(marks: &[TimestampMark<A>]) -> Option<usize> {
    marks
        .windows(2)
        .position(|pair| compare_marks(&pair[0], &pair[1]) != Ordering::Less)
        .map(|i| i + 1)
}

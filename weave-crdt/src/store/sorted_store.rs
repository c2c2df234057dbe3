use std::cmp::Ordering;

use weave_core::{IMarkStore, IOrderedMark};

/// Marks held in a `Vec`, ascending under [`IOrderedMark::compare`].
///
/// Insert and delete are a binary search plus a shift. Iteration is the
/// saved-state order.
#[derive(Debug, Clone)]
pub struct SortedMarkStore<M> {
    marks: Vec<M>,
}

impl<M: IOrderedMark> SortedMarkStore<M> {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    fn position(&self, mark: &M) -> Result<usize, usize> {
        self.marks.binary_search_by(|probe| probe.compare(mark))
    }

    /// Marks for one format key, ascending.
    pub fn marks_for_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a M> + 'a {
        self.marks.iter().filter(move |m| m.key() == key)
    }

    /// The greatest mark for `key`, i.e. the one that wins wherever it
    /// covers. Range resolution is left to the engine.
    pub fn latest_for_key(&self, key: &str) -> Option<&M> {
        self.marks.iter().rev().find(|m| m.key() == key)
    }
}

impl<M: IOrderedMark> Default for SortedMarkStore<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: IOrderedMark> IMarkStore<M> for SortedMarkStore<M> {
    fn add_mark(&mut self, mark: M) -> bool {
        match self.position(&mark) {
            Ok(_) => false,
            Err(index) => {
                self.marks.insert(index, mark);
                true
            }
        }
    }

    fn delete_mark(&mut self, mark: &M) -> bool {
        match self.position(mark) {
            Ok(index) => {
                self.marks.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    // Lookups binary-search, so order is re-established here. Linear on
    // input that is already ascending.
    fn replace_all(&mut self, mut marks: Vec<M>) {
        marks.sort_by(|a, b| a.compare(b));
        marks.dedup_by(|a, b| a.compare(b) == Ordering::Equal);
        self.marks = marks;
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a M> + 'a
    where
        M: 'a,
    {
        self.marks.iter()
    }

    fn len(&self) -> usize {
        self.marks.len()
    }

    fn contains(&self, mark: &M) -> bool {
        self.position(mark).is_ok()
    }

    fn clear(&mut self) {
        self.marks.clear();
    }
}

use super::IOrderedMark;

/// The interval-marking engine a formatting session stores its marks in.
///
/// Implementations keep marks ordered by [`IOrderedMark::compare`] and are
/// free to resolve them into per-position formats however they like.
pub trait IMarkStore<M: IOrderedMark> {
    /// Insert one mark. Returns `false` if it was already present.
    fn add_mark(&mut self, mark: M) -> bool;

    /// Remove one mark. Returns `false` if it was not present.
    fn delete_mark(&mut self, mark: &M) -> bool;

    /// Drop every mark and insert `marks`, which are ascending under
    /// `compare` with no duplicates.
    fn replace_all(&mut self, marks: Vec<M>);

    /// All live marks in ascending order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a M> + 'a
    where
        M: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, mark: &M) -> bool;

    fn clear(&mut self) {
        self.replace_all(Vec::new());
    }
}

pub mod mark_store;
pub mod ordered_mark;

pub use mark_store::IMarkStore;
pub use ordered_mark::IOrderedMark;

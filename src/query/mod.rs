pub mod predicate;
pub mod sort;

pub use predicate::SongFilter;
pub use sort::{sort_results, Collation, SortKey};

//! Inverted index over a `RecordStore`
//!
//! Maps each token to the set of record ids whose text contains it. The index
//! is built once from a fully loaded store and never mutated afterwards.

mod inverted_index;

pub use inverted_index::{build_index, SearchIndex};

//! Boolean query resolution against a `SearchIndex`
//!
//! Three matching strategies are supported:
//! - `ALL`: records containing every query word (intersection)
//! - `ANY`: records containing at least one query word (union)
//! - `NONE`: records containing none of the query words (complement of ANY)

pub mod engine;
pub mod types;

pub use engine::QueryEngine;
pub use types::{MatchStrategy, NoneUniverse};

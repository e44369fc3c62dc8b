pub mod record;
pub mod search;

pub use record::{Record, RecordId, RecordStore};
pub use search::{SearchRequest, SearchResponse};

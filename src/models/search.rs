use serde::{Deserialize, Serialize};

use super::record::RecordId;
use crate::query::MatchStrategy;

/// Search request: a strategy tag and free-text query
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub strategy: String, // ALL, ANY or NONE, any case
    pub query: String,    // Tokenized like the records
}

impl SearchRequest {
    pub fn new(strategy: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            query: query.into(),
        }
    }
}

/// Matched record ids, ascending
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub strategy: MatchStrategy,
    pub record_ids: Vec<RecordId>,
}

impl SearchResponse {
    pub fn total_hits(&self) -> usize {
        self.record_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_ids.is_empty()
    }
}

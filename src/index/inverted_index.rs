use std::collections::HashMap;

use roaring::RoaringBitmap;
use tracing::debug;

use crate::models::{RecordId, RecordStore};
use crate::tokenizer::Tokenizer;

/// Read-only inverted index: token -> posting set of record ids
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchIndex {
    postings: HashMap<String, RoaringBitmap>,
    record_count: u32,
}

impl SearchIndex {
    /// Build the index from every record in `store`
    ///
    /// Repeated tokens within one record collapse into a single posting.
    pub fn build(store: &RecordStore, tokenizer: &Tokenizer) -> Self {
        let mut postings: HashMap<String, RoaringBitmap> = HashMap::new();

        for record in store {
            for token in tokenizer.tokenize(&record.text) {
                postings.entry(token).or_default().insert(record.id);
            }
        }

        let index = Self {
            postings,
            record_count: store.len() as u32,
        };
        debug!(
            records = index.record_count,
            terms = index.term_count(),
            "Built inverted index"
        );
        index
    }

    /// Posting set for a token, if any record contains it
    pub fn postings(&self, token: &str) -> Option<&RoaringBitmap> {
        self.postings.get(token)
    }

    pub fn contains_term(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    /// Number of distinct tokens
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of records in the store the index was built from
    pub fn record_count(&self) -> u32 {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.postings.keys().map(String::as_str)
    }

    /// Ids that appear in at least one posting set
    ///
    /// Records with no tokens (blank lines) are absent.
    pub fn indexed_records(&self) -> RoaringBitmap {
        self.postings
            .values()
            .fold(RoaringBitmap::new(), |mut acc, set| {
                acc |= set;
                acc
            })
    }

    /// Every id of the source store, `0..record_count`
    pub fn all_records(&self) -> RoaringBitmap {
        let mut all = RoaringBitmap::new();
        all.insert_range(0..self.record_count);
        all
    }

    pub fn is_valid_id(&self, id: RecordId) -> bool {
        id < self.record_count
    }
}

/// Build a `SearchIndex` from a loaded store
pub fn build_index(store: &RecordStore, tokenizer: &Tokenizer) -> SearchIndex {
    SearchIndex::build(store, tokenizer)
}

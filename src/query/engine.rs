//! Query engine - resolves ALL/ANY/NONE queries to record id sets

use roaring::RoaringBitmap;
use tracing::debug;

use crate::config::QueryConfig;
use crate::index::SearchIndex;
use crate::models::{SearchRequest, SearchResponse};
use crate::query::types::{MatchStrategy, NoneUniverse};
use crate::tokenizer::Tokenizer;
use crate::Result;

/// Read-only query engine borrowing a built index
///
/// Result bitmaps iterate in ascending record id order.
pub struct QueryEngine<'a> {
    index: &'a SearchIndex,
    tokenizer: Tokenizer,
    config: QueryConfig,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        Self::with_config(index, Tokenizer::default(), QueryConfig::default())
    }

    /// Create an engine with an explicit query tokenizer and configuration
    ///
    /// The tokenizer must match the one the index was built with.
    pub fn with_config(index: &'a SearchIndex, tokenizer: Tokenizer, config: QueryConfig) -> Self {
        Self {
            index,
            tokenizer,
            config,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        self.index
    }

    /// Resolve a strategy tag and already-normalized words
    ///
    /// Fails with `UnknownStrategy` for any tag other than ALL, ANY or NONE.
    pub fn resolve<S: AsRef<str>>(&self, strategy: &str, words: &[S]) -> Result<RoaringBitmap> {
        let strategy: MatchStrategy = strategy.parse()?;
        Ok(self.resolve_strategy(strategy, words))
    }

    /// Resolve a parsed strategy; total over all inputs
    pub fn resolve_strategy<S: AsRef<str>>(
        &self,
        strategy: MatchStrategy,
        words: &[S],
    ) -> RoaringBitmap {
        let result = match strategy {
            MatchStrategy::All => self.find_all(words),
            MatchStrategy::Any => self.find_any(words),
            MatchStrategy::None => self.find_none(words),
        };
        debug!(
            strategy = %strategy,
            words = words.len(),
            hits = result.len(),
            "Resolved query"
        );
        result
    }

    /// Tokenize the request query and resolve it
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let strategy: MatchStrategy = request.strategy.parse()?;
        let words = self.tokenizer.tokenize(&request.query);
        let hits = self.resolve_strategy(strategy, &words);

        Ok(SearchResponse {
            strategy,
            record_ids: hits.iter().collect(),
        })
    }

    /// Intersection of every word's posting set; empty for no words
    fn find_all<S: AsRef<str>>(&self, words: &[S]) -> RoaringBitmap {
        let mut result: Option<RoaringBitmap> = None;

        for word in words {
            let Some(postings) = self.index.postings(word.as_ref()) else {
                return RoaringBitmap::new();
            };
            let acc = match result {
                Some(r) => r & postings,
                None => postings.clone(),
            };

            // Early exit if no matches
            if acc.is_empty() {
                return acc;
            }
            result = Some(acc);
        }

        result.unwrap_or_default()
    }

    /// Union of posting sets; unknown words contribute nothing
    fn find_any<S: AsRef<str>>(&self, words: &[S]) -> RoaringBitmap {
        let mut result = RoaringBitmap::new();
        for postings in words.iter().filter_map(|w| self.index.postings(w.as_ref())) {
            result |= postings;
        }
        result
    }

    /// Universe minus the ANY matches
    fn find_none<S: AsRef<str>>(&self, words: &[S]) -> RoaringBitmap {
        let mut universe = match self.config.none_universe {
            NoneUniverse::Indexed => self.index.indexed_records(),
            NoneUniverse::AllRecords => self.index.all_records(),
        };
        universe -= self.find_any(words);
        universe
    }
}

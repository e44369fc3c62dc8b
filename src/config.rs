use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::query::NoneUniverse;

/// Tokenizer configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub lowercase: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

/// Query engine configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Set of record ids a NONE query subtracts from
    pub none_universe: NoneUniverse,
}

/// Top-level configuration for a search session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    pub data_path: PathBuf,
    pub tokenizer_config: TokenizerConfig,
    pub query_config: QueryConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data.txt"),
            tokenizer_config: TokenizerConfig::default(),
            query_config: QueryConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Create a configuration reading records from `data_path`
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Default::default()
        }
    }

    /// Set the universe used by NONE queries
    pub fn with_none_universe(mut self, universe: NoneUniverse) -> Self {
        self.query_config.none_universe = universe;
        self
    }

    /// Set the tokenizer configuration
    pub fn with_tokenizer_config(mut self, config: TokenizerConfig) -> Self {
        self.tokenizer_config = config;
        self
    }
}

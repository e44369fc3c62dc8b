pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod menu;
pub mod models;
pub mod query;
pub mod tokenizer;

pub use config::{QueryConfig, SearchConfig, TokenizerConfig};
pub use error::{Result, SearchError};
pub use index::{build_index, SearchIndex};
pub use models::*;
pub use query::{MatchStrategy, NoneUniverse, QueryEngine};
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

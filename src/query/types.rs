//! Query type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// How query words combine into a result set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStrategy {
    All,
    Any,
    None,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::All => "ALL",
            MatchStrategy::Any => "ANY",
            MatchStrategy::None => "NONE",
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = SearchError;

    /// Parse a strategy tag, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(MatchStrategy::All),
            "ANY" => Ok(MatchStrategy::Any),
            "NONE" => Ok(MatchStrategy::None),
            _ => Err(SearchError::UnknownStrategy(s.trim().to_string())),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of record ids that a NONE query subtracts matches from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoneUniverse {
    /// Ids present in at least one posting set; blank records never match
    #[default]
    Indexed,
    /// Every id of the record store, blank records included
    AllRecords,
}

impl FromStr for NoneUniverse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "indexed" => Ok(NoneUniverse::Indexed),
            "all-records" | "all_records" => Ok(NoneUniverse::AllRecords),
            other => Err(format!("unknown NONE universe '{}'", other)),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Position of a record in its store, 0-based
pub type RecordId = u32;

/// A single line of text loaded from the data source
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub text: String,
}

/// Ordered, immutable collection of records
///
/// Ids are assigned by position at construction, so `records[i].id == i`
/// always holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from lines, one record per line
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let records = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| Record {
                id: i as RecordId,
                text: line.into(),
            })
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id as usize)
    }

    /// Look up a record, failing if the id is out of range
    pub fn require(&self, id: RecordId) -> Result<&Record> {
        self.get(id).ok_or(SearchError::RecordNotFound(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

//! Line-oriented record loading

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::models::RecordStore;
use crate::Result;

/// Read one record per line, trimming surrounding whitespace
pub fn read_records<R: BufRead>(reader: R) -> Result<RecordStore> {
    let lines = reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect::<std::io::Result<Vec<String>>>()?;
    Ok(RecordStore::from_lines(lines))
}

/// Load records from a file
pub fn load_records(path: impl AsRef<Path>) -> Result<RecordStore> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let store = read_records(BufReader::new(file))?;
    debug!(path = %path.display(), records = store.len(), "Loaded records");
    Ok(store)
}

/// Load records, falling back to an empty store if the file can't be read
pub fn load_records_or_empty(path: impl AsRef<Path>) -> RecordStore {
    let path = path.as_ref();
    match load_records(path) {
        Ok(store) => store,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read data file");
            RecordStore::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_records_trims_lines() {
        let input = Cursor::new("  Dwight Joseph djo@gmail.com \nRene Webb\n\n");
        let store = read_records(input).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().text, "Dwight Joseph djo@gmail.com");
        assert_eq!(store.get(1).unwrap().text, "Rene Webb");
        assert_eq!(store.get(2).unwrap().text, "");
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Katie Jacobs").unwrap();
        writeln!(file, "Erick Harrington harrington@gmail.com").unwrap();

        let store = load_records(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().id, 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(load_records(&path).is_err());
        assert!(load_records_or_empty(&path).is_empty());
    }
}

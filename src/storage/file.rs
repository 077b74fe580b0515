//! Flat-file persistence
//!
//! Reads and writes the line-oriented user database. Every operation opens
//! the file, performs the read or write, and releases it before returning;
//! no handle is held across operations.

use log::warn;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::PersistenceError;
use crate::storage::records::UserRecord;

/// Load all records from `path`.
///
/// A missing file is not an error: it signals an empty store. Unparseable
/// lines are skipped with a warning.
pub fn load_records(path: &Path) -> Result<Vec<UserRecord>, PersistenceError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match UserRecord::parse(&line) {
            Some(record) => records.push(record),
            None => warn!("Skipping malformed record in {}: {:?}", path.display(), line),
        }
    }
    Ok(records)
}

/// Append a single record to `path`, creating the file if needed.
pub fn append_record(path: &Path, record: &UserRecord) -> Result<(), PersistenceError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", record.to_line())?;
    Ok(())
}

/// Rewrite `path` from scratch with every record, in iteration order.
pub fn rewrite_records<I>(path: &Path, records: I) -> Result<(), PersistenceError>
where
    I: IntoIterator<Item = UserRecord>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        writeln!(writer, "{}", record.to_line())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(name: &str) -> UserRecord {
        UserRecord {
            username: name.to_string(),
            password_digest: "12345".to_string(),
            security_question: "Favorite color?".to_string(),
            answer_digest: "67890".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let records = load_records(&dir.path().join("users.db")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_append_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.db");

        append_record(&path, &record("alice")).unwrap();
        append_record(&path, &record("bob")).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].username, "alice");
        assert_eq!(records[1].username, "bob");
    }

    #[test]
    fn test_rewrite_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.db");

        append_record(&path, &record("alice")).unwrap();
        append_record(&path, &record("bob")).unwrap();

        rewrite_records(&path, vec![record("carol")]).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].username, "carol");
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.db");

        std::fs::write(&path, "garbage\nalice 12345 Favorite color?|67890\n\n").unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].username, "alice");
    }
}

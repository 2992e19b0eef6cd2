//! CSV-backed feedback store.
//!
//! A single file holds one header row plus one data row per submission,
//! oldest first. Appends rewrite the whole file and there is no locking,
//! so the last writer wins under concurrent processes. A single active
//! writer is an assumption of this tool, not an enforced property.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use revu_core::FeedbackRecord;

/// Column order of the persisted file.
pub const HEADER: [&str; 6] = [
    "timestamp",
    "user_rating",
    "user_review",
    "ai_response",
    "ai_summary",
    "ai_action",
];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store read failed: {0}")]
    Read(String),

    #[error("store write failed: {0}")]
    Write(String),
}

/// Handle over the backing CSV file. Cheap to clone.
#[derive(Debug, Clone)]
pub struct FeedbackStore {
    path: PathBuf,
}

impl FeedbackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with the header row and zero records if it
    /// is absent. Idempotent; called on every process start.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        let mut writer =
            csv::Writer::from_path(&self.path).map_err(|e| StoreError::Write(e.to_string()))?;
        writer
            .write_record(HEADER)
            .map_err(|e| StoreError::Write(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        debug!(path = %self.path.display(), "created empty feedback store");
        Ok(())
    }

    /// All records, oldest first. Empty if the store has never been
    /// written. A file that exists but cannot be parsed is a read error,
    /// surfaced to the user rather than swallowed.
    pub fn read_all(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        let reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(e) => {
                if let csv::ErrorKind::Io(io) = e.kind() {
                    if io.kind() == ErrorKind::NotFound {
                        return Ok(Vec::new());
                    }
                }
                return Err(StoreError::Read(e.to_string()));
            }
        };

        let mut records = Vec::new();
        for row in reader.into_deserialize() {
            records.push(row.map_err(|e| StoreError::Read(e.to_string()))?);
        }
        Ok(records)
    }

    /// Append one record: load the current contents, add the record as the
    /// last row, write everything back.
    pub fn append(&self, record: &FeedbackRecord) -> Result<(), StoreError> {
        let mut records = self.read_all()?;
        records.push(record.clone());
        self.write_all(&records)?;
        debug!(path = %self.path.display(), total = records.len(), "appended feedback record");
        Ok(())
    }

    fn write_all(&self, records: &[FeedbackRecord]) -> Result<(), StoreError> {
        // Header is written explicitly so an empty store still carries it.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| StoreError::Write(e.to_string()))?;
        writer
            .write_record(HEADER)
            .map_err(|e| StoreError::Write(e.to_string()))?;
        for record in records {
            writer
                .serialize(record)
                .map_err(|e| StoreError::Write(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| StoreError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revu_core::Rating;

    fn record(rating: Rating, review: &str) -> FeedbackRecord {
        FeedbackRecord::new(rating, review, "a response", "a summary", "an action")
    }

    fn store_in(dir: &Path) -> FeedbackStore {
        FeedbackStore::new(dir.join("feedback_data.csv"))
    }

    #[test]
    fn ensure_exists_writes_header_only() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        store.ensure_exists().unwrap();
        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "timestamp,user_rating,user_review,ai_response,ai_summary,ai_action\n"
        );
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn ensure_exists_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        store.ensure_exists().unwrap();
        store.append(&record(Rating::Three, "fine")).unwrap();
        store.ensure_exists().unwrap();

        let records = store.read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].review, "fine");
    }

    #[test]
    fn append_then_read_single_record() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        store.ensure_exists().unwrap();

        let rec = record(Rating::Five, "loved it");
        store.append(&rec).unwrap();

        let records = store.read_all().unwrap();
        assert_eq!(records, vec![rec]);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        store.ensure_exists().unwrap();

        let reviews = ["first", "second", "third", "fourth", "fifth"];
        for review in reviews {
            store.append(&record(Rating::Two, review)).unwrap();
        }

        let read_back: Vec<String> = store
            .read_all()
            .unwrap()
            .into_iter()
            .map(|r| r.review)
            .collect();
        assert_eq!(read_back, reviews);
    }

    #[test]
    fn read_all_on_missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn quoted_fields_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        store.ensure_exists().unwrap();

        let rec = record(Rating::One, "line one,\nline \"two\", done");
        store.append(&rec).unwrap();

        let records = store.read_all().unwrap();
        assert_eq!(records[0].review, "line one,\nline \"two\", done");
    }

    #[test]
    fn unparseable_row_is_a_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        std::fs::write(
            store.path(),
            "timestamp,user_rating,user_review,ai_response,ai_summary,ai_action\n\
             2024-01-01T00:00:00Z,banana,review,a,b,c\n",
        )
        .unwrap();

        assert!(matches!(store.read_all(), Err(StoreError::Read(_))));
    }

    #[test]
    fn write_to_missing_directory_is_a_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FeedbackStore::new(tmp.path().join("no/such/dir/feedback.csv"));
        assert!(matches!(
            store.append(&record(Rating::Four, "x")),
            Err(StoreError::Write(_))
        ));
    }

    #[test]
    fn records_survive_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("feedback_data.csv");

        let first = FeedbackStore::new(&path);
        first.ensure_exists().unwrap();
        let rec_a = record(Rating::Four, "kept across restarts");
        let rec_b = record(Rating::One, "also kept");
        first.append(&rec_a).unwrap();
        first.append(&rec_b).unwrap();
        drop(first);

        let reopened = FeedbackStore::new(&path);
        assert_eq!(reopened.read_all().unwrap(), vec![rec_a, rec_b]);
    }
}

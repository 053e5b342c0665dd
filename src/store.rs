//! JSON-backed record stores.
//!
//! Persistence is deliberately coarse-grained: whole-collection read at
//! open, whole-collection rewrite after each mutation. A missing or
//! malformed file on load is an empty collection, never an error; a failed
//! write propagates. Single-writer only — concurrent writers would race.

use crate::error::Result;
use crate::record::ResumeRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default file name for the main record store.
pub const RESUMES_FILE: &str = "resumes.json";

/// Default file name for the hired-set store.
pub const HIRED_FILE: &str = "hired.json";

/// Loads a record list from disk, treating missing or corrupt data as empty.
pub fn load_records(path: &Path) -> Vec<ResumeRecord> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "malformed record store, treating as empty");
            Vec::new()
        }
    }
}

/// Rewrites the entire record list to disk as pretty-printed JSON.
pub fn save_records(path: &Path, records: &[ResumeRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Append-only store of all submitted resumes.
#[derive(Debug)]
pub struct ResumeStore {
    path: PathBuf,
    records: Vec<ResumeRecord>,
}

impl ResumeStore {
    /// Opens the store, loading existing records or starting empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load_records(&path);
        Self { path, records }
    }

    /// Appends a record and persists the whole collection.
    pub fn append(&mut self, record: ResumeRecord) -> Result<()> {
        self.records.push(record);
        save_records(&self.path, &self.records)
    }

    /// All records, in submission order.
    pub fn records(&self) -> &[ResumeRecord] {
        &self.records
    }

    /// Looks up a record by candidate identifier.
    pub fn find(&self, candidate_id: &str) -> Option<&ResumeRecord> {
        self.records
            .iter()
            .find(|r| r.candidate_id == candidate_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Copies of hired candidates, distinct from the main store and keyed by
/// candidate identifier. Mutated only by add-if-absent and clear-all.
#[derive(Debug)]
pub struct HiredSet {
    path: PathBuf,
    records: Vec<ResumeRecord>,
}

impl HiredSet {
    /// Opens the hired set, loading existing records or starting empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load_records(&path);
        Self { path, records }
    }

    /// Copies the record in if its candidate id is not already present.
    /// Returns `false` (without touching disk) when it already was.
    pub fn add_if_absent(&mut self, record: &ResumeRecord) -> Result<bool> {
        if self.contains(&record.candidate_id) {
            return Ok(false);
        }
        self.records.push(record.clone());
        save_records(&self.path, &self.records)?;
        Ok(true)
    }

    pub fn contains(&self, candidate_id: &str) -> bool {
        self.records.iter().any(|r| r.candidate_id == candidate_id)
    }

    /// Empties the set and overwrites the store with an empty list.
    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        save_records(&self.path, &self.records)
    }

    pub fn records(&self) -> &[ResumeRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> ResumeRecord {
        ResumeRecord {
            candidate_id: id.to_string(),
            original_text: "John Doe".to_string(),
            scrubbed_text: "[hidden name]".to_string(),
            markers_removed: 1,
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records = load_records(&dir.path().join("resumes.json"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resumes.json");
        fs::write(&path, "{not json at all").unwrap();
        assert!(load_records(&path).is_empty());
    }

    #[test]
    fn test_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RESUMES_FILE);

        let mut store = ResumeStore::open(&path);
        assert!(store.is_empty());
        store.append(sample("Candidate #AB12")).unwrap();
        store.append(sample("Candidate #CD34")).unwrap();

        let reopened = ResumeStore::open(&path);
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.records()[0].candidate_id, "Candidate #AB12");
        assert!(reopened.find("Candidate #CD34").is_some());
        assert!(reopened.find("Candidate #ZZ99").is_none());
    }

    #[test]
    fn test_persisted_wire_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RESUMES_FILE);

        let mut store = ResumeStore::open(&path);
        store.append(sample("Candidate #AB12")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"candidateId\": \"Candidate #AB12\""));
        assert!(raw.contains("\"markersRemoved\": 1"));
    }

    #[test]
    fn test_hired_add_if_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HIRED_FILE);

        let mut hired = HiredSet::open(&path);
        let record = sample("Candidate #AB12");

        assert!(hired.add_if_absent(&record).unwrap());
        assert!(!hired.add_if_absent(&record).unwrap());
        assert_eq!(hired.records().len(), 1);
        assert!(hired.contains("Candidate #AB12"));

        let reopened = HiredSet::open(&path);
        assert_eq!(reopened.records().len(), 1);
    }

    #[test]
    fn test_hired_clear_overwrites_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HIRED_FILE);

        let mut hired = HiredSet::open(&path);
        hired.add_if_absent(&sample("Candidate #AB12")).unwrap();
        hired.clear().unwrap();
        assert!(hired.is_empty());

        let reopened = HiredSet::open(&path);
        assert!(reopened.is_empty());
    }
}

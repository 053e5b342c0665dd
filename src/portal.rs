//! Reviewer-facing application state.
//!
//! [`Portal`] owns the two stores and exposes the submission pipeline plus
//! the employer-side operations (list, hire, wipe, metrics). State is
//! explicit: load at open, save after each mutation — there is no
//! framework-managed session behind it.

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::record::ResumeRecord;
use crate::redact::scrub;
use crate::store::{HiredSet, ResumeStore};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Aggregate counts over the record store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FairnessMetrics {
    /// Total candidates processed.
    pub total_resumes: usize,
    /// Sum of `markers_removed` across all candidates.
    pub total_markers_removed: u64,
    /// Mean markers removed per candidate (0.0 for an empty store).
    pub avg_markers_removed: f64,
}

/// Application state for one operator session.
#[derive(Debug)]
pub struct Portal {
    resumes: ResumeStore,
    hired: HiredSet,
}

impl Portal {
    /// Opens both stores, starting each as empty when its file is missing
    /// or unreadable.
    pub fn open(resume_path: impl AsRef<Path>, hired_path: impl AsRef<Path>) -> Self {
        Self {
            resumes: ResumeStore::open(resume_path.as_ref()),
            hired: HiredSet::open(hired_path.as_ref()),
        }
    }

    /// Runs the core pipeline on raw extracted text and persists the result.
    ///
    /// Normalizes, redacts with the optional literal `name`/`city`, assigns
    /// a fresh candidate identifier, and appends the record to the store.
    /// Empty input is processed rather than rejected — the returned record
    /// carries empty text and zero markers, and the caller should surface
    /// that to the operator.
    pub fn submit(
        &mut self,
        raw_text: &str,
        name: Option<&str>,
        city: Option<&str>,
    ) -> Result<ResumeRecord> {
        let original = normalize(raw_text);
        let (scrubbed, markers_removed) = scrub(&original, name, city);
        let record = ResumeRecord::new(original, scrubbed, markers_removed);
        debug!(candidate = %record.candidate_id, markers = markers_removed, "storing submission");
        self.resumes.append(record.clone())?;
        Ok(record)
    }

    /// All candidates, in submission order. Reviewers read `scrubbed_text`.
    pub fn candidates(&self) -> &[ResumeRecord] {
        self.resumes.records()
    }

    /// Looks up one candidate by identifier.
    pub fn find(&self, candidate_id: &str) -> Option<&ResumeRecord> {
        self.resumes.find(candidate_id)
    }

    /// Copies a candidate into the hired set, revealing the original text
    /// to reviewers. Returns `false` when already hired; an unknown
    /// identifier is an error.
    pub fn hire(&mut self, candidate_id: &str) -> Result<bool> {
        let record = self
            .resumes
            .find(candidate_id)
            .cloned()
            .ok_or_else(|| Error::UnknownCandidate(candidate_id.to_string()))?;
        self.hired.add_if_absent(&record)
    }

    /// Hired candidates.
    pub fn hired(&self) -> &[ResumeRecord] {
        self.hired.records()
    }

    pub fn is_hired(&self, candidate_id: &str) -> bool {
        self.hired.contains(candidate_id)
    }

    /// Clears the hired set.
    pub fn wipe_hired(&mut self) -> Result<()> {
        self.hired.clear()
    }

    /// Aggregate counts for the metrics dashboard.
    pub fn metrics(&self) -> FairnessMetrics {
        let total_resumes = self.resumes.len();
        let total_markers_removed: u64 = self
            .resumes
            .records()
            .iter()
            .map(|r| u64::from(r.markers_removed))
            .sum();
        let avg_markers_removed = if total_resumes == 0 {
            0.0
        } else {
            total_markers_removed as f64 / total_resumes as f64
        };
        FairnessMetrics {
            total_resumes,
            total_markers_removed,
            avg_markers_removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_portal(dir: &tempfile::TempDir) -> Portal {
        Portal::open(dir.path().join("resumes.json"), dir.path().join("hired.json"))
    }

    #[test]
    fn test_submit_normalizes_and_scrubs() {
        let dir = tempfile::tempdir().unwrap();
        let mut portal = open_portal(&dir);

        let record = portal
            .submit(
                "(cid:127)Jane Smith\njane@example.com",
                Some("Jane Smith"),
                None,
            )
            .unwrap();

        assert_eq!(record.original_text, "• Jane Smith\njane@example.com");
        assert_eq!(record.scrubbed_text, "• [hidden name]\n[hidden email]");
        assert_eq!(record.markers_removed, 2);
        assert_eq!(portal.candidates().len(), 1);
    }

    #[test]
    fn test_submit_empty_text_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut portal = open_portal(&dir);

        let record = portal.submit("", None, None).unwrap();
        assert_eq!(record.original_text, "");
        assert_eq!(record.scrubbed_text, "");
        assert_eq!(record.markers_removed, 0);
    }

    #[test]
    fn test_hire_copies_record_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut portal = open_portal(&dir);

        let record = portal.submit("text", None, None).unwrap();
        let id = record.candidate_id.clone();

        assert!(portal.hire(&id).unwrap());
        assert!(!portal.hire(&id).unwrap());
        assert!(portal.is_hired(&id));
        assert_eq!(portal.hired().len(), 1);
        // The main store keeps its own copy.
        assert_eq!(portal.candidates().len(), 1);
    }

    #[test]
    fn test_hire_unknown_candidate_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut portal = open_portal(&dir);

        let result = portal.hire("Candidate #ZZ99");
        assert!(matches!(result, Err(Error::UnknownCandidate(_))));
    }

    #[test]
    fn test_wipe_hired() {
        let dir = tempfile::tempdir().unwrap();
        let mut portal = open_portal(&dir);

        let record = portal.submit("text", None, None).unwrap();
        portal.hire(&record.candidate_id).unwrap();
        portal.wipe_hired().unwrap();

        assert!(portal.hired().is_empty());
        assert!(!portal.is_hired(&record.candidate_id));
    }

    #[test]
    fn test_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let mut portal = open_portal(&dir);

        assert_eq!(portal.metrics().total_resumes, 0);
        assert_eq!(portal.metrics().avg_markers_removed, 0.0);

        portal
            .submit("a@b.io and c@d.io", None, None)
            .unwrap();
        portal.submit("no markers", None, None).unwrap();

        let metrics = portal.metrics();
        assert_eq!(metrics.total_resumes, 2);
        assert_eq!(metrics.total_markers_removed, 2);
        assert!((metrics.avg_markers_removed - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut portal = open_portal(&dir);
            let record = portal.submit("jane@example.com", None, None).unwrap();
            portal.hire(&record.candidate_id).unwrap();
            record.candidate_id
        };

        let portal = open_portal(&dir);
        assert_eq!(portal.candidates().len(), 1);
        assert!(portal.is_hired(&id));
    }
}

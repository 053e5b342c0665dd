//! # fairhire
//!
//! A resume anonymization library. Raw text extracted from a resume
//! document is normalized (extraction artifacts repaired, whitespace
//! canonicalized), then run through an ordered sequence of redaction
//! passes that replace identity markers — name, city, emails, phone
//! numbers, street addresses, school names, profile links, postal codes —
//! with bracketed placeholder tokens. Both the original and the scrubbed
//! text are recorded under a generated pseudonymous candidate identifier.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fairhire::Portal;
//!
//! fn main() -> fairhire::Result<()> {
//!     let text = fairhire::extract_pdf_text("resume.pdf")?;
//!
//!     let mut portal = Portal::open("resumes.json", "hired.json");
//!     let record = portal.submit(&text, Some("Jane Smith"), Some("Boston"))?;
//!
//!     println!("{}: {} markers removed", record.candidate_id, record.markers_removed);
//!     println!("{}", record.scrubbed_text);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! raw extracted text → [`normalize`] → stored as original, and →
//! [`scrub`] → scrubbed text + marker count. [`Portal::submit`] runs the
//! whole pipeline and persists one [`ResumeRecord`]. The pipeline is
//! synchronous and single-operator; stores are whole-file read/rewrite.

pub mod error;
pub mod extract;
pub mod normalize;
pub mod portal;
pub mod record;
pub mod redact;
pub mod store;

// Re-exports
pub use error::{Error, Result};
pub use extract::{extract_pdf_text, join_pages};
pub use normalize::normalize;
pub use portal::{FairnessMetrics, Portal};
pub use record::{generate_candidate_id, ResumeRecord};
pub use redact::scrub;
pub use store::{HiredSet, ResumeStore, HIRED_FILE, RESUMES_FILE};

/// Runs the core pipeline on raw extracted text without touching storage.
///
/// Convenience for callers that manage persistence themselves; equivalent
/// to what [`Portal::submit`] records.
pub fn process_resume(raw_text: &str, name: Option<&str>, city: Option<&str>) -> ResumeRecord {
    let original = normalize(raw_text);
    let (scrubbed, markers_removed) = scrub(&original, name, city);
    ResumeRecord::new(original, scrubbed, markers_removed)
}

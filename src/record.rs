//! Candidate records and pseudonymous identifiers.

use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_PREFIX: &str = "Candidate #";
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ID_SUFFIX_LEN: usize = 4;

/// One submitted resume: normalized original, scrubbed derivation, and the
/// pseudonymous identifier that joins the record store and the hired set.
///
/// Records are created once by the pipeline and never mutated; the reviewer
/// surface only reads them or copies them wholesale into the hired set.
/// Serialized field names are the store's wire format (`candidateId` etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    /// Opaque pseudonymous identifier, generated independently of content.
    pub candidate_id: String,
    /// Normalized, non-redacted extracted text.
    pub original_text: String,
    /// Normalized, redacted text derived from `original_text`.
    pub scrubbed_text: String,
    /// Number of redaction substitutions applied across all passes.
    pub markers_removed: u32,
}

impl ResumeRecord {
    /// Creates a record with a freshly generated candidate identifier.
    pub fn new(original_text: String, scrubbed_text: String, markers_removed: u32) -> Self {
        Self {
            candidate_id: generate_candidate_id(),
            original_text,
            scrubbed_text,
            markers_removed,
        }
    }
}

/// Generates a pseudonymous candidate identifier: the literal prefix
/// `"Candidate #"` followed by 4 characters drawn uniformly from uppercase
/// letters and digits. Collisions are treated as acceptably rare and are
/// not guarded against.
pub fn generate_candidate_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", ID_PREFIX, suffix)
}

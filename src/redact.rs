//! # Redactor
//!
//! Ordered, regex-driven redaction of identity markers. Each pass replaces
//! one PII category with a bracketed placeholder token and reports how many
//! spans it replaced; the orchestrator sums the per-pass counts.
//!
//! Pass order is the de facto overlap tie-break: the literal name and city
//! run first, then the pattern categories. A later pass never re-matches
//! text an earlier pass replaced, because placeholders contain no digits,
//! `@` signs, or URLs. The ordering is load-bearing — a city like "Boston"
//! is replaced inside "Boston University" before the school pass sees it,
//! leaving "[hidden location] University" for the school pass to finish.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b").unwrap());

// North-American-style 10-digit numbers with optional country code and
// parenthesized area code. Purely numeric, so no case folding.
static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,2}[\s.-]?)?(\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4})").unwrap()
});

// House number, 1-4 word tokens, then a street-type word from a closed set.
static RE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d{1,5}\s+\w+(?:\s+\w+){0,3}\s+(Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr)\b",
    )
    .unwrap()
});

static RE_PROFILE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S*linkedin\.com\S*").unwrap());

static RE_ZIPCODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{5}(?:-\d{4})?\b").unwrap());

/// School terms, multi-word terms first so "High School" is consumed as a
/// whole before the bare "School"-free terms run.
const SCHOOL_TERMS: &[&str] = &[
    "High School",
    "Middle School",
    "Elementary School",
    "University",
    "College",
    "Academy",
    "Institute",
];

static RE_SCHOOLS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SCHOOL_TERMS
        .iter()
        .map(|term| {
            RegexBuilder::new(&regex::escape(term))
                .case_insensitive(true)
                .build()
                .unwrap()
        })
        .collect()
});

/// Redacts identity markers from normalized resume text.
///
/// `name` and `city` are treated as literal strings (regex metacharacters
/// are escaped) and matched case-insensitively; empty or absent values skip
/// those passes silently. Returns the scrubbed text together with the total
/// number of non-overlapping spans replaced across all passes.
///
/// # Example
///
/// ```
/// use fairhire::scrub;
///
/// let (text, count) = scrub("Reach me at jane@example.com", None, None);
/// assert_eq!(text, "Reach me at [hidden email]");
/// assert_eq!(count, 1);
/// ```
pub fn scrub(text: &str, name: Option<&str>, city: Option<&str>) -> (String, u32) {
    let mut result = text.to_string();
    let mut markers_removed = 0u32;

    if let Some(pattern) = literal_pattern(name) {
        let (next, spans) = substitute(&result, &pattern, "[hidden name]");
        result = next;
        markers_removed += spans;
    }
    if let Some(pattern) = literal_pattern(city) {
        let (next, spans) = substitute(&result, &pattern, "[hidden location]");
        result = next;
        markers_removed += spans;
    }

    for (pattern, placeholder) in [
        (&*RE_EMAIL, "[hidden email]"),
        (&*RE_PHONE, "[hidden phone]"),
        (&*RE_ADDRESS, "[hidden address]"),
    ] {
        let (next, spans) = substitute(&result, pattern, placeholder);
        result = next;
        markers_removed += spans;
    }

    for pattern in RE_SCHOOLS.iter() {
        let (next, spans) = substitute(&result, pattern, "[hidden school]");
        result = next;
        markers_removed += spans;
    }

    for (pattern, placeholder) in [
        (&*RE_PROFILE_LINK, "[hidden profile link]"),
        (&*RE_ZIPCODE, "[hidden zipcode]"),
    ] {
        let (next, spans) = substitute(&result, pattern, placeholder);
        result = next;
        markers_removed += spans;
    }

    (result, markers_removed)
}

/// Single redaction pass: replaces every non-overlapping match with the
/// placeholder and returns the rewritten text plus the span count.
fn substitute(text: &str, pattern: &Regex, placeholder: &str) -> (String, u32) {
    let spans = pattern.find_iter(text).count() as u32;
    if spans == 0 {
        return (text.to_string(), 0);
    }
    let replaced = pattern.replace_all(text, regex::NoExpand(placeholder));
    (replaced.into_owned(), spans)
}

/// Compiles a user-supplied literal into a case-insensitive pattern, or
/// `None` when the value is absent or blank.
fn literal_pattern(value: Option<&str>) -> Option<Regex> {
    let value = value?;
    if value.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(value))
        .case_insensitive(true)
        .build()
        .ok()
}

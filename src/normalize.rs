//! # Text Normalizer
//!
//! Repairs known extraction artifacts and collapses redundant whitespace
//! into a canonical display form. The same normalized text is used both as
//! the stored "original" and as the redactor's input.
//!
//! Rules run in a fixed order because later rules assume earlier cleanup:
//!
//! 1. Unicode NFC + control-character removal
//! 2. `(cid:NNN)` glyph markers -> visible bullet
//! 3. digit-`n`-digit corruption -> digit-hyphen-digit
//! 4. Runs of spaces/tabs -> single space
//! 5. Three or more newlines -> exactly two
//!
//! The function is pure and idempotent: no rule's output re-matches its own
//! trigger pattern.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

// Bracketed character-code markers emitted by extractors for glyphs they
// cannot map (most commonly bullet characters in resume lists).
static RE_CID_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(cid:\d+\)").unwrap());

// A hyphen between two digits (date ranges like "2019-2023") sometimes
// comes back from extraction as the letter 'n'.
static RE_BROKEN_RANGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)n(\d)").unwrap());

static RE_HORIZONTAL_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

static RE_EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalizes raw extracted text into its canonical form.
///
/// # Example
///
/// ```
/// use fairhire::normalize;
///
/// let raw = "(cid:127)Led team\n\n\n\nWorked   2019n2023";
/// assert_eq!(normalize(raw), "• Led team\n\nWorked 2019-2023");
/// ```
pub fn normalize(input: &str) -> String {
    let text = strip_control_chars(input);
    let text = RE_CID_MARKER.replace_all(&text, "• ");
    let text = RE_BROKEN_RANGE.replace_all(&text, "${1}-${2}");
    let text = RE_HORIZONTAL_WS.replace_all(&text, " ");
    RE_EXCESS_NEWLINES.replace_all(&text, "\n\n").into_owned()
}

/// NFC normalization plus removal of control artifacts extraction leaves
/// behind. Identity on plain ASCII input.
fn strip_control_chars(input: &str) -> String {
    input.nfc().filter(|c| !is_control_char(*c)).collect()
}

fn is_control_char(c: char) -> bool {
    matches!(
        c,
        '\0'        // Null
        | '\x0B'    // Vertical Tab
        | '\x0C'    // Form Feed
        | '\u{FEFF}' // BOM
        | '\u{FFFD}' // Replacement character
        | '\u{00AD}' // Soft hyphen
    )
}

//! PDF text extraction boundary.
//!
//! The core pipeline only needs a sequence of per-page plain-text strings;
//! everything PDF-specific stays behind [`extract_pdf_text`]. Pages that
//! yield no text are skipped, never an error — a fully empty document comes
//! back as an empty string and the caller decides how loudly to complain.

use crate::error::{Error, Result};
use lopdf::Document;
use std::path::Path;
use tracing::{debug, warn};

/// Concatenates per-page text with a newline separator, skipping pages
/// that yielded nothing.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }
    text
}

/// Extracts plain text from a PDF file, page by page.
///
/// A page that fails extraction is skipped with a warning; a document that
/// cannot be opened at all is an [`Error::Pdf`]. A missing path is reported
/// as [`Error::MissingInput`] since that is an operator mistake, not a
/// system failure.
pub fn extract_pdf_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingInput(format!(
            "no such file: {}",
            path.display()
        )));
    }

    let document = Document::load(path)?;
    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    debug!(path = %path.display(), pages = page_numbers.len(), "extracting text");

    let mut pages = Vec::with_capacity(page_numbers.len());
    for number in page_numbers {
        match document.extract_text(&[number]) {
            Ok(text) => pages.push(text),
            Err(err) => {
                warn!(page = number, error = %err, "skipping page with no extractable text");
                pages.push(String::new());
            }
        }
    }

    let text = join_pages(&pages);
    if text.is_empty() {
        warn!(path = %path.display(), "document yielded no extractable text");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_join_pages_skips_empty_pages() {
        let pages = ["Page one", "", "   \t ", "Page two"];
        assert_eq!(join_pages(pages), "Page one\nPage two\n");
    }

    #[test]
    fn test_join_pages_all_empty() {
        let pages: [&str; 3] = ["", "", ""];
        assert_eq!(join_pages(pages), "");
    }

    #[test]
    fn test_join_pages_none() {
        let pages: [&str; 0] = [];
        assert_eq!(join_pages(pages), "");
    }

    #[test]
    fn test_missing_file_is_missing_input() {
        let result = extract_pdf_text("/definitely/not/a/real/file.pdf");
        assert!(matches!(result, Err(Error::MissingInput(_))));
    }

    #[test]
    fn test_unreadable_document_is_pdf_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let result = extract_pdf_text(file.path());
        assert!(matches!(result, Err(Error::Pdf(_))));
    }
}

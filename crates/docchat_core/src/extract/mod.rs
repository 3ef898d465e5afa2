use crate::error::AppError;

mod pdf;

pub use pdf::extract_pdf_pages;

/// Returned for inputs that cannot be decoded as text at all.
pub const UNSUPPORTED_FORMAT_PLACEHOLDER: &str = "[Binary or unsupported file format]";

pub fn is_pdf(filename: &str) -> bool {
    filename.to_ascii_lowercase().ends_with(".pdf")
}

/// Extract raw (un-normalized) text, reporting failures as typed errors.
pub fn try_extract(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    if is_pdf(filename) {
        let pages = extract_pdf_pages(bytes)?;
        let mut text = String::new();
        for page in pages {
            text.push_str(&page);
            text.push('\n');
        }
        return Ok(text);
    }
    Ok(decode_utf8_dropping_invalid(bytes))
}

/// Extract and normalize text. Never fails: extraction errors become a
/// placeholder string that is chunked and searched like any other content.
pub fn extract_text(filename: &str, bytes: &[u8]) -> String {
    let raw = match try_extract(filename, bytes) {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(filename, code = %e.code, "extraction degraded to placeholder");
            placeholder_for(&e)
        }
    };
    normalize_whitespace(&raw)
}

fn placeholder_for(err: &AppError) -> String {
    match err.code.as_str() {
        "EXTRACT_PDF_FAILED" => format!("[Error reading PDF: {}]", err.detail_or_message()),
        _ => UNSUPPORTED_FORMAT_PLACEHOLDER.to_string(),
    }
}

/// Decode as UTF-8, skipping byte sequences that are not valid UTF-8.
pub fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Collapse every whitespace run to one space and trim both ends.
///
/// Whitespace is Unicode `White_Space`; the ASCII separators U+001C..U+001F
/// are not whitespace and survive.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_detection_ignores_case() {
        assert!(is_pdf("report.PDF"));
        assert!(is_pdf("a.b.pdf"));
        assert!(!is_pdf("pdf.txt"));
        assert!(!is_pdf("notes"));
    }

    #[test]
    fn invalid_utf8_bytes_are_dropped_not_replaced() {
        let bytes = b"caf\xC3\xA9 \xFF\xFEok";
        assert_eq!(decode_utf8_dropping_invalid(bytes), "caf\u{e9} ok");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize_whitespace("  a\t\tb\n\n c  "), "a b c");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }
}

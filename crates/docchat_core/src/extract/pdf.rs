use std::panic::{catch_unwind, AssertUnwindSafe};

use lopdf::Document;

use crate::error::AppError;

/// Text of every page in page order.
pub fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<String>, AppError> {
    // Malformed input can panic inside the parser; treat that like a parse error.
    catch_unwind(AssertUnwindSafe(|| read_pages(bytes))).unwrap_or_else(|_| {
        Err(AppError::new("EXTRACT_PDF_FAILED", "Failed to read PDF")
            .with_details("parser panicked on malformed input"))
    })
}

fn read_pages(bytes: &[u8]) -> Result<Vec<String>, AppError> {
    let doc = Document::load_mem(bytes).map_err(|e| {
        AppError::new("EXTRACT_PDF_FAILED", "Failed to parse PDF").with_details(e.to_string())
    })?;

    let mut pages = Vec::new();
    for page_number in doc.get_pages().keys() {
        let text = doc.extract_text(&[*page_number]).map_err(|e| {
            AppError::new("EXTRACT_PDF_FAILED", "Failed to extract PDF page text")
                .with_details(format!("page={page_number}; err={e}"))
        })?;
        pages.push(text);
    }
    Ok(pages)
}

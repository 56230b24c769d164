//! PDF résumé text extraction.
//!
//! `pdf-extract` is CPU-bound and synchronous, so it runs under `spawn_blocking`.

use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::IngestError;

/// Accepts `.pdf` only, case-insensitively.
pub fn is_pdf_filename(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Text used in place of an extraction that produced nothing.
pub fn empty_text_placeholder(filename: &str) -> String {
    format!("Error: No text could be extracted from {filename}")
}

/// Extracts the text layer of an uploaded PDF.
pub async fn extract_pdf_text(filename: &str, data: Bytes) -> Result<String, IngestError> {
    if !is_pdf_filename(filename) {
        return Err(IngestError::UnsupportedFileType(filename.to_string()));
    }
    if data.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    let pdf_error = |reason: String| IngestError::Pdf {
        file: filename.to_string(),
        reason,
    };

    // The parser can panic on malformed documents.
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            if e.is_panic() {
                pdf_error("parser panicked on malformed document".to_string())
            } else {
                IngestError::Task(e)
            }
        })?
        .map_err(|e| pdf_error(e.to_string()))?;

    if text.trim().is_empty() {
        warn!(file = filename, "PDF produced no text");
        return Ok(empty_text_placeholder(filename));
    }

    info!(file = filename, chars = text.len(), "Extracted PDF text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_check() {
        assert!(is_pdf_filename("resume.pdf"));
        assert!(is_pdf_filename("Resume.PDF"));
        assert!(!is_pdf_filename("resume.docx"));
        assert!(!is_pdf_filename("pdf"));
    }

    #[test]
    fn test_placeholder_names_file() {
        assert_eq!(
            empty_text_placeholder("cv.pdf"),
            "Error: No text could be extracted from cv.pdf"
        );
    }

    #[tokio::test]
    async fn test_rejects_non_pdf() {
        let err = extract_pdf_text("notes.txt", Bytes::from_static(b"hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFileType(_)));
    }

    #[tokio::test]
    async fn test_rejects_empty_upload() {
        let err = extract_pdf_text("cv.pdf", Bytes::new()).await.unwrap_err();
        assert!(matches!(err, IngestError::EmptyFile));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_an_ingest_error() {
        let err = extract_pdf_text("cv.pdf", Bytes::from_static(b"not a pdf at all"))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::Pdf { .. }));
    }
}

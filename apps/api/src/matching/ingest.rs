//! Résumé ingest — thin wrapper around PDF text extraction.

use crate::errors::AppError;

/// Pulls the text out of an uploaded PDF. Extraction runs straight from
/// the uploaded bytes; nothing touches the filesystem. A document with no
/// extractable text maps to `UnreadableDocument`.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(data).map_err(|e| {
        tracing::warn!("PDF extraction failed: {e}");
        AppError::UnreadableDocument
    })?;

    if text.trim().is_empty() {
        return Err(AppError::UnreadableDocument);
    }

    Ok(text)
}

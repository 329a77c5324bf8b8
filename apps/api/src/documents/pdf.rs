use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracts the plain text of every page of a PDF, in page order, joined with `\n`.
///
/// Decoding is CPU-bound and may panic on hostile input, so it runs on the blocking pool.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let size = data.len();
    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&data)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
    .map_err(|e| AppError::Pdf(e.to_string()))?;

    let text = pages.join("\n");
    debug!(
        "Extracted {} chars from {} page(s) ({} bytes)",
        text.len(),
        pages.len(),
        size
    );
    Ok(text)
}

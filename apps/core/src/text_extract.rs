//! Text extraction module for uploaded exam papers
//! Supports: PDF

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::AppError;

/// Defines the interface of a document-to-text backend.
///
/// Implementations return the text of each page in order, with an empty
/// string for pages that carry no extractable text.
pub trait TextExtractor: Send + Sync + 'static {
    fn extract_pages(&self, file_data: &[u8]) -> Result<Vec<String>, AppError>;

    /// Cheap page count read before extraction, if the backend can provide one
    fn count_pages(&self, _file_data: &[u8]) -> Result<Option<usize>, AppError> {
        Ok(None)
    }
}

/// PDF backend built on `pdf-extract`
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_pages(&self, file_data: &[u8]) -> Result<Vec<String>, AppError> {
        info!("Extracting text from PDF ({} bytes)...", file_data.len());

        match pdf_extract::extract_text_from_mem_by_pages(file_data) {
            Ok(pages) => {
                let pages: Vec<String> =
                    pages.iter().map(|page| clean_extracted_text(page)).collect();
                info!("PDF extraction successful: {} page(s)", pages.len());
                Ok(pages)
            }
            Err(e) => {
                warn!("PDF extraction failed: {}", e);
                Err(AppError::Extraction(e.to_string()))
            }
        }
    }

    fn count_pages(&self, file_data: &[u8]) -> Result<Option<usize>, AppError> {
        let document = lopdf::Document::load_mem(file_data).map_err(|e| {
            warn!("PDF could not be parsed: {}", e);
            AppError::Extraction(e.to_string())
        })?;
        Ok(Some(document.get_pages().len()))
    }
}

/// Limits applied around a single extraction
#[derive(Debug, Clone, Copy)]
pub struct ExtractionLimits {
    pub max_bytes: usize,
    pub max_pages: usize,
    pub timeout: Duration,
}

/// Whether the uploaded file name ends in `.pdf`, ignoring case
pub fn is_pdf_file_name(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".pdf")
}

fn check_page_count(pages: usize, max_pages: usize) -> Result<(), AppError> {
    if pages > max_pages {
        warn!("Rejecting PDF with {} pages (limit {})", pages, max_pages);
        return Err(AppError::Validation(format!(
            "PDF has too many pages: {} (limit {})",
            pages, max_pages
        )));
    }
    Ok(())
}

/// Clean up extracted text
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Concatenate page texts in page order
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}

/// Run the extractor on the blocking pool under the configured limits and
/// return the full document text.
pub async fn extract_document_text(
    extractor: Arc<dyn TextExtractor>,
    file_data: Vec<u8>,
    limits: ExtractionLimits,
) -> Result<String, AppError> {
    if file_data.len() > limits.max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File too large: {} bytes (limit {} bytes)",
            file_data.len(),
            limits.max_bytes
        )));
    }

    let max_pages = limits.max_pages;
    let task = tokio::task::spawn_blocking(move || {
        if let Some(count) = extractor.count_pages(&file_data)? {
            check_page_count(count, max_pages)?;
        }
        let pages = extractor.extract_pages(&file_data)?;
        check_page_count(pages.len(), max_pages)?;
        Ok::<_, AppError>(pages)
    });
    let pages = tokio::time::timeout(limits.timeout, task).await???;

    Ok(join_pages(&pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_file_name() {
        assert!(is_pdf_file_name("paper.pdf"));
        assert!(is_pdf_file_name("PAPER.PDF"));
        assert!(is_pdf_file_name("os.2023.final.pdf"));
        assert!(!is_pdf_file_name("notes.txt"));
        assert!(is_pdf_file_name(".pdf"));
        assert!(!is_pdf_file_name("pdf"));
        assert!(!is_pdf_file_name("paper.pdf.txt"));
        assert!(!is_pdf_file_name(""));
    }

    #[test]
    fn test_page_count_limit() {
        assert!(check_page_count(3, 3).is_ok());
        assert!(matches!(
            check_page_count(4, 3),
            Err(AppError::Validation(msg)) if msg.contains("too many pages")
        ));
    }

    #[test]
    fn test_clean_extracted_text() {
        let dirty = "  Line 1  \n\n  Line 2  \n   \n  Line 3  ";
        let cleaned = clean_extracted_text(dirty);
        assert_eq!(cleaned, "Line 1\nLine 2\nLine 3");
    }

    #[test]
    fn test_invalid_pdf_is_extraction_error() {
        let result = PdfTextExtractor::new().extract_pages(b"definitely not a pdf");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}

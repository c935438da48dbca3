//! Text Extraction Module Tests
//!
//! Exercises the extraction guards with stand-in extractors.

use crate::error::AppError;
use crate::text_extract::{self, ExtractionLimits, PdfTextExtractor, TextExtractor};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

/// Build an in-memory PDF with one line of text per page
fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

const EXAM_PAGES: &[&str] = &[
    "Explain page number 1",
    "Explain page number 2",
    "Explain page number 3",
];

/// Returns a fixed set of pages
struct StaticExtractor(Vec<&'static str>);

impl TextExtractor for StaticExtractor {
    fn extract_pages(&self, _file_data: &[u8]) -> Result<Vec<String>, AppError> {
        Ok(self.0.iter().map(|p| p.to_string()).collect())
    }
}

/// Blocks longer than any test timeout
struct SlowExtractor;

impl TextExtractor for SlowExtractor {
    fn extract_pages(&self, _file_data: &[u8]) -> Result<Vec<String>, AppError> {
        std::thread::sleep(Duration::from_millis(500));
        Ok(vec![])
    }
}

struct PanickingExtractor;

impl TextExtractor for PanickingExtractor {
    fn extract_pages(&self, _file_data: &[u8]) -> Result<Vec<String>, AppError> {
        panic!("malformed xref table");
    }
}

fn limits() -> ExtractionLimits {
    ExtractionLimits {
        max_bytes: 1024,
        max_pages: 3,
        timeout: Duration::from_secs(5),
    }
}

fn pdf_limits() -> ExtractionLimits {
    ExtractionLimits {
        max_bytes: 1024 * 1024,
        ..limits()
    }
}

#[tokio::test]
async fn test_pages_joined_in_order() {
    let extractor = Arc::new(StaticExtractor(vec!["What is paging?", "", "Explain thrashing."]));

    let text = text_extract::extract_document_text(extractor, b"%PDF".to_vec(), limits())
        .await
        .unwrap();

    assert_eq!(text, "What is paging?\n\nExplain thrashing.");
}

#[tokio::test]
async fn test_oversized_file_rejected_before_extraction() {
    let extractor = Arc::new(PanickingExtractor);
    let data = vec![0u8; 2048];

    let result = text_extract::extract_document_text(extractor, data, limits()).await;

    assert!(matches!(result, Err(AppError::PayloadTooLarge(msg)) if msg.contains("too large")));
}

#[tokio::test]
async fn test_page_limit() {
    let extractor = Arc::new(StaticExtractor(vec!["a", "b", "c", "d"]));

    let result = text_extract::extract_document_text(extractor, vec![1], limits()).await;

    assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("too many pages")));
}

#[tokio::test]
async fn test_timeout() {
    let limits = ExtractionLimits {
        timeout: Duration::from_millis(20),
        ..limits()
    };

    let result = text_extract::extract_document_text(Arc::new(SlowExtractor), vec![1], limits).await;

    assert!(matches!(result, Err(AppError::Timeout(_))));
}

#[tokio::test]
async fn test_extractor_panic_becomes_extraction_error() {
    let result =
        text_extract::extract_document_text(Arc::new(PanickingExtractor), vec![1], limits()).await;

    assert!(matches!(result, Err(AppError::Extraction(_))));
}

// ============================================================================
// PDF Backend
// ============================================================================

#[test]
fn test_pdf_backend_returns_one_entry_per_page() {
    let extractor = PdfTextExtractor::new();
    let pdf = build_pdf(EXAM_PAGES);

    let pages = extractor.extract_pages(&pdf).unwrap();

    assert_eq!(pages.len(), 3);
    for (page, expected) in pages.iter().zip(EXAM_PAGES) {
        assert_eq!(page.trim(), *expected);
    }
    assert_eq!(extractor.count_pages(&pdf).unwrap(), Some(3));
}

#[tokio::test]
async fn test_pdf_pages_joined_with_newlines() {
    let pdf = build_pdf(EXAM_PAGES);

    let extractor = Arc::new(PdfTextExtractor::new());

    let text = text_extract::extract_document_text(extractor, pdf, pdf_limits())
        .await
        .unwrap();

    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    assert_eq!(lines, EXAM_PAGES);
}

#[tokio::test]
async fn test_pdf_page_limit_checked_before_extraction() {
    let pdf = build_pdf(EXAM_PAGES);
    let limits = ExtractionLimits {
        max_pages: 1,
        ..pdf_limits()
    };

    let result =
        text_extract::extract_document_text(Arc::new(PdfTextExtractor::new()), pdf, limits).await;

    assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("too many pages: 3")));
}

//! HTTP endpoints of the analyzer API

use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analysis::{AnalysisReport, ExamAnalyzer};
use crate::config::Config;
use crate::error::AppError;
use crate::text_extract::{self, ExtractionLimits, TextExtractor};

/// Room for multipart boundaries and headers on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Shared, read-only request context
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analyzer: Arc<ExamAnalyzer>,
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            config: Arc::new(config),
            analyzer: Arc::new(ExamAnalyzer::new()),
            extractor,
        }
    }

    fn extraction_limits(&self) -> ExtractionLimits {
        ExtractionLimits {
            max_bytes: self.config.max_upload_bytes,
            max_pages: self.config.max_pdf_pages,
            timeout: self.config.extract_timeout(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub text: String,
}

pub fn router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/", get(home))
        .route("/analyze-questions", post(analyze_questions))
        .route("/upload-pdf", post(upload_pdf))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn home() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Backend running",
        message: "Exam Question Pattern Analyzer API",
    })
}

async fn analyze_questions(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let Json(request) = payload?;
    let text = request.text.unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AppError::Validation("No text provided".to_string()));
    }

    Ok(Json(state.analyzer.analyze(&text)))
}

async fn upload_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            break;
        }
        if !text_extract::is_pdf_file_name(&file_name) {
            return Err(AppError::Validation("Only PDF files allowed".to_string()));
        }

        let data = field.bytes().await?;
        info!("Received upload {} ({} bytes)", file_name, data.len());

        let text = text_extract::extract_document_text(
            state.extractor.clone(),
            data.to_vec(),
            state.extraction_limits(),
        )
        .await?;

        return Ok(Json(UploadResponse {
            message: "PDF processed successfully",
            text,
        }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

// ExamPrep Backend Entry Point
// Exam Question Pattern Analyzer API

mod analysis;
mod api;
mod config;
mod error;
mod telemetry;
mod text_extract;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use tracing::info;

use api::AppState;
use config::Config;
use text_extract::PdfTextExtractor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format)?;

    let state = AppState::new(config.clone(), Arc::new(PdfTextExtractor::new()));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server running on: {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

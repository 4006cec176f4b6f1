//! Axum route handlers for on-screen rendering and file export.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::render::{export_file_name, html::render_html, pdf::render_pdf, ExportError, ExportRequest};
use crate::state::AppState;

fn require_content(req: &ExportRequest) -> Result<(), AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation(
            "There is no generated content to export.".to_string(),
        ));
    }
    Ok(())
}

fn attachment(file_name: &str) -> String {
    format!("attachment; filename=\"{file_name}\"")
}

/// POST /api/v1/render/html
pub async fn handle_render_html(
    Json(req): Json<ExportRequest>,
) -> Result<Html<String>, AppError> {
    require_content(&req)?;
    Ok(Html(render_html(&req.content)))
}

/// POST /api/v1/export/txt
///
/// The content is returned as-is; only the download headers are added.
pub async fn handle_export_txt(
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_content(&req)?;
    let file_name = export_file_name(req.kind, "txt", chrono::Utc::now().date_naive());
    info!(file_name = %file_name, "Exporting TXT");

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, attachment(&file_name)),
        ],
        req.content,
    ))
}

/// POST /api/v1/export/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_content(&req)?;
    let file_name = export_file_name(req.kind, "pdf", chrono::Utc::now().date_naive());
    let fonts = state.pdf_fonts();
    let title = req.title().to_string();

    let pdf = tokio::task::spawn_blocking(move || render_pdf(&req.content, &title, &fonts))
        .await
        .map_err(|e| ExportError::Task(e.to_string()))??;

    info!(file_name = %file_name, bytes = pdf.len(), "Exported PDF");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, attachment(&file_name)),
        ],
        Bytes::from(pdf),
    ))
}

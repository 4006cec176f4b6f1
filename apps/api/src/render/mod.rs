//! Display and export of generated documents.
//!
//! Generated text stays plain text end to end; layout (headers, bullets, links)
//! is recovered line by line in [`lines`] and applied by each output format.

pub mod handlers;
pub mod html;
pub mod lines;
pub mod pdf;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF font family '{family}' could not be loaded from {dir}: {message}")]
    Fonts {
        family: String,
        dir: String,
        message: String,
    },

    #[error("PDF rendering failed: {0}")]
    Render(String),

    #[error("PDF export task failed: {0}")]
    Task(String),
}

/// Which document is being exported. Drives the download file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    Resume,
    CoverLetter,
}

impl ExportKind {
    pub fn file_prefix(self) -> &'static str {
        match self {
            ExportKind::Resume => "resume",
            ExportKind::CoverLetter => "cover_letter",
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            ExportKind::Resume => "Resume",
            ExportKind::CoverLetter => "Cover Letter",
        }
    }
}

/// Body shared by the render and export endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    pub kind: ExportKind,
}

impl ExportRequest {
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.kind.default_title())
    }
}

/// `resume_2026-10-19.pdf`, `cover_letter_2026-10-19.txt`, ...
pub fn export_file_name(kind: ExportKind, extension: &str, date: NaiveDate) -> String {
    format!("{}_{}.{extension}", kind.file_prefix(), date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            export_file_name(ExportKind::Resume, "pdf", date),
            "resume_2024-03-07.pdf"
        );
        assert_eq!(
            export_file_name(ExportKind::CoverLetter, "txt", date),
            "cover_letter_2024-03-07.txt"
        );
    }

    #[test]
    fn test_request_title_falls_back_to_kind() {
        let req: ExportRequest =
            serde_json::from_str(r#"{"content":"x","kind":"cover_letter","title":"  "}"#).unwrap();
        assert_eq!(req.kind, ExportKind::CoverLetter);
        assert_eq!(req.title(), "Cover Letter");

        let req: ExportRequest =
            serde_json::from_str(r#"{"content":"x","kind":"resume","title":"Ada CV"}"#).unwrap();
        assert_eq!(req.title(), "Ada CV");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let res = serde_json::from_str::<ExportRequest>(r#"{"content":"x","kind":"memo"}"#);
        assert!(res.is_err());
    }
}

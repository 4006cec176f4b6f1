use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmGateway;
use crate::render::pdf::PdfFonts;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `LlmClient` in production, a scripted stub in tests.
    pub llm: Arc<dyn LlmGateway>,
    pub config: Config,
}

impl AppState {
    pub fn pdf_fonts(&self) -> PdfFonts {
        PdfFonts {
            dir: self.config.pdf_font_dir.clone(),
            family: self.config.pdf_font_name.clone(),
        }
    }
}

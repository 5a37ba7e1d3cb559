use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::export::{build_printer, Printer};
use crate::layout::default_page_config;
use crate::resume::ResumeStore;
use crate::views::Views;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one résumé document of the running site.
    pub store: ResumeStore,
    pub views: Arc<Views>,
    /// Export backend. Default: PdfPrinter. Swap via EXPORT_FORMAT.
    pub printer: Arc<dyn Printer>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let views = Arc::new(Views::new()?);
        let page_config = default_page_config(config.page_size);
        let printer = build_printer(&config, &page_config, Arc::clone(&views));
        Ok(Self {
            store: ResumeStore::default(),
            views,
            printer,
            config,
        })
    }

    /// Label of the builder's download control.
    pub fn export_label(&self) -> &'static str {
        match self.printer.backend() {
            "pdf" => "Download PDF",
            _ => "Download",
        }
    }
}

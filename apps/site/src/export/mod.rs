//! Export of the current résumé as a downloadable document.
//!
//! A `Printer` receives a preview snapshot and returns finished bytes. The
//! backend is picked once at startup from `EXPORT_FORMAT`.

pub mod handlers;
pub mod html;
pub mod pdf;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::{Config, ExportFormat};
use crate::errors::AppError;
use crate::layout::PageConfig;
use crate::resume::preview::ResumePreview;
use crate::views::Views;

pub use html::HtmlPrinter;
pub use pdf::PdfPrinter;

/// Input to a printer: the export title and the projection to print.
#[derive(Debug, Clone)]
pub struct PrintJob {
    pub title: String,
    pub preview: ResumePreview,
}

#[derive(Debug, Clone)]
pub struct PrintedDocument {
    pub title: String,
    pub content_type: &'static str,
    pub extension: &'static str,
    pub bytes: Bytes,
    /// Page count, when the backend lays out pages itself.
    pub pages: Option<usize>,
}

impl PrintedDocument {
    pub fn filename(&self) -> String {
        format!("{}.{}", self.title, self.extension)
    }

    /// `Content-Disposition` value with an ASCII fallback name and the exact
    /// UTF-8 name in `filename*`.
    pub fn content_disposition(&self) -> String {
        let filename = self.filename();
        let fallback: String = filename
            .chars()
            .map(|c| match c {
                '"' | '\\' => '_',
                c if c.is_ascii_graphic() || c == ' ' => c,
                _ => '_',
            })
            .collect();
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            percent_encode(&filename)
        )
    }
}

/// RFC 5987 encoding for `filename*`.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// The export capability.
#[async_trait]
pub trait Printer: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    async fn print(&self, job: PrintJob) -> Result<PrintedDocument, AppError>;
}

pub fn build_printer(
    config: &Config,
    page_config: &PageConfig,
    views: Arc<Views>,
) -> Arc<dyn Printer> {
    match config.export_format {
        ExportFormat::Pdf => Arc::new(PdfPrinter::new(page_config.clone())),
        ExportFormat::Html => Arc::new(HtmlPrinter::new(views, config.page_size)),
    }
}

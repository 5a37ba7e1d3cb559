use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;
use crate::export::{PrintJob, PrintedDocument, Printer};
use crate::layout::PageSize;
use crate::views::Views;

/// Exports the print view as a standalone HTML file, leaving PDF conversion to
/// the browser's print dialog.
pub struct HtmlPrinter {
    views: Arc<Views>,
    page_size: PageSize,
}

impl HtmlPrinter {
    pub fn new(views: Arc<Views>, page_size: PageSize) -> Self {
        Self { views, page_size }
    }
}

#[async_trait]
impl Printer for HtmlPrinter {
    fn backend(&self) -> &'static str {
        "html"
    }

    async fn print(&self, job: PrintJob) -> Result<PrintedDocument, AppError> {
        let html = self.views.print(&job.preview, self.page_size)?;
        Ok(PrintedDocument {
            title: job.title,
            content_type: "text/html; charset=utf-8",
            extension: "html",
            bytes: Bytes::from(html),
            pages: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeDocument;
    use crate::resume::preview::render_preview;

    #[tokio::test]
    async fn test_html_export_is_print_page() {
        let printer = HtmlPrinter::new(Arc::new(Views::new().unwrap()), PageSize::Letter);
        let preview = render_preview(&ResumeDocument::sample());
        let printed = printer
            .print(PrintJob {
                title: preview.title(),
                preview,
            })
            .await
            .unwrap();

        assert_eq!(printed.extension, "html");
        assert_eq!(printed.pages, None);
        let body = std::str::from_utf8(&printed.bytes).unwrap();
        assert!(body.contains("<title>Your Name - Resume</title>"));
        assert!(body.contains("@page { size: letter;"));
    }
}

//! PDF backend: lays the preview out on pages and writes them with lopdf.

use async_trait::async_trait;
use bytes::Bytes;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

use crate::errors::AppError;
use crate::export::{PrintJob, PrintedDocument, Printer};
use crate::layout::{paginate, FontFace, Page, PageConfig};

/// Grey used for section rules.
const RULE_GRAY: f32 = 0.8;
const RULE_WIDTH: f32 = 0.5;

pub struct PdfPrinter {
    config: PageConfig,
}

impl PdfPrinter {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Printer for PdfPrinter {
    fn backend(&self) -> &'static str {
        "pdf"
    }

    async fn print(&self, job: PrintJob) -> Result<PrintedDocument, AppError> {
        let config = self.config.clone();
        let title = job.title.clone();
        let (bytes, pages) = tokio::task::spawn_blocking(move || {
            let pages = paginate(&job.preview, &config);
            debug!("Laid out {} page(s) for '{}'", pages.len(), job.title);
            let bytes = write_pdf(&job.title, &pages, &config)?;
            Ok::<_, AppError>((bytes, pages.len()))
        })
        .await
        .map_err(|e| AppError::Export(format!("PDF task failed: {e}")))??;

        Ok(PrintedDocument {
            title,
            content_type: "application/pdf",
            extension: "pdf",
            bytes: Bytes::from(bytes),
            pages: Some(pages),
        })
    }
}

/// Maps text to the WinAnsi bytes the standard fonts expect. Characters with
/// no WinAnsi code become `?`.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{201A}' => 0x82,
            '\u{0192}' => 0x83,
            '\u{201E}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{2020}' => 0x86,
            '\u{2021}' => 0x87,
            '\u{02C6}' => 0x88,
            '\u{2030}' => 0x89,
            '\u{0160}' => 0x8A,
            '\u{2039}' => 0x8B,
            '\u{0152}' => 0x8C,
            '\u{017D}' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{02DC}' => 0x98,
            '\u{2122}' => 0x99,
            '\u{0161}' => 0x9A,
            '\u{203A}' => 0x9B,
            '\u{0153}' => 0x9C,
            '\u{017E}' => 0x9E,
            '\u{0178}' => 0x9F,
            // C1 controls have no glyph in WinAnsi.
            '\u{0080}'..='\u{009F}' => b'?',
            c if c as u32 <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}

fn text_object(s: &str) -> Object {
    Object::String(to_win_ansi(s), StringFormat::Literal)
}

/// Draws one page's text and rules. PDF y runs upward from the bottom edge.
fn page_content(page: &Page, page_height: f32) -> Content {
    let mut operations = Vec::new();

    if !page.rules.is_empty() {
        operations.push(Operation::new("w", vec![RULE_WIDTH.into()]));
        operations.push(Operation::new(
            "RG",
            vec![RULE_GRAY.into(), RULE_GRAY.into(), RULE_GRAY.into()],
        ));
        for rule in &page.rules {
            let y = page_height - rule.y;
            operations.push(Operation::new("m", vec![rule.x1.into(), y.into()]));
            operations.push(Operation::new("l", vec![rule.x2.into(), y.into()]));
            operations.push(Operation::new("S", vec![]));
        }
    }

    for line in &page.lines {
        let y = page_height - line.baseline;
        for segment in line.segments.iter().filter(|s| !s.text.is_empty()) {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![segment.face.resource_name().into(), segment.size_pt.into()],
            ));
            operations.push(Operation::new("Td", vec![segment.x.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![text_object(&segment.text)]));
            operations.push(Operation::new("ET", vec![]));
        }
    }

    Content { operations }
}

/// Writes the laid-out pages to an in-memory PDF.
pub fn write_pdf(title: &str, pages: &[Page], config: &PageConfig) -> Result<Vec<u8>, AppError> {
    let mut document = Document::with_version("1.7");
    let pages_id = document.new_object_id();

    let mut fonts = Dictionary::new();
    for face in FontFace::ALL {
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(face.resource_name(), font_id);
    }
    let resources_id = document.add_object(dictionary! { "Font" => fonts });

    let (width, height) = (config.page_width(), config.page_height());
    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(pages.len());
    for page in pages {
        let encoded = page_content(page, height).encode().map_err(pdf_error)?;
        let content_id = document.add_object(Stream::new(Dictionary::new(), encoded));
        let media_box: Vec<Object> = vec![0.into(), 0.into(), width.into(), height.into()];
        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id);
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::from(*id)).collect();
    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
        }),
    );

    let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    document.trailer.set("Root", catalog_id);
    let info_id = document.add_object(dictionary! {
        "Title" => text_object(title),
        "Producer" => text_object(concat!("devfolio ", env!("CARGO_PKG_VERSION"))),
    });
    document.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    document.save_to(&mut buffer).map_err(pdf_error)?;
    Ok(buffer)
}

fn pdf_error(e: impl std::fmt::Display) -> AppError {
    AppError::Export(format!("PDF write failed: {e}"))
}

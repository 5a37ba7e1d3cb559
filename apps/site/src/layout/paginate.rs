//! Page layout for the printed résumé.
//!
//! `layout_preview` turns a `ResumePreview` into blocks of lines (one block per
//! role, school, skill row, strengths row or paragraph), then `paginate` flows
//! the blocks onto pages. A block that fits on a fresh page is never split
//! across pages; a block taller than a whole page is split line by line.
//! Section headings travel with the first block of their section.

use serde::Serialize;

use crate::layout::font_metrics::{get_metrics, FontFace, PageConfig};
use crate::layout::wrap::wrap_text;
use crate::resume::preview::ResumePreview;

/// Horizontal offset of the bullet glyph inside the text area.
const BULLET_X: f32 = 4.0;
/// Hanging indent for bullet text.
const BULLET_TEXT_X: f32 = 14.0;
/// Gap between a skill label and its value.
const LABEL_GAP: f32 = 6.0;
/// Space taken by a horizontal rule under a line.
const RULE_SPACE: f32 = 4.0;
/// Gap between the two strengths columns.
const COLUMN_GAP: f32 = 18.0;

// ────────────────────────────────────────────────────────────────────────────
// Layout output
// ────────────────────────────────────────────────────────────────────────────

/// A run of text in one face. `x` is measured from the left page edge once placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub text: String,
    pub face: FontFace,
    pub size_pt: f32,
    pub x: f32,
}

/// A line placed on a page. `baseline` is measured from the top page edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub baseline: f32,
    pub segments: Vec<Segment>,
}

/// A horizontal rule, measured from the top page edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub y: f32,
    pub x1: f32,
    pub x2: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
    pub rules: Vec<Rule>,
}

#[cfg(test)]
impl Page {
    /// All text on the page in reading order, one line per entry.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|l| {
                l.segments
                    .iter()
                    .map(|s| s.text.as_str())
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Intermediate blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct LayoutLine {
    segments: Vec<Segment>,
    size_pt: f32,
    space_before: f32,
    rule_after: bool,
}

impl LayoutLine {
    fn new(size_pt: f32) -> Self {
        Self {
            segments: Vec::new(),
            size_pt,
            space_before: 0.0,
            rule_after: false,
        }
    }

    fn text(mut self, text: impl Into<String>, face: FontFace, x: f32) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            face,
            size_pt: self.size_pt,
            x,
        });
        self
    }

    fn sized_text(mut self, text: impl Into<String>, face: FontFace, size_pt: f32, x: f32) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            face,
            size_pt,
            x,
        });
        self
    }

    fn box_height(&self, config: &PageConfig) -> f32 {
        self.size_pt * config.line_height
    }

    /// Vertical space this line consumes, with or without its leading gap.
    fn advance(&self, config: &PageConfig, with_gap: bool) -> f32 {
        let gap = if with_gap { self.space_before } else { 0.0 };
        let rule = if self.rule_after { RULE_SPACE } else { 0.0 };
        gap + self.box_height(config) + rule
    }
}

#[derive(Debug, Clone, Default)]
struct Block {
    lines: Vec<LayoutLine>,
}

impl Block {
    fn height(&self, config: &PageConfig, at_page_top: bool) -> f32 {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, l)| l.advance(config, !(at_page_top && i == 0)))
            .sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Preview -> blocks
// ────────────────────────────────────────────────────────────────────────────

fn width_of(text: &str, face: FontFace, size_pt: f32) -> f32 {
    get_metrics(face).measure_pt(text, size_pt)
}

fn heading(title: &str, config: &PageConfig) -> LayoutLine {
    let mut line = LayoutLine::new(config.heading_size_pt).text(
        title.to_uppercase(),
        FontFace::Bold,
        0.0,
    );
    line.space_before = config.section_gap_pt;
    line.rule_after = true;
    line
}

/// Attaches a section heading to the first block of the section.
fn section(title: &str, mut blocks: Vec<Block>, config: &PageConfig) -> Vec<Block> {
    let head = heading(title, config);
    match blocks.first_mut() {
        Some(first) => first.lines.insert(0, head),
        None => blocks.push(Block { lines: vec![head] }),
    }
    blocks
}

fn paragraph(text: &str, config: &PageConfig) -> Block {
    let size = config.body_size_pt;
    Block {
        lines: wrap_text(text, config.text_width(), size, FontFace::Regular)
            .into_iter()
            .map(|l| LayoutLine::new(size).text(l, FontFace::Regular, 0.0))
            .collect(),
    }
}

fn bullet_lines(text: &str, x: f32, width: f32, config: &PageConfig) -> Vec<LayoutLine> {
    let size = config.body_size_pt;
    wrap_text(text, width - BULLET_TEXT_X, size, FontFace::Regular)
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            let line = LayoutLine::new(size);
            let line = if i == 0 {
                line.text("\u{2022}", FontFace::Regular, x + BULLET_X)
            } else {
                line
            };
            line.text(l, FontFace::Regular, x + BULLET_TEXT_X)
        })
        .collect()
}

fn header_block(preview: &ResumePreview, config: &PageConfig) -> Block {
    let mut lines = vec![LayoutLine::new(config.name_size_pt).text(
        preview.name.clone(),
        FontFace::Bold,
        0.0,
    )];
    for (i, l) in wrap_text(
        &preview.contact_line,
        config.text_width(),
        config.body_size_pt,
        FontFace::Regular,
    )
    .into_iter()
    .enumerate()
    {
        let mut line = LayoutLine::new(config.body_size_pt).text(l, FontFace::Regular, 0.0);
        if i == 0 {
            line.space_before = 2.0;
        }
        lines.push(line);
    }
    if let Some(last) = lines.last_mut() {
        last.rule_after = true;
    }
    Block { lines }
}

fn strengths_blocks(strengths: &[String], config: &PageConfig) -> Vec<Block> {
    let column_width = (config.text_width() - COLUMN_GAP) / 2.0;
    strengths
        .chunks(2)
        .map(|pair| {
            let left = bullet_lines(&pair[0], 0.0, column_width, config);
            let right = pair
                .get(1)
                .map(|s| bullet_lines(s, column_width + COLUMN_GAP, column_width, config))
                .unwrap_or_default();
            let rows = left.len().max(right.len());
            let lines = (0..rows)
                .map(|i| {
                    let mut line = LayoutLine::new(config.body_size_pt);
                    for half in [&left, &right] {
                        if let Some(part) = half.get(i) {
                            line.segments.extend(part.segments.iter().cloned());
                        }
                    }
                    line
                })
                .collect();
            Block { lines }
        })
        .collect()
}

/// First line of an entry: bold name, optional trailing detail, right-aligned meta.
fn entry_title_line(
    name: &str,
    detail: Option<&str>,
    meta: &str,
    config: &PageConfig,
) -> LayoutLine {
    let size = config.body_size_pt;
    let mut line = LayoutLine::new(size).text(name.to_string(), FontFace::Bold, 0.0);
    if let Some(detail) = detail {
        let x = width_of(name, FontFace::Bold, size);
        line = line.text(format!(" | {detail}"), FontFace::Regular, x);
    }
    if !meta.is_empty() {
        let meta_size = config.meta_size_pt;
        let x = config.text_width() - width_of(meta, FontFace::Regular, meta_size);
        line = line.sized_text(meta.to_string(), FontFace::Regular, meta_size, x);
    }
    line
}

fn experience_blocks(preview: &ResumePreview, config: &PageConfig) -> Vec<Block> {
    preview
        .experience
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let mut first = entry_title_line(
                &role.company,
                role.location.as_deref(),
                &role.period,
                config,
            );
            if i > 0 {
                first.space_before = config.entry_gap_pt;
            }
            let mut lines = vec![first];
            if !role.title.is_empty() {
                lines.push(LayoutLine::new(config.body_size_pt).text(
                    role.title.clone(),
                    FontFace::Oblique,
                    0.0,
                ));
            }
            for bullet in &role.bullets {
                lines.extend(bullet_lines(bullet, 0.0, config.text_width(), config));
            }
            Block { lines }
        })
        .collect()
}

fn education_blocks(preview: &ResumePreview, config: &PageConfig) -> Vec<Block> {
    preview
        .education
        .iter()
        .enumerate()
        .map(|(i, school)| {
            let mut first = entry_title_line(&school.school, None, &school.meta, config);
            if i > 0 {
                first.space_before = config.entry_gap_pt / 2.0;
            }
            let mut lines = vec![first];
            if !school.degree.is_empty() {
                lines.push(LayoutLine::new(config.body_size_pt).text(
                    school.degree.clone(),
                    FontFace::Oblique,
                    0.0,
                ));
            }
            Block { lines }
        })
        .collect()
}

fn skills_blocks(preview: &ResumePreview, config: &PageConfig) -> Vec<Block> {
    let size = config.body_size_pt;
    preview
        .skills
        .iter()
        .map(|row| {
            let label = format!("{}:", row.label);
            let value_x = width_of(&label, FontFace::Bold, size) + LABEL_GAP;
            let values = wrap_text(
                &row.value,
                config.text_width() - value_x,
                size,
                FontFace::Regular,
            );
            let mut lines = vec![LayoutLine::new(size).text(label, FontFace::Bold, 0.0)];
            for (i, value) in values.into_iter().enumerate() {
                if i == 0 {
                    lines[0] = lines[0].clone().text(value, FontFace::Regular, value_x);
                } else {
                    lines.push(LayoutLine::new(size).text(value, FontFace::Regular, value_x));
                }
            }
            Block { lines }
        })
        .collect()
}

fn layout_preview(preview: &ResumePreview, config: &PageConfig) -> Vec<Block> {
    let mut blocks = vec![header_block(preview, config)];
    if let Some(summary) = &preview.summary {
        blocks.extend(section("Summary", vec![paragraph(summary, config)], config));
    }
    if preview.has_strengths() {
        blocks.extend(section(
            "Key Strengths",
            strengths_blocks(&preview.strengths, config),
            config,
        ));
    }
    if preview.has_experience() {
        blocks.extend(section("Experience", experience_blocks(preview, config), config));
    }
    if preview.has_education() {
        blocks.extend(section("Education", education_blocks(preview, config), config));
    }
    blocks.extend(section("Skills", skills_blocks(preview, config), config));
    blocks
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks -> pages
// ────────────────────────────────────────────────────────────────────────────

struct Paginator<'a> {
    config: &'a PageConfig,
    pages: Vec<Page>,
    current: Page,
    /// Distance already used from the top of the text area.
    cursor: f32,
}

impl<'a> Paginator<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            current: Page::default(),
            cursor: 0.0,
        }
    }

    fn at_page_top(&self) -> bool {
        self.cursor == 0.0
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor = 0.0;
    }

    fn place_block(&mut self, block: &Block) {
        let available = self.config.text_height();
        let needed = block.height(self.config, self.at_page_top());
        let fits_fresh_page = block.height(self.config, true) <= available;
        if !self.at_page_top() && self.cursor + needed > available && fits_fresh_page {
            self.break_page();
        }
        for line in &block.lines {
            let advance = line.advance(self.config, !self.at_page_top());
            if !self.at_page_top() && self.cursor + advance > available {
                self.break_page();
            }
            self.place_line(line);
        }
    }

    fn place_line(&mut self, line: &LayoutLine) {
        let config = self.config;
        let top = config.margin_pt
            + self.cursor
            + if self.at_page_top() { 0.0 } else { line.space_before };
        let box_height = line.box_height(config);
        let baseline = top + box_height - line.size_pt * 0.25;

        self.current.lines.push(PlacedLine {
            baseline,
            segments: line
                .segments
                .iter()
                .map(|s| Segment {
                    x: config.margin_pt + s.x,
                    ..s.clone()
                })
                .collect(),
        });
        if line.rule_after {
            self.current.rules.push(Rule {
                y: top + box_height + RULE_SPACE / 2.0,
                x1: config.margin_pt,
                x2: config.margin_pt + config.text_width(),
            });
        }
        self.cursor += line.advance(config, !self.at_page_top());
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.lines.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Lays the preview out on as many pages as it needs. Always returns at least one page.
pub fn paginate(preview: &ResumePreview, config: &PageConfig) -> Vec<Page> {
    let mut paginator = Paginator::new(config);
    for block in layout_preview(preview, config) {
        paginator.place_block(&block);
    }
    paginator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{default_page_config, PageSize};
    use crate::models::resume::{ResumeDocument, Role};
    use crate::resume::preview::render_preview;

    fn config() -> PageConfig {
        default_page_config(PageSize::Letter)
    }

    fn all_text(pages: &[Page]) -> Vec<String> {
        pages.iter().flat_map(|p| p.text_lines()).collect()
    }

    fn role(company: &str, bullets: usize) -> Role {
        Role {
            company: company.to_string(),
            title: "Engineer".to_string(),
            start: Some("2020".to_string()),
            end: Some("2022".to_string()),
            bullets: (0..bullets)
                .map(|i| {
                    format!("Delivered project number {i} for {company} on time and on budget")
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sample_fits_on_one_page() {
        let pages = paginate(&render_preview(&ResumeDocument::sample()), &config());
        assert_eq!(pages.len(), 1);
        let text = all_text(&pages);
        assert_eq!(text[0], "Your Name");
        assert!(text.iter().any(|l| l == "KEY STRENGTHS"));
        assert!(text.iter().any(|l| l == "SKILLS"));
    }

    #[test]
    fn test_empty_document_still_has_one_page() {
        let pages = paginate(&render_preview(&ResumeDocument::default()), &config());
        assert_eq!(pages.len(), 1);
        assert!(!all_text(&pages).iter().any(|l| l == "SUMMARY"));
    }

    #[test]
    fn test_blank_bullets_not_printed() {
        let mut doc = ResumeDocument::default();
        doc.experience = vec![Role {
            company: "Acme".to_string(),
            bullets: vec![String::new(), "Did X".to_string(), String::new()],
            ..Default::default()
        }];
        let pages = paginate(&render_preview(&doc), &config());
        let bullets: Vec<_> = all_text(&pages)
            .into_iter()
            .filter(|l| l.starts_with('\u{2022}'))
            .collect();
        assert_eq!(bullets, vec!["\u{2022} Did X"]);
    }

    #[test]
    fn test_long_resume_spans_pages_within_margins() {
        let mut doc = ResumeDocument::sample();
        doc.experience = (0..12).map(|i| role(&format!("Company {i}"), 5)).collect();
        let cfg = config();
        let pages = paginate(&render_preview(&doc), &cfg);
        assert!(pages.len() > 1);
        for page in &pages {
            for line in &page.lines {
                assert!(line.baseline > cfg.margin_pt);
                assert!(line.baseline <= cfg.page_height() - cfg.margin_pt);
            }
        }
    }

    #[test]
    fn test_role_block_not_split_across_pages() {
        let mut doc = ResumeDocument::sample();
        doc.experience = (0..12).map(|i| role(&format!("Company {i}"), 5)).collect();
        let pages = paginate(&render_preview(&doc), &config());
        for i in 0..12 {
            let company = format!("Company {i}");
            let holding: Vec<usize> = pages
                .iter()
                .enumerate()
                .filter(|(_, p)| {
                    p.text_lines()
                        .iter()
                        .any(|l| l.contains(&format!("for {company} ")))
                })
                .map(|(n, _)| n)
                .collect();
            assert_eq!(holding.len(), 1, "{company} bullets split over pages {holding:?}");
        }
    }

    #[test]
    fn test_heading_stays_with_first_entry() {
        let mut doc = ResumeDocument::sample();
        doc.experience = (0..12).map(|i| role(&format!("Company {i}"), 5)).collect();
        let pages = paginate(&render_preview(&doc), &config());
        for page in &pages {
            let text = page.text_lines();
            if let Some(last) = text.last() {
                assert_ne!(last, "EDUCATION");
                assert_ne!(last, "SKILLS");
            }
        }
    }

    #[test]
    fn test_period_is_right_aligned() {
        let mut doc = ResumeDocument::default();
        doc.experience = vec![role("Acme", 1)];
        let cfg = config();
        let pages = paginate(&render_preview(&doc), &cfg);
        let line = pages[0]
            .lines
            .iter()
            .find(|l| l.segments.iter().any(|s| s.text == "Acme"))
            .unwrap();
        let period = line.segments.iter().find(|s| s.text == "2020 - 2022").unwrap();
        let right_edge =
            period.x + get_metrics(FontFace::Regular).measure_pt(&period.text, period.size_pt);
        assert!((right_edge - (cfg.page_width() - cfg.margin_pt)).abs() < 0.01);
    }

    #[test]
    fn test_oversized_block_is_split() {
        let mut doc = ResumeDocument::default();
        doc.experience = vec![role("Huge", 120)];
        let pages = paginate(&render_preview(&doc), &config());
        assert!(pages.len() >= 2);
        assert!(pages.iter().all(|p| !p.lines.is_empty()));
    }
}

//! Greedy word wrap against the static font metrics.

use crate::layout::font_metrics::{get_metrics, FontFace};

/// Breaks `text` into lines no wider than `max_width_pt`.
///
/// Words are never split: a word wider than the line sits alone on its own
/// line and overflows. Runs of whitespace collapse to a single space. Empty or
/// whitespace-only text yields no lines.
pub fn wrap_text(text: &str, max_width_pt: f32, size_pt: f32, face: FontFace) -> Vec<String> {
    let metrics = get_metrics(face);
    let space_w = metrics.space_width * size_pt;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_w = metrics.measure_pt(word, size_pt);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + space_w + word_w > max_width_pt {
            // Line is full, start the next one.
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

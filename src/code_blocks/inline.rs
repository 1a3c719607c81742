//! Inline code: `like this`, at least two characters between the backticks.

use super::patterns::INLINE_CODE_RE;
use super::span::{CharOffsets, Span};

/// Spans of single-backtick inline code, left to right, each including both backticks.
pub fn inline_code_spans(text: &str) -> Vec<Span> {
    let offsets = CharOffsets::new(text);
    let spans: Vec<Span> = INLINE_CODE_RE
        .find_iter(text)
        .filter_map(|m| offsets.span(m.start(), m.end()))
        .collect();
    log::debug!("inline pass: {} span(s)", spans.len());
    spans
}

//! Fenced (```) code blocks.

use super::patterns::FENCED_BLOCK_RE;
use super::span::{CharOffsets, Span};

/// Spans of ``` fenced blocks, top to bottom. Each runs from the opening backticks through the
/// newline ending the closing fence line. A closing fence without a trailing newline is not
/// matched.
pub fn fenced_block_spans(text: &str) -> Vec<Span> {
    let offsets = CharOffsets::new(text);
    let spans: Vec<Span> = FENCED_BLOCK_RE
        .find_iter(text)
        .inspect(|m| log::trace!("fenced block at bytes {}..{}", m.start(), m.end()))
        .filter_map(|m| offsets.span(m.start(), m.end()))
        .collect();
    log::debug!("fenced pass: {} span(s)", spans.len());
    spans
}

//! Code span detection for chat message text.
//!
//! Three independent passes run over the same text:
//! - fenced ``` blocks ([`fenced_block_spans`])
//! - brace blocks such as `func f() { ... }` ([`brace_block_spans`])
//! - single-backtick inline code ([`inline_code_spans`])
//!
//! Block queries return fenced spans followed by brace spans. The two passes are not reconciled,
//! so their spans may overlap; callers that care must de-duplicate themselves.

mod brace;
mod fenced;
mod inline;
mod patterns;
mod span;

pub use brace::{BraceBlocks, brace_block_spans};
pub use fenced::fenced_block_spans;
pub use inline::inline_code_spans;
pub use span::{CharOffsets, Span, SpanKind};

/// Finds code regions in message text for the rendering layer.
pub trait CodeBlockParser {
    /// Block-level code regions (fenced and brace blocks, possibly overlapping).
    fn code_block_ranges(&self, text: &str) -> Vec<Span>;
    /// Inline code regions.
    fn inline_code_ranges(&self, text: &str) -> Vec<Span>;
}

/// Default detector: fenced blocks, then brace blocks, plus inline code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeSpanDetector;

impl CodeBlockParser for CodeSpanDetector {
    fn code_block_ranges(&self, text: &str) -> Vec<Span> {
        block_spans(text)
    }

    fn inline_code_ranges(&self, text: &str) -> Vec<Span> {
        inline_code_spans(text)
    }
}

/// Fenced block spans followed by brace block spans. Not merged, sorted or de-duplicated.
pub fn block_spans(text: &str) -> Vec<Span> {
    let mut spans = fenced_block_spans(text);
    spans.extend(brace_block_spans(text));
    spans
}

/// Every span from every pass, tagged with its kind: fenced, brace, then inline.
pub fn labeled_spans(text: &str) -> Vec<(SpanKind, Span)> {
    let fenced = fenced_block_spans(text)
        .into_iter()
        .map(|s| (SpanKind::Fenced, s));
    let brace = brace_block_spans(text)
        .into_iter()
        .map(|s| (SpanKind::Brace, s));
    let inline = inline_code_spans(text)
        .into_iter()
        .map(|s| (SpanKind::Inline, s));
    fenced.chain(brace).chain(inline).collect()
}

#[cfg(test)]
mod tests;

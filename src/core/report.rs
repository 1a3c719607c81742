//! Span queries and their text/JSON rendering for the CLI.

use serde::Serialize;

use code_spans::{
    CharOffsets, Span, SpanKind, brace_block_spans, fenced_block_spans, inline_code_spans,
    labeled_spans,
};

use crate::core::config::OutputFormat;

/// Longest preview shown in text output, in characters.
const PREVIEW_CHARS: usize = 60;

/// Which detection passes to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    All,
    Blocks,
    Fenced,
    Brace,
    Inline,
}

/// One reported span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpanRecord {
    pub kind: SpanKind,
    #[serde(flatten)]
    pub span: Span,
}

/// Run `query` over `text`, keeping pass order (fenced before brace before inline).
pub fn collect(query: Query, text: &str) -> Vec<SpanRecord> {
    let tagged = |kind: SpanKind, spans: Vec<Span>| -> Vec<SpanRecord> {
        spans
            .into_iter()
            .map(|span| SpanRecord { kind, span })
            .collect()
    };
    match query {
        Query::All => labeled_spans(text)
            .into_iter()
            .map(|(kind, span)| SpanRecord { kind, span })
            .collect(),
        Query::Blocks => {
            let mut records = tagged(SpanKind::Fenced, fenced_block_spans(text));
            records.extend(tagged(SpanKind::Brace, brace_block_spans(text)));
            records
        }
        Query::Fenced => tagged(SpanKind::Fenced, fenced_block_spans(text)),
        Query::Brace => tagged(SpanKind::Brace, brace_block_spans(text)),
        Query::Inline => tagged(SpanKind::Inline, inline_code_spans(text)),
    }
}

/// Render records in the requested format. Text output ends each record with a newline;
/// JSON output is a single pretty-printed array.
pub fn render(
    records: &[SpanRecord],
    text: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(records, text)),
        OutputFormat::Json => serde_json::to_string_pretty(records).map(|s| s + "\n"),
    }
}

fn render_text(records: &[SpanRecord], text: &str) -> String {
    let offsets = CharOffsets::new(text);
    records
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\t{}\n",
                r.kind,
                r.span.start,
                r.span.len,
                preview(offsets.slice(text, r.span).unwrap_or_default())
            )
        })
        .collect()
}

/// Single-line preview: control whitespace escaped, long snippets cut with an ellipsis.
fn preview(snippet: &str) -> String {
    let escaped: String = snippet
        .chars()
        .flat_map(|c| match c {
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            c => vec![c],
        })
        .collect();
    if escaped.chars().count() <= PREVIEW_CHARS {
        return escaped;
    }
    let mut cut: String = escaped.chars().take(PREVIEW_CHARS - 1).collect();
    cut.push('…');
    cut
}

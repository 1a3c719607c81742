//! # code-spans
//!
//! Locates code inside free-form chat message text so a presentation layer can render it
//! differently: Markdown ``` fences, bare brace-delimited blocks (`func f() { ... }`) and
//! single-backtick inline code.
//!
//! All offsets are character (Unicode scalar value) offsets into the exact text that was scanned.
//!
//! ```
//! use code_spans::{CodeBlockParser, CodeSpanDetector, Span};
//!
//! let detector = CodeSpanDetector;
//! let text = "func f() {\n  return\n}\n";
//! assert_eq!(detector.code_block_ranges(text), vec![Span::new(0, 22)]);
//! ```

pub mod code_blocks;

pub use code_blocks::{
    CharOffsets, CodeBlockParser, CodeSpanDetector, Span, SpanKind, block_spans,
    brace_block_spans, fenced_block_spans, inline_code_spans, labeled_spans,
};

//! Character-based spans and the byte-to-character offset index.
//!
//! The regex engine reports byte offsets into UTF-8 text. Every span leaving this crate is
//! measured in characters (Unicode scalar values), so all conversions go through [`CharOffsets`].

use serde::Serialize;

/// A contiguous region of text: `start` and `len` counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Build a span from a character range `[start, end)`, checked against `text_len`.
    /// Returns `None` when the range is inverted or does not fit the text.
    pub fn bounded(start: usize, end: usize, text_len: usize) -> Option<Self> {
        if start > end || end > text_len {
            return None;
        }
        Some(Self::new(start, end - start))
    }

    /// Exclusive end offset in characters.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the character offset lies inside the span.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// The covered substring of `text`, or `None` if the span does not fit it.
    /// Must be called with the same text the span was computed from.
    /// Builds a fresh [`CharOffsets`]; use [`CharOffsets::slice`] when slicing many spans.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        CharOffsets::new(text).slice(text, *self)
    }
}

/// Index of character boundaries in a text, for converting between byte and character offsets.
#[derive(Debug)]
pub struct CharOffsets {
    /// Byte offset of each character, followed by the total byte length.
    boundaries: Vec<usize>,
}

impl CharOffsets {
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// Number of characters in the indexed text.
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Character offset of a byte offset. `None` if the byte offset is not on a boundary.
    pub fn char_of(&self, byte: usize) -> Option<usize> {
        self.boundaries.binary_search(&byte).ok()
    }

    /// Byte offset of a character offset (the text length is a valid offset).
    pub fn byte_of(&self, ch: usize) -> Option<usize> {
        self.boundaries.get(ch).copied()
    }

    /// Convert a byte range `[start, end)` into a character span, bounds-checked.
    pub fn span(&self, start: usize, end: usize) -> Option<Span> {
        let (Some(from), Some(to)) = (self.char_of(start), self.char_of(end)) else {
            log::warn!("dropping span for bytes {}..{}: not on character boundaries", start, end);
            return None;
        };
        let span = Span::bounded(from, to, self.char_len());
        if span.is_none() {
            log::warn!("dropping out-of-range span for bytes {}..{}", start, end);
        }
        span
    }

    /// The substring of `text` covered by `span`, or `None` if it does not fit.
    /// `text` must be the text this index was built from.
    pub fn slice<'a>(&self, text: &'a str, span: Span) -> Option<&'a str> {
        let from = self.byte_of(span.start)?;
        let to = self.byte_of(span.end())?;
        text.get(from..to)
    }
}

/// Which detection pass produced a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Inline,
    Fenced,
    Brace,
}

impl std::fmt::Display for SpanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanKind::Inline => write!(f, "inline"),
            SpanKind::Fenced => write!(f, "fenced"),
            SpanKind::Brace => write!(f, "brace"),
        }
    }
}

//! Brace-delimited blocks: a declaration-like header line ending in `{`, extended to the line
//! holding its balancing `}`.
//!
//! Braces are counted blindly. A `{` or `}` inside a string literal or comment still counts,
//! which can shift where a block ends.

use std::collections::HashMap;

use super::patterns::BRACE_HEADER_RE;
use super::span::{CharOffsets, Span};

/// Top-level brace blocks in `text`, in order of appearance.
pub fn brace_block_spans(text: &str) -> Vec<Span> {
    let spans: Vec<Span> = BraceBlocks::new(text).collect();
    log::debug!("brace pass: {} span(s)", spans.len());
    spans
}

/// Iterator over top-level brace blocks.
///
/// The search cursor (a byte offset, always at a line start) moves past every block it reports,
/// so a block nested inside another is absorbed by its parent. A header whose braces never
/// balance is skipped one line at a time, so the cursor advances on every step.
pub struct BraceBlocks<'t> {
    text: &'t str,
    offsets: CharOffsets,
    braces: BraceIndex<'t>,
    cursor: usize,
}

impl<'t> BraceBlocks<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            offsets: CharOffsets::new(text),
            braces: BraceIndex::new(text.as_bytes()),
            cursor: 0,
        }
    }
}

impl Iterator for BraceBlocks<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let text = self.text;
        let bytes = text.as_bytes();
        while self.cursor < bytes.len() {
            let start = BRACE_HEADER_RE.find_at(text, self.cursor)?.start();
            match self.braces.balancing_brace(start) {
                Some(close) => {
                    let end = after_line(bytes, close);
                    self.cursor = end;
                    log::trace!("brace block at bytes {}..{}", start, end);
                    if let Some(span) = self.offsets.span(start, end) {
                        return Some(span);
                    }
                }
                None => {
                    log::debug!("unbalanced braces after header at byte {}, skipping line", start);
                    self.cursor = after_line(bytes, start);
                }
            }
        }
        None
    }
}

/// Brace depths over the whole text, built in one pass.
///
/// Scanning from `start` with a counter, the balancing `}` is the first one whose count drops
/// back to zero. In absolute terms that is the first `}` at or after `start` leaving the depth
/// it had just before `start`, so each lookup is a binary search instead of a rescan.
struct BraceIndex<'t> {
    bytes: &'t [u8],
    /// Offsets of every `}`, keyed by the depth left after it, ascending.
    closers: HashMap<i64, Vec<usize>>,
    /// Running depth up to `scanned`; lookups arrive in increasing order.
    scanned: usize,
    depth: i64,
}

impl<'t> BraceIndex<'t> {
    fn new(bytes: &'t [u8]) -> Self {
        let mut closers: HashMap<i64, Vec<usize>> = HashMap::new();
        let mut depth = 0;
        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    closers.entry(depth).or_default().push(i);
                }
                _ => {}
            }
        }
        Self {
            bytes,
            closers,
            scanned: 0,
            depth: 0,
        }
    }

    /// Depth just before `pos`.
    fn depth_before(&mut self, pos: usize) -> i64 {
        if pos < self.scanned {
            self.scanned = 0;
            self.depth = 0;
        }
        self.depth += depth_change(&self.bytes[self.scanned..pos]);
        self.scanned = pos;
        self.depth
    }

    /// Byte offset of the `}` that brings a counter started at `start` back to zero.
    /// `None` if the text ends first.
    fn balancing_brace(&mut self, start: usize) -> Option<usize> {
        let depth = self.depth_before(start);
        let closers = self.closers.get(&depth)?;
        closers.get(closers.partition_point(|&i| i < start)).copied()
    }
}

fn depth_change(bytes: &[u8]) -> i64 {
    bytes.iter().fold(0, |depth, &b| match b {
        b'{' => depth + 1,
        b'}' => depth - 1,
        _ => depth,
    })
}

/// Offset just past the newline ending the line that contains `pos`, or the text length.
fn after_line(bytes: &[u8], pos: usize) -> usize {
    bytes[pos..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |n| pos + n + 1)
}

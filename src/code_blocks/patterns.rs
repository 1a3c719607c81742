//! Fixed detection patterns, compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

/// Single-backtick inline code. Two mandatory non-backtick characters keep the match from
/// starting inside a ``` fence marker; `.*?` picks the nearest closing backtick.
pub(crate) const INLINE_CODE: &str = r"`[^`][^`].*?`";

/// A ``` line through the nearest closing ```, then the rest of that line and its newline.
pub(crate) const FENCED_BLOCK: &str = r"(?ms)^```.*?```[^\n]*\n";

/// A line starting with letters and ending in `{` plus optional trailing whitespace.
pub(crate) const BRACE_HEADER: &str = r"(?mi)^[a-z]+.*\{\s*$";

pub(crate) static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| compile(INLINE_CODE));
pub(crate) static FENCED_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| compile(FENCED_BLOCK));
pub(crate) static BRACE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| compile(BRACE_HEADER));

/// Patterns are constants, so a compile failure is a bug rather than bad input.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("built-in pattern {:?} failed to compile: {}", pattern, e))
}

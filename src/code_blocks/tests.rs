//! Cross-pass properties of the detector.

use proptest::prelude::*;

use super::{
    CodeBlockParser, CodeSpanDetector, Span, SpanKind, block_spans, brace_block_spans,
    fenced_block_spans, inline_code_spans, labeled_spans,
};

const MESSAGES: &[&str] = &[
    "",
    "plain text with no code at all",
    "Use `println!` to print, or `eprintln!` for stderr.",
    "```\nhello\n```\n",
    "Here is the fix:\n\n```rust\nfn main() {\n    println!(\"hi\");\n}\n```\n\nDone.",
    "func f() {\n  return\n}\n",
    "func f() {\n  return\n",
    "func outer() {\n  func inner() {\n  }\n}\n",
    "struct Point {\n    x: f64,\n}\nimpl Point {\n    fn norm(&self) -> f64 { 0.0 }\n}",
    "日本語のテキスト `コード` と\nfn 名前() {\n}\n",
    "```\nunterminated fence\nfn a() {\n",
    "}}}{{{\nfn a() {\n}}}\n",
    "`a` `` ``` ```` `",
    "fn a() {\r\n}\r\n",
];

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[test]
fn every_span_fits_its_text() {
    for text in MESSAGES {
        let len = char_len(text);
        for (kind, span) in labeled_spans(text) {
            assert!(
                span.end() <= len,
                "{} span {:?} exceeds length {} of {:?}",
                kind,
                span,
                len,
                text
            );
            assert!(span.slice(text).is_some());
        }
    }
}

#[test]
fn queries_are_idempotent() {
    for text in MESSAGES {
        assert_eq!(block_spans(text), block_spans(text));
        assert_eq!(inline_code_spans(text), inline_code_spans(text));
        assert_eq!(brace_block_spans(text), brace_block_spans(text));
    }
}

#[test]
fn block_spans_are_fenced_then_brace() {
    for text in MESSAGES {
        let fenced = fenced_block_spans(text);
        let brace = brace_block_spans(text);
        let blocks = block_spans(text);
        assert_eq!(blocks.len(), fenced.len() + brace.len());
        assert_eq!(&blocks[..fenced.len()], fenced.as_slice());
        assert_eq!(&blocks[fenced.len()..], brace.as_slice());
    }
}

#[test]
fn detector_matches_free_functions() {
    let detector = CodeSpanDetector;
    for text in MESSAGES {
        assert_eq!(detector.code_block_ranges(text), block_spans(text));
        assert_eq!(detector.inline_code_ranges(text), inline_code_spans(text));
    }
}

#[test]
fn fenced_and_brace_spans_may_overlap() {
    let text = "```\nfn a() {\n}\n```\n";
    assert_eq!(block_spans(text), vec![Span::new(0, 19), Span::new(4, 11)]);
}

#[test]
fn labeled_spans_order_and_kinds() {
    let text = "Call `run()` first.\n```\nx\n```\nfn run() {\n}\n";
    let kinds: Vec<SpanKind> = labeled_spans(text).into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![SpanKind::Fenced, SpanKind::Brace, SpanKind::Inline]
    );
}

#[test]
fn multibyte_message_uses_character_offsets() {
    let text = MESSAGES[9];
    let inline = inline_code_spans(text);
    assert_eq!(inline.len(), 1);
    assert_eq!(inline[0].slice(text), Some("`コード`"));
    let brace = brace_block_spans(text);
    assert_eq!(brace.len(), 1);
    assert_eq!(brace[0].slice(text), Some("fn 名前() {\n}\n"));
}

#[test]
fn crlf_lines_are_recognised() {
    let text = "fn a() {\r\n}\r\n";
    assert_eq!(brace_block_spans(text), vec![Span::new(0, char_len(text))]);
}

#[test]
fn concurrent_callers_agree() {
    let detector = CodeSpanDetector;
    let expected: Vec<Vec<Span>> = MESSAGES
        .iter()
        .map(|t| detector.code_block_ranges(t))
        .collect();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    MESSAGES
                        .iter()
                        .map(|t| detector.code_block_ranges(t))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("worker panicked"), expected);
        }
    });
}

/// Messages built from the characters the matchers care about, plus arbitrary strings.
fn message() -> impl Strategy<Value = String> {
    let fragments = prop::sample::select(vec![
        "`", "```", "{", "}", "\n", "\r", " ", "\t", "fn a() ", "x", "é", "日本", "🦀",
    ]);
    prop_oneof![
        prop::collection::vec(fragments, 0..80).prop_map(|parts| parts.concat()),
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn spans_fit_any_message(text in message()) {
        let len = char_len(&text);
        for (kind, span) in labeled_spans(&text) {
            prop_assert!(span.end() <= len, "{} span {:?} exceeds {}", kind, span, len);
            prop_assert!(span.slice(&text).is_some());
        }
    }

    #[test]
    fn queries_are_idempotent_on_any_message(text in message()) {
        prop_assert_eq!(block_spans(&text), block_spans(&text));
        prop_assert_eq!(inline_code_spans(&text), inline_code_spans(&text));
    }

    #[test]
    fn block_spans_concatenate_passes_on_any_message(text in message()) {
        let mut expected = fenced_block_spans(&text);
        expected.extend(brace_block_spans(&text));
        prop_assert_eq!(block_spans(&text), expected);
    }
}

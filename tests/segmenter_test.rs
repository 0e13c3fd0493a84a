//! Integration tests for block segmentation and inline math extraction.

use mathblock::math::PassthroughConverter;
use mathblock::model::{BlockKind, MathSegment, TextBlock};
use mathblock::parser::{all_patterns, extract_math, join_blocks, lookup, segment, wrap_block};
use mathblock::ConversionError;

use std::cell::RefCell;

fn sample_document() -> String {
    [
        "Intro with `x^2` inline.\n",
        wrap_block(BlockKind::Html, "<b>bold</b>").as_str(),
        "\nbetween\n",
        wrap_block(BlockKind::Latex, "\\int_0^1 x\\,dx").as_str(),
        wrap_block(BlockKind::Plain, "line 1\nline 2").as_str(),
        "\n",
        wrap_block(BlockKind::Markdown, "# Title").as_str(),
        " tail `y`",
    ]
    .concat()
}

#[test]
fn test_html_block_only() {
    assert_eq!(
        segment("--- START HTML BLOCK\nfoo\n--- CLOSE HTML BLOCK"),
        vec![TextBlock::new(BlockKind::Html, "foo")]
    );
}

#[test]
fn test_unterminated_block_fails_open() {
    assert_eq!(
        segment("--- START LATEX BLOCK\nfoo"),
        vec![TextBlock::augmented("--- START LATEX BLOCK\nfoo")]
    );
}

#[test]
fn test_unterminated_block_after_prefix_keeps_text_once() {
    let input = "before --- START HTML BLOCK\nnever closed";
    let blocks = segment(input);
    assert_eq!(blocks, vec![TextBlock::augmented(input)]);
}

#[test]
fn test_prefix_block_suffix() {
    assert_eq!(
        segment("pre --- START PLAIN TEXT BLOCK\nmid\n--- CLOSE PLAIN TEXT BLOCK post"),
        vec![
            TextBlock::augmented("pre "),
            TextBlock::new(BlockKind::Plain, "mid"),
            TextBlock::augmented(" post"),
        ]
    );
}

#[test]
fn test_leftmost_start_wins() {
    let input = "--- START MARKDOWN BLOCK\nm\n--- CLOSE MARKDOWN BLOCK\
                 --- START HTML BLOCK\nh\n--- CLOSE HTML BLOCK";
    let kinds: Vec<_> = segment(input).iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BlockKind::Markdown, BlockKind::Html]);
}

#[test]
fn test_sentinels_are_case_sensitive() {
    let input = "--- start html block\nx\n--- close html block";
    assert_eq!(segment(input), vec![TextBlock::augmented(input)]);
}

#[test]
fn test_block_content_keeps_inner_newlines() {
    let blocks = segment("--- START PLAIN TEXT BLOCK\n\n a\n\n b \n--- CLOSE PLAIN TEXT BLOCK");
    assert_eq!(blocks, vec![TextBlock::new(BlockKind::Plain, "a\n\n b")]);
}

#[test]
fn test_nested_start_is_not_recursive() {
    let input = "--- START HTML BLOCK\n--- START LATEX BLOCK\nx\n--- CLOSE HTML BLOCK";
    assert_eq!(
        segment(input),
        vec![TextBlock::new(BlockKind::Html, "--- START LATEX BLOCK\nx")]
    );
}

#[test]
fn test_empty_input() {
    assert!(segment("").is_empty());
}

#[test]
fn test_non_empty_input_yields_blocks() {
    for input in [" ", "x", "--- CLOSE HTML BLOCK", "`", "\n\n"] {
        assert!(!segment(input).is_empty(), "no blocks for {:?}", input);
    }
}

#[test]
fn test_round_trip() {
    let input = sample_document();
    assert_eq!(join_blocks(&segment(&input)), input);
}

#[test]
fn test_segmentation_is_deterministic() {
    let input = sample_document();
    assert_eq!(segment(&input), segment(&input));
}

#[test]
fn test_registry_order() {
    let kinds: Vec<_> = all_patterns().iter().map(|p| p.kind).collect();
    assert_eq!(kinds, BlockKind::ALL.to_vec());
    assert_eq!(lookup(BlockKind::Augmented).start, "");
    assert_eq!(lookup(BlockKind::Plain).end, "--- CLOSE PLAIN TEXT BLOCK");
}

#[test]
fn test_extract_math_example() {
    assert_eq!(
        extract_math("A `x+1` B", &PassthroughConverter),
        vec![
            MathSegment::text("A "),
            MathSegment::math("x+1", "x+1"),
            MathSegment::text(" B"),
        ]
    );
}

#[test]
fn test_empty_span_is_one_conversion_attempt() {
    let seen = RefCell::new(Vec::new());
    let converter = |source: &str| -> Result<String, ConversionError> {
        seen.borrow_mut().push(source.to_string());
        Ok(String::new())
    };

    let segments = extract_math("``", &converter);
    assert_eq!(segments, vec![MathSegment::math("", "")]);
    assert_eq!(*seen.borrow(), vec![String::new()]);
}

#[test]
fn test_span_failure_is_isolated() {
    let converter = |source: &str| -> Result<String, ConversionError> {
        if source.contains('!') {
            Err(ConversionError::new(source, "unsupported"))
        } else {
            Ok(format!("<{}>", source))
        }
    };

    let segments = extract_math("`a` `b!` `c`", &converter);
    assert_eq!(segments.len(), 5);
    assert_eq!(segments[0], MathSegment::math("a", "<a>"));
    assert!(segments[2].is_invalid());
    assert_eq!(segments[2].literal(), "`b!` (Conversion Error)");
    assert_eq!(segments[4], MathSegment::math("c", "<c>"));
}

#[test]
fn test_unpaired_backtick_is_text() {
    assert_eq!(
        extract_math("cost `5", &PassthroughConverter),
        vec![MathSegment::text("cost `5")]
    );
}

#[test]
fn test_extraction_round_trip() {
    let input = "a `x` b `y` c";
    let rebuilt: String = extract_math(input, &PassthroughConverter)
        .iter()
        .map(MathSegment::source_text)
        .collect();
    assert_eq!(rebuilt, input);
}

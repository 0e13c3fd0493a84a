//! Inline math extraction.

use crate::math::MathConverter;
use crate::model::MathSegment;
use regex::Regex;
use std::sync::OnceLock;

/// Back-tick span, non-greedy. Spans do not cross line breaks.
fn math_span_regex() -> &'static Regex {
    static MATH_SPAN: OnceLock<Regex> = OnceLock::new();
    MATH_SPAN.get_or_init(|| Regex::new(r"`(.*?)`").expect("math span pattern is valid"))
}

/// Split `text` into prose and converted math segments.
///
/// Each back-tick span is trimmed and handed to `converter` on its own; a
/// rejected span becomes a [`MathSegment::Invalid`] and does not affect any
/// other span. Text without spans comes back as a single text segment.
///
/// # Example
///
/// ```
/// use mathblock::math::PassthroughConverter;
/// use mathblock::model::MathSegment;
/// use mathblock::parser::extract_math;
///
/// let segments = extract_math("A `x+1` B", &PassthroughConverter);
/// assert_eq!(
///     segments,
///     vec![
///         MathSegment::text("A "),
///         MathSegment::math("x+1", "x+1"),
///         MathSegment::text(" B"),
///     ]
/// );
/// ```
pub fn extract_math<C>(text: &str, converter: &C) -> Vec<MathSegment>
where
    C: MathConverter + ?Sized,
{
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in math_span_regex().captures_iter(text) {
        let Some(span) = caps.get(0) else {
            continue;
        };
        let source = caps.get(1).map_or("", |m| m.as_str()).trim();

        if span.start() > last {
            segments.push(MathSegment::text(&text[last..span.start()]));
        }

        match converter.convert(source) {
            Ok(typeset) => segments.push(MathSegment::math(source, typeset)),
            Err(err) => {
                log::warn!("Error converting math notation `{}`: {}", source, err.reason);
                segments.push(MathSegment::Invalid {
                    source: source.to_string(),
                    reason: err.reason,
                });
            }
        }

        last = span.end();
    }

    if last < text.len() {
        segments.push(MathSegment::text(&text[last..]));
    }

    segments
}

/// Count back-tick spans in `text` without converting them.
pub fn count_math_spans(text: &str) -> usize {
    math_span_regex().find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use crate::math::PassthroughConverter;
    use std::cell::RefCell;

    struct Recording {
        seen: RefCell<Vec<String>>,
    }

    impl Recording {
        fn new() -> Self {
            Self {
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl MathConverter for Recording {
        fn convert(&self, source: &str) -> Result<String, ConversionError> {
            self.seen.borrow_mut().push(source.to_string());
            Ok(format!("<{}>", source))
        }
    }

    fn reject_bad(source: &str) -> Result<String, ConversionError> {
        if source.contains("bad") {
            Err(ConversionError::new(source, "rejected"))
        } else {
            Ok(format!("T({})", source))
        }
    }

    #[test]
    fn test_basic_extraction() {
        let segments = extract_math("A `x+1` B", &Recording::new());
        assert_eq!(
            segments,
            vec![
                MathSegment::text("A "),
                MathSegment::math("x+1", "<x+1>"),
                MathSegment::text(" B"),
            ]
        );
    }

    #[test]
    fn test_no_spans_single_text() {
        assert_eq!(
            extract_math("plain text", &PassthroughConverter),
            vec![MathSegment::text("plain text")]
        );
        assert!(extract_math("", &PassthroughConverter).is_empty());
    }

    #[test]
    fn test_empty_span_is_converted() {
        let converter = Recording::new();
        let segments = extract_math("``", &converter);
        assert_eq!(segments, vec![MathSegment::math("", "<>")]);
        assert_eq!(*converter.seen.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_interior_trimmed() {
        let converter = Recording::new();
        extract_math("` a + b `", &converter);
        assert_eq!(*converter.seen.borrow(), vec!["a + b".to_string()]);
    }

    #[test]
    fn test_non_greedy_pairs() {
        let segments = extract_math("`a` and `b`", &PassthroughConverter);
        assert_eq!(
            segments,
            vec![
                MathSegment::math("a", "a"),
                MathSegment::text(" and "),
                MathSegment::math("b", "b"),
            ]
        );
    }

    #[test]
    fn test_unpaired_backtick_is_text() {
        assert_eq!(
            extract_math("cost `5", &PassthroughConverter),
            vec![MathSegment::text("cost `5")]
        );
    }

    #[test]
    fn test_span_does_not_cross_lines() {
        assert_eq!(
            extract_math("a `b\nc` d", &PassthroughConverter),
            vec![MathSegment::text("a `b\nc` d")]
        );
    }

    #[test]
    fn test_failure_isolated_per_span() {
        let segments = extract_math("`bad(` then `y`", &reject_bad);
        assert_eq!(
            segments,
            vec![
                MathSegment::Invalid {
                    source: "bad(".into(),
                    reason: "rejected".into(),
                },
                MathSegment::text(" then "),
                MathSegment::math("y", "T(y)"),
            ]
        );
        assert_eq!(segments[0].literal(), "`bad(` (Conversion Error)");
    }

    #[test]
    fn test_source_text_round_trip() {
        let input = "x `a` y `b` z";
        let rebuilt: String = extract_math(input, &PassthroughConverter)
            .iter()
            .map(MathSegment::source_text)
            .collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_count_math_spans() {
        assert_eq!(count_math_spans("`a` `b` `c"), 2);
        assert_eq!(count_math_spans("none"), 0);
    }
}

use std::fmt::Debug;
use std::sync::Arc;

use crate::cache::ResultCache;
use crate::error::FormattingError;
use crate::model::{StyledLine, StyledSegment};
use crate::reflow::{reflow_to_string, reflow_to_styled_lines};
use crate::style::SegmentStyle;
use crate::tokenizer::tokenize;

/// Indentation width used when a caller has no opinion.
pub const DEFAULT_INDENTATION: isize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StringKey {
    value: String,
    indentation: isize,
    line_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StyledKey {
    value: String,
    indentation: isize,
    colored: bool,
    line_prefix: String,
}

/// The public face of the engine: tokenizes and re-flows value text behind a
/// most-recent-call cache per output shape.
///
/// Formatting may be requested every rendered frame while a tooltip is
/// visible, so results are memoized by the full parameter set and returned as
/// shared, read-only `Arc`s; repeated identical calls hand back the same
/// allocation without re-tokenizing. Errors are deterministic for a given
/// input and are cached the same way.
///
/// ```rust
/// use debugflow::Formatter;
///
/// let mut formatter = Formatter::new();
/// let report = formatter.format_as_string("a=1,b={},c=[1,2,3]", 2, "").unwrap();
/// assert_eq!(&*report, "a=1,\nb={},\nc=[\n  1,\n  2,\n  3\n]");
/// ```
#[derive(Debug, Default)]
pub struct Formatter {
    string_cache: ResultCache<StringKey, Result<Arc<str>, FormattingError>>,
    styled_cache: ResultCache<StyledKey, Result<Arc<[StyledLine]>, FormattingError>>,
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            string_cache: ResultCache::new(),
            styled_cache: ResultCache::new(),
        }
    }

    /// Formats `value_text` as a single string with lines joined by `\n`.
    ///
    /// `indentation <= 0` disables multi-line re-flow: the result is
    /// `line_prefix` followed by the unmodified input, without tokenizing.
    pub fn format_as_string(
        &mut self,
        value_text: &str,
        indentation: isize,
        line_prefix: &str,
    ) -> Result<Arc<str>, FormattingError> {
        let key = StringKey {
            value: value_text.to_string(),
            indentation,
            line_prefix: line_prefix.to_string(),
        };

        self.string_cache.cache(key, || {
            if indentation <= 0 {
                return Ok(Arc::from(format!("{line_prefix}{value_text}")));
            }

            let tokens = tokenize(value_text);
            reflow_to_string(&tokens, indentation, line_prefix).map(Arc::from)
        })
    }

    /// Formats `value_text` as styled lines for rich rendering targets.
    ///
    /// With `indentation <= 0` the output is a single line: one neutral
    /// segment when `colored` is unset, or one styled segment per token when
    /// it is set.
    pub fn format_as_styled_lines(
        &mut self,
        value_text: &str,
        indentation: isize,
        colored: bool,
        line_prefix: &str,
    ) -> Result<Arc<[StyledLine]>, FormattingError> {
        let key = StyledKey {
            value: value_text.to_string(),
            indentation,
            colored,
            line_prefix: line_prefix.to_string(),
        };

        self.styled_cache.cache(key, || {
            if indentation <= 0 && !colored {
                let mut line = StyledLine::default();
                let text = format!("{line_prefix}{value_text}");
                if !text.is_empty() {
                    line.segments.push(StyledSegment::new(text, SegmentStyle::Plain));
                }
                return Ok(Arc::from(vec![line]));
            }

            let tokens = tokenize(value_text);
            reflow_to_styled_lines(&tokens, indentation, colored, line_prefix).map(Arc::from)
        })
    }

    /// Renders `value` through its `Debug` representation and formats the
    /// result as with [`format_as_string`](Self::format_as_string).
    pub fn debug_value_as_string<T: Debug>(
        &mut self,
        value: &T,
        indentation: isize,
        line_prefix: &str,
    ) -> Result<Arc<str>, FormattingError> {
        self.format_as_string(&format!("{value:?}"), indentation, line_prefix)
    }

    /// Renders `value` through its `Debug` representation and formats the
    /// result as with [`format_as_styled_lines`](Self::format_as_styled_lines).
    pub fn debug_value_as_styled_lines<T: Debug>(
        &mut self,
        value: &T,
        indentation: isize,
        colored: bool,
        line_prefix: &str,
    ) -> Result<Arc<[StyledLine]>, FormattingError> {
        self.format_as_styled_lines(&format!("{value:?}"), indentation, colored, line_prefix)
    }
}

use crate::error::FormattingError;
use crate::model::{matching_bracket, StyledLine, StyledSegment, Token, TokenKind};
use crate::style::{style_for, SegmentStyle};

/// Re-flows a token sequence into one string with lines joined by `\n`.
///
/// `indentation <= 0` disables re-flow entirely: the result is `line_prefix`
/// followed by every token's content on a single line.
pub fn reflow_to_string(
    tokens: &[Token],
    indentation: isize,
    line_prefix: &str,
) -> Result<String, FormattingError> {
    let mut sink = StringSink::new(line_prefix);
    reflow(tokens, indentation, false, line_prefix, &mut sink)?;
    Ok(sink.finish())
}

/// Re-flows a token sequence into styled lines, one element per output line.
///
/// With `colored` unset every segment carries the neutral [`SegmentStyle::Plain`]
/// style; otherwise styles come from the token classification table.
pub fn reflow_to_styled_lines(
    tokens: &[Token],
    indentation: isize,
    colored: bool,
    line_prefix: &str,
) -> Result<Vec<StyledLine>, FormattingError> {
    let mut sink = StyledSink::new(line_prefix);
    reflow(tokens, indentation, colored, line_prefix, &mut sink)?;
    Ok(sink.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Default,
    FreshLine,
    InsideEmptyBracketPair,
}

/// Where finished tokens and line breaks go. The walk over the token
/// sequence is identical for both output shapes; only these two operations
/// differ.
trait TokenSink {
    fn append(&mut self, text: &str, style: SegmentStyle);
    fn break_line(&mut self, prefix: &str);
}

fn reflow<S: TokenSink>(
    tokens: &[Token],
    indentation: isize,
    colored: bool,
    line_prefix: &str,
    sink: &mut S,
) -> Result<(), FormattingError> {
    if indentation <= 0 {
        for token in tokens {
            sink.append(&token.content, resolve_style(token.kind, colored));
        }
        return Ok(());
    }

    let mut prefixes = LinePrefixes::new(indentation as usize, line_prefix);
    let mut indent_level: isize = 0;
    let mut bracket_history: Vec<char> = Vec::new();
    let mut state = LineState::Default;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Comma => {
                append_token(sink, token, colored, &mut state);
                break_line(sink, &mut prefixes, indent_level, &mut state);
            }
            TokenKind::OpeningBracket => {
                append_token(sink, token, colored, &mut state);
                let opening = first_char(token);
                if next_closes_pair(tokens, index, opening) {
                    state = LineState::InsideEmptyBracketPair;
                } else {
                    bracket_history.push(opening);
                    indent_level += 1;
                    break_line(sink, &mut prefixes, indent_level, &mut state);
                }
            }
            TokenKind::ClosingBracket => {
                if state == LineState::InsideEmptyBracketPair {
                    state = LineState::Default;
                    append_token(sink, token, colored, &mut state);
                    continue;
                }

                let closing = first_char(token);
                let opening = bracket_history.pop().ok_or_else(|| {
                    FormattingError::new(
                        format!("unexpected closing bracket '{closing}' with no open pair"),
                        Some(index),
                    )
                })?;
                if matching_bracket(opening) != Some(closing) {
                    return Err(FormattingError::new(
                        format!(
                            "closing bracket '{closing}' does not match opening bracket '{opening}'"
                        ),
                        Some(index),
                    ));
                }

                indent_level -= 1;
                break_line(sink, &mut prefixes, indent_level, &mut state);
                append_token(sink, token, colored, &mut state);
            }
            _ => append_token(sink, token, colored, &mut state),
        }
    }

    if indent_level != 0 || !bracket_history.is_empty() {
        return Err(FormattingError::simple(format!(
            "input ended with {} unclosed bracket(s)",
            bracket_history.len()
        )));
    }

    Ok(())
}

/// An empty pair such as `{}` or `[]` is always rendered inline, never split
/// across lines.
fn next_closes_pair(tokens: &[Token], index: usize, opening: char) -> bool {
    let Some(next) = tokens.get(index + 1) else {
        return false;
    };
    next.kind == TokenKind::ClosingBracket && matching_bracket(opening) == Some(first_char(next))
}

fn append_token<S: TokenSink>(sink: &mut S, token: &Token, colored: bool, state: &mut LineState) {
    let style = resolve_style(token.kind, colored);

    if *state == LineState::FreshLine {
        // Incidental spacing from the source text must not reappear as a
        // spurious extra indent on a freshly started line.
        sink.append(token.content.trim_start(), style);
        *state = LineState::Default;
    } else {
        sink.append(&token.content, style);
    }
}

fn break_line<S: TokenSink>(
    sink: &mut S,
    prefixes: &mut LinePrefixes,
    indent_level: isize,
    state: &mut LineState,
) {
    sink.break_line(prefixes.for_level(indent_level));
    *state = LineState::FreshLine;
}

fn resolve_style(kind: TokenKind, colored: bool) -> SegmentStyle {
    if colored {
        style_for(kind)
    } else {
        SegmentStyle::Plain
    }
}

fn first_char(token: &Token) -> char {
    token.content.chars().next().unwrap_or('\0')
}

/// Per-level line openers (`line_prefix` plus the indent unit repeated),
/// computed once per distinct level per call and reused for its remainder.
struct LinePrefixes {
    unit: String,
    by_level: Vec<String>,
}

impl LinePrefixes {
    fn new(indentation: usize, line_prefix: &str) -> Self {
        Self {
            unit: " ".repeat(indentation),
            by_level: vec![line_prefix.to_string()],
        }
    }

    fn for_level(&mut self, indent_level: isize) -> &str {
        let level = indent_level.max(0) as usize;
        if level >= self.by_level.len() {
            for next in self.by_level.len()..=level {
                let deeper = format!("{}{}", self.by_level[next - 1], self.unit);
                self.by_level.push(deeper);
            }
        }
        &self.by_level[level]
    }
}

struct StringSink {
    out: String,
}

impl StringSink {
    fn new(line_prefix: &str) -> Self {
        Self { out: line_prefix.to_string() }
    }

    fn finish(self) -> String {
        self.out
    }
}

impl TokenSink for StringSink {
    fn append(&mut self, text: &str, _style: SegmentStyle) {
        self.out.push_str(text);
    }

    fn break_line(&mut self, prefix: &str) {
        self.out.push('\n');
        self.out.push_str(prefix);
    }
}

struct StyledSink {
    lines: Vec<StyledLine>,
    current: StyledLine,
}

impl StyledSink {
    fn new(line_prefix: &str) -> Self {
        Self {
            lines: Vec::new(),
            current: Self::open_line(line_prefix),
        }
    }

    fn open_line(prefix: &str) -> StyledLine {
        let mut line = StyledLine::default();
        if !prefix.is_empty() {
            line.segments.push(StyledSegment::new(prefix, SegmentStyle::Plain));
        }
        line
    }

    fn finish(mut self) -> Vec<StyledLine> {
        if !self.current.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}

impl TokenSink for StyledSink {
    fn append(&mut self, text: &str, style: SegmentStyle) {
        if !text.is_empty() {
            self.current.segments.push(StyledSegment::new(text, style));
        }
    }

    fn break_line(&mut self, prefix: &str) {
        let finished = std::mem::replace(&mut self.current, Self::open_line(prefix));
        self.lines.push(finished);
    }
}

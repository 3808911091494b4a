use std::fmt::{self, Display};

use serde::Serialize;

use crate::style::SegmentStyle;

/// The lexical class of a [`Token`].
///
/// Every character of the input ends up in exactly one token, so the
/// concatenation of all token contents reproduces the input verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A run of ordinary characters: identifiers, field names, stray spaces.
    Word,
    /// A single symbol character such as `=`, `:` or `.`.
    Punctuation,
    /// One of `(`, `{`, `[`.
    OpeningBracket,
    /// One of `)`, `}`, `]`.
    ClosingBracket,
    /// A `,` or `;` separator.
    Comma,
    /// A `"` or `'` delimiting a string.
    Quote,
    /// The characters between a pair of quotes, escapes included.
    StringContent,
    /// A decimal integer literal, optionally negative.
    Integer,
    /// A decimal floating-point literal, optionally negative.
    Float,
    /// A run of hex digits, as found in hashes and ids like `deadbeef`.
    Hex,
    /// A `true` or `false` literal.
    Boolean,
    /// A `null` literal.
    Null,
}

/// One classified lexical unit produced by [`tokenize`](crate::tokenize).
///
/// `content` is the exact substring matched, including the literal bracket or
/// quote character for those kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
}

impl Token {
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Self { kind, content: content.into() }
    }
}

/// The closing character paired with `opening`, for the three bracket
/// families the engine understands.
pub fn matching_bracket(opening: char) -> Option<char> {
    match opening {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}

/// A contiguous run of characters within one output line, rendered with a
/// single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledSegment {
    pub text: String,
    pub style: SegmentStyle,
}

impl StyledSegment {
    pub fn new(text: impl Into<String>, style: SegmentStyle) -> Self {
        Self { text: text.into(), style }
    }
}

/// One output line of the styled rendering: an ordered list of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyledLine {
    pub segments: Vec<StyledSegment>,
}

impl StyledLine {
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|segment| segment.text.is_empty())
    }

    /// The line's text with styling discarded.
    pub fn text(&self) -> String {
        self.segments.iter().map(|segment| segment.text.as_str()).collect()
    }
}

impl Display for StyledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

use serde::Serialize;

use crate::model::TokenKind;

/// The display style attached to a [`StyledSegment`](crate::StyledSegment).
///
/// Styles are semantic rather than concrete colors; consumers map them to
/// whatever their rendering target offers. `Plain` is the single neutral
/// style used for every segment when coloring is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStyle {
    /// Monochrome fallback, also used for line prefixes.
    Plain,
    /// Identifiers and field names.
    Name,
    /// Brackets, commas, quotes and other punctuation.
    Structural,
    /// Quoted string content.
    String,
    /// Integer, float, hex and boolean literals.
    Number,
    /// The `null` literal.
    Null,
}

/// The token classification table: which style a token kind is rendered with
/// when coloring is enabled.
///
/// Pure data; extending [`TokenKind`] means adding a row here and nothing in
/// the reflow logic.
pub fn style_for(kind: TokenKind) -> SegmentStyle {
    match kind {
        TokenKind::Word => SegmentStyle::Name,
        TokenKind::Punctuation
        | TokenKind::OpeningBracket
        | TokenKind::ClosingBracket
        | TokenKind::Comma
        | TokenKind::Quote => SegmentStyle::Structural,
        TokenKind::StringContent => SegmentStyle::String,
        TokenKind::Integer | TokenKind::Float | TokenKind::Hex | TokenKind::Boolean => {
            SegmentStyle::Number
        }
        TokenKind::Null => SegmentStyle::Null,
    }
}

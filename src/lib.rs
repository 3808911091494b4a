//! # debugflow
//!
//! A formatter that re-flows single-line `Debug`-style value text into
//! indented, optionally syntax-colored multi-line reports.
//!
//! The default stringification of a nested value, `format!("{:?}", value)`
//! and its lookalikes in other ecosystems, arrives as one long line of
//! bracket-and-comma delimited text. debugflow re-renders that line as a
//! structured report:
//!
//! - One element per line, split at commas and bracket boundaries
//! - Consistent indentation that follows bracket nesting
//! - Empty pairs like `{}` and `[]` kept inline
//! - Bracket-pair validation (`[1,2)` is rejected, not silently mangled)
//! - Either a plain string or styled line segments, from the same traversal
//!
//! ## Command-Line Tool
//!
//! This crate includes the `dflow` CLI tool for re-flowing value text from
//! the terminal:
//!
//! ```sh
//! # Install
//! cargo install debugflow
//!
//! # Re-flow a debug line from stdin
//! echo 'Item { id: 42, tags: ["a", "b"] }' | dflow
//!
//! # Two-space indent, ANSI colors forced on
//! dflow --indent 2 --color always input.txt
//! ```
//!
//! Run `dflow --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use debugflow::Formatter;
//!
//! let input = r#"Player { name: "Alice", scores: [95, 87], active: true }"#;
//!
//! let mut formatter = Formatter::new();
//! let report = formatter.format_as_string(input, 4, "").unwrap();
//!
//! println!("{}", report);
//! ```
//!
//! produces:
//!
//! ```text
//! Player {
//!     name: "Alice",
//!     scores: [
//!         95,
//!         87
//!     ],
//!     active: true
//! }
//! ```
//!
//! ## Styled Output
//!
//! For rich rendering targets (tooltips, TUIs), [`Formatter::format_as_styled_lines`]
//! returns one [`StyledLine`] per output line, each a list of
//! [`StyledSegment`]s classified by the token table: identifiers, structural
//! punctuation, string content, numeric literals and `null` each carry their
//! own [`SegmentStyle`].
//!
//! ```rust
//! use debugflow::{Formatter, SegmentStyle};
//!
//! let mut formatter = Formatter::new();
//! let lines = formatter.format_as_styled_lines("key=7", 4, true, "").unwrap();
//!
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].segments.last().unwrap().style, SegmentStyle::Number);
//! ```
//!
//! ## Caching
//!
//! Tooltip hosts re-request the same formatting every rendered frame, so
//! [`Formatter`] memoizes the most recent call per output shape and returns
//! shared `Arc` results; identical consecutive calls cost one key comparison
//! and no re-tokenization. Treat returned values as read-only.
//!
//! ## Leniency
//!
//! Tokenization never fails: an unterminated quote consumes to end of input.
//! The only error is structural (mismatched or unbalanced brackets) and it
//! is deterministic, so callers should fall back to showing the original
//! one-line text rather than retry.

mod cache;
mod error;
mod formatter;
mod model;
mod reflow;
mod style;
mod tokenizer;

pub use crate::cache::ResultCache;
pub use crate::error::FormattingError;
pub use crate::formatter::{Formatter, DEFAULT_INDENTATION};
pub use crate::model::{matching_bracket, StyledLine, StyledSegment, Token, TokenKind};
pub use crate::reflow::{reflow_to_string, reflow_to_styled_lines};
pub use crate::style::{style_for, SegmentStyle};
pub use crate::tokenizer::tokenize;

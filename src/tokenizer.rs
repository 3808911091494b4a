use crate::model::{Token, TokenKind};

const WRAPPED_KEYWORDS: [&str; 3] = ["keybind", "literal", "pattern"];

/// Splits a single-line value representation into classified tokens.
///
/// One forward pass; the concatenated token contents reproduce `input`
/// exactly. Tokenization never fails: malformed input such as an unterminated
/// quote simply consumes to end of input, and bracket validity is checked
/// later by the reflow engine.
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new(input).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Default,
    InString,
    InWrappedString,
}

struct Scanner<'a> {
    input: &'a str,
    chars: Vec<char>,
    byte_indices: Vec<usize>,
    index: usize,
    tokens: Vec<Token>,
    pending_start: usize,
    pending_kind: TokenKind,
    mode: Mode,
    opening_quote: char,
    escaped: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        let mut chars: Vec<char> = Vec::new();
        let mut byte_indices: Vec<usize> = Vec::new();
        for (idx, ch) in input.char_indices() {
            byte_indices.push(idx);
            chars.push(ch);
        }
        byte_indices.push(input.len());

        Self {
            input,
            chars,
            byte_indices,
            index: 0,
            tokens: Vec::new(),
            pending_start: 0,
            pending_kind: TokenKind::Word,
            mode: Mode::Default,
            opening_quote: '\0',
            escaped: false,
        }
    }

    fn run(mut self) -> Vec<Token> {
        while self.index < self.chars.len() {
            match self.mode {
                Mode::Default => self.scan_default(),
                Mode::InString => self.scan_string(),
                Mode::InWrappedString => self.scan_wrapped_string(),
            }
        }
        self.flush_pending();
        self.tokens
    }

    fn scan_default(&mut self) {
        let ch = self.chars[self.index];

        // Contextual matches first; each bails out without consuming anything
        // when its boundary rules do not hold.
        if is_wrapped_string_begin_char(ch) && self.match_wrapped_string_begin() {
            return;
        }
        if is_number_begin_char(ch) && self.match_number() {
            return;
        }
        if is_boolean_begin_char(ch) && self.match_keyword(&["true", "false"], TokenKind::Boolean) {
            return;
        }
        if ch == 'n' && self.match_keyword(&["null"], TokenKind::Null) {
            return;
        }

        match ch {
            ',' | ';' => self.emit_single(TokenKind::Comma),
            '(' | '{' | '[' => self.emit_single(TokenKind::OpeningBracket),
            ')' | '}' | ']' => self.emit_single(TokenKind::ClosingBracket),
            '"' | '\'' => {
                self.emit_single(TokenKind::Quote);
                self.opening_quote = ch;
                self.escaped = false;
                self.mode = Mode::InString;
            }
            _ if is_punctuation_char(ch) => self.emit_single(TokenKind::Punctuation),
            _ => self.extend_pending(TokenKind::Word),
        }
    }

    fn scan_string(&mut self) {
        let ch = self.chars[self.index];

        if ch == self.opening_quote && !self.escaped {
            self.emit_single(TokenKind::Quote);
            self.opening_quote = '\0';
            self.mode = Mode::Default;
            return;
        }

        // Parity tracking so a backslash that is itself escaped does not
        // escape a following quote.
        self.escaped = ch == '\\' && !self.escaped;
        self.extend_pending(TokenKind::StringContent);
    }

    fn scan_wrapped_string(&mut self) {
        if self.chars[self.index] == '}' {
            self.emit_single(TokenKind::ClosingBracket);
            self.mode = Mode::Default;
        } else {
            self.extend_pending(TokenKind::StringContent);
        }
    }

    /// Matches `keyword{` at the current position, where the keyword must sit
    /// on a word boundary. The keyword becomes a Word token and the brace an
    /// OpeningBracket, with everything up to the matching `}` treated as
    /// string content.
    fn match_wrapped_string_begin(&mut self) -> bool {
        if self.prev_char().is_some_and(is_word_char) {
            return false;
        }

        for keyword in WRAPPED_KEYWORDS {
            let rest = self.rest();
            if rest.len() > keyword.len()
                && rest.starts_with(keyword)
                && rest.as_bytes()[keyword.len()] == b'{'
            {
                self.accept_match(self.index + keyword.len(), TokenKind::Word);
                self.emit_single(TokenKind::OpeningBracket);
                self.mode = Mode::InWrappedString;
                return true;
            }
        }

        false
    }

    fn match_number(&mut self) -> bool {
        self.match_integer() || self.match_float() || self.match_hex()
    }

    // Integer and float boundaries forbid an adjacent word char, dot or dash
    // so digits embedded in identifiers or dotted versions stay words. Hex
    // allows an adjacent dash. These rules are intentional; keep them even
    // where they look overly strict.

    fn match_integer(&mut self) -> bool {
        if self.prev_char().is_some_and(|c| is_word_char(c) || c == '.' || c == '-') {
            return false;
        }

        let mut end = self.index;
        if self.chars.get(end) == Some(&'-') {
            end += 1;
        }
        let digits_start = end;
        while matches!(self.chars.get(end), Some(c) if c.is_ascii_digit()) {
            end += 1;
        }
        if end == digits_start {
            return false;
        }
        if matches!(self.chars.get(end), Some(&c) if is_word_char(c) || c == '.' || c == '-') {
            return false;
        }

        self.accept_match(end, TokenKind::Integer);
        true
    }

    fn match_float(&mut self) -> bool {
        if self.prev_char().is_some_and(|c| is_word_char(c) || c == '.' || c == '-') {
            return false;
        }

        let mut end = self.index;
        if self.chars.get(end) == Some(&'-') {
            end += 1;
        }
        let whole_start = end;
        while matches!(self.chars.get(end), Some(c) if c.is_ascii_digit()) {
            end += 1;
        }
        if end == whole_start || self.chars.get(end) != Some(&'.') {
            return false;
        }
        end += 1;
        let fraction_start = end;
        while matches!(self.chars.get(end), Some(c) if c.is_ascii_digit()) {
            end += 1;
        }
        if end == fraction_start {
            return false;
        }
        if matches!(self.chars.get(end), Some(&c) if is_word_char(c) || c == '.' || c == '-') {
            return false;
        }

        self.accept_match(end, TokenKind::Float);
        true
    }

    fn match_hex(&mut self) -> bool {
        if self.prev_char().is_some_and(|c| is_word_char(c) || c == '.') {
            return false;
        }

        let mut end = self.index;
        while matches!(self.chars.get(end), Some(c) if c.is_ascii_hexdigit()) {
            end += 1;
        }
        if end == self.index {
            return false;
        }
        if matches!(self.chars.get(end), Some(&c) if is_word_char(c) || c == '.') {
            return false;
        }

        self.accept_match(end, TokenKind::Hex);
        true
    }

    fn match_keyword(&mut self, keywords: &[&str], kind: TokenKind) -> bool {
        if self.prev_char().is_some_and(is_word_char) {
            return false;
        }

        for keyword in keywords {
            if !self.rest().starts_with(keyword) {
                continue;
            }
            let end = self.index + keyword.len();
            if matches!(self.chars.get(end), Some(&c) if is_word_char(c)) {
                continue;
            }
            self.accept_match(end, kind);
            return true;
        }

        false
    }

    /// Flushes the pending token, then emits `[index, end)` as one token of
    /// the given kind and resumes scanning after it.
    fn accept_match(&mut self, end: usize, kind: TokenKind) {
        self.flush_pending();
        let text = self.slice(self.index, end);
        self.tokens.push(Token::new(kind, text));
        self.index = end;
        self.pending_start = end;
    }

    fn emit_single(&mut self, kind: TokenKind) {
        self.flush_pending();
        let text = self.slice(self.index, self.index + 1);
        self.tokens.push(Token::new(kind, text));
        self.index += 1;
        self.pending_start = self.index;
    }

    fn extend_pending(&mut self, kind: TokenKind) {
        self.pending_kind = kind;
        self.index += 1;
    }

    fn flush_pending(&mut self) {
        if self.pending_start < self.index {
            let text = self.slice(self.pending_start, self.index);
            self.tokens.push(Token::new(self.pending_kind, text));
        }
        self.pending_start = self.index;
        self.pending_kind = TokenKind::Word;
    }

    fn prev_char(&self) -> Option<char> {
        if self.index == 0 {
            None
        } else {
            Some(self.chars[self.index - 1])
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.byte_indices[self.index]..]
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[self.byte_indices[start]..self.byte_indices[end]]
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_punctuation_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '=' | '.' | ':' | '!' | '?' | '@' | '#' | '&' | '%' | '~' | '<'
            | '>' | '|' | '^' | '\\'
    )
}

fn is_wrapped_string_begin_char(ch: char) -> bool {
    matches!(ch, 'k' | 'l' | 'p')
}

fn is_number_begin_char(ch: char) -> bool {
    ch.is_ascii_hexdigit() || ch == '-'
}

fn is_boolean_begin_char(ch: char) -> bool {
    matches!(ch, 't' | 'f')
}

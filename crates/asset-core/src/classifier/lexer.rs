//! Lexer for PHP configuration files
//!
//! Produces a flat token stream covering the whole input, inline HTML
//! included. The lexer never fails: unterminated strings, comments and
//! heredocs extend to the end of the input.

use super::token::{Keyword, Token, TokenKind};

/// Multi-character operators, longest first.
const OPERATORS: &[&str] = &[
    "?->", "**=", "...", "<=>", "===", "!==", "<<=", ">>=", "??=", "::", "=>", "->", "++", "--",
    "==", "!=", "<>", "<=", ">=", "&&", "||", "??", "+=", "-=", "*=", "/=", ".=", "%=", "&=",
    "|=", "^=", "<<", ">>", "**",
];

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_ident_char(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit() || b == b'_'
}

fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1' | b'_')
}

fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7' | b'_')
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= bytes.len() {
        return None;
    }
    bytes[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| offset + from)
}

/// Streaming lexer over a source string.
pub struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    in_code: bool,
    last_significant: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Lex a complete file, which starts in inline HTML until the first
    /// open tag.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            line: 1,
            in_code: false,
            last_significant: None,
        }
    }

    /// Lex a code fragment with no open tag, such as an expression embedded
    /// in an interpolated string.
    pub fn code(src: &'a str) -> Self {
        Self {
            in_code: true,
            ..Self::new(src)
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn starts_with(&self, s: &str) -> bool {
        self.bytes[self.pos..].starts_with(s.as_bytes())
    }

    fn starts_with_ignore_case(&self, s: &str) -> bool {
        self.bytes.len() >= self.pos + s.len()
            && self.bytes[self.pos..self.pos + s.len()].eq_ignore_ascii_case(s.as_bytes())
    }

    fn skip_newline(&mut self) {
        match self.peek(0) {
            Some(b'\n') => self.pos += 1,
            Some(b'\r') => {
                self.pos += 1;
                if self.peek(0) == Some(b'\n') {
                    self.pos += 1;
                }
            }
            _ => {}
        }
    }

    fn skip_ident(&mut self) {
        while self.peek(0).is_some_and(is_ident_char) {
            self.pos += 1;
        }
    }

    fn emit(&mut self, kind: TokenKind, start: usize) -> Token<'a> {
        let text = &self.src[start..self.pos];
        let token = Token {
            kind,
            text,
            line: self.line,
        };
        self.line += text.bytes().filter(|&b| b == b'\n').count();
        if !kind.is_insignificant() {
            self.last_significant = Some(kind);
        }
        token
    }

    fn lex_html(&mut self) -> Token<'a> {
        let start = self.pos;
        if self.starts_with("<?") {
            if self.starts_with_ignore_case("<?php") && self.peek(5).is_none_or(is_whitespace) {
                self.pos += 5;
                if self.peek(0).is_some_and(|b| b == b'\r' || b == b'\n') {
                    self.skip_newline();
                } else if self.peek(0).is_some() {
                    self.pos += 1;
                }
            } else if self.starts_with("<?=") {
                self.pos += 3;
            } else {
                // Short open tag; scanning more as code only makes the
                // classifier stricter.
                self.pos += 2;
            }
            self.in_code = true;
            return self.emit(TokenKind::OpenTag, start);
        }

        self.pos = find(self.bytes, self.pos, b"<?").unwrap_or(self.bytes.len());
        self.emit(TokenKind::InlineHtml, start)
    }

    fn lex_code(&mut self) -> Token<'a> {
        let start = self.pos;
        let b = self.bytes[self.pos];

        if is_whitespace(b) {
            while self.peek(0).is_some_and(is_whitespace) {
                self.pos += 1;
            }
            return self.emit(TokenKind::Whitespace, start);
        }

        if self.starts_with("?>") {
            self.pos += 2;
            self.skip_newline();
            self.in_code = false;
            return self.emit(TokenKind::CloseTag, start);
        }

        if self.starts_with("#[") {
            self.pos += 2;
            return self.emit(TokenKind::Attribute, start);
        }

        if b == b'#' || self.starts_with("//") {
            self.skip_line_comment();
            return self.emit(TokenKind::Comment, start);
        }

        if self.starts_with("/*") {
            let doc = self.starts_with("/**") && self.peek(3).is_some_and(is_whitespace);
            self.pos = find(self.bytes, self.pos + 2, b"*/").map_or(self.bytes.len(), |end| end + 2);
            let kind = if doc {
                TokenKind::DocComment
            } else {
                TokenKind::Comment
            };
            return self.emit(kind, start);
        }

        if b == b'$' && self.peek(1).is_some_and(is_ident_start) {
            self.pos += 1;
            self.skip_ident();
            return self.emit(TokenKind::Variable, start);
        }

        if is_ident_start(b) || (b == b'\\' && self.peek(1).is_some_and(is_ident_start)) {
            return self.lex_name(start);
        }

        if b.is_ascii_digit() || (b == b'.' && self.peek(1).is_some_and(|c| c.is_ascii_digit())) {
            return self.lex_number(start);
        }

        match b {
            b'\'' => {
                self.skip_quoted(b'\'');
                return self.emit(TokenKind::ConstantString, start);
            }
            b'"' => {
                let kind = if self.skip_quoted(b'"') {
                    TokenKind::InterpolatedString
                } else {
                    TokenKind::ConstantString
                };
                return self.emit(kind, start);
            }
            b'`' => {
                self.skip_quoted(b'`');
                return self.emit(TokenKind::ShellExec, start);
            }
            _ => {}
        }

        if self.starts_with("<<<")
            && let Some(kind) = self.lex_heredoc()
        {
            return self.emit(kind, start);
        }

        for op in OPERATORS {
            if self.starts_with(op) {
                self.pos += op.len();
                let kind = match *op {
                    "::" => TokenKind::DoubleColon,
                    "=>" => TokenKind::DoubleArrow,
                    "->" => TokenKind::ObjectOperator,
                    "?->" => TokenKind::NullsafeObjectOperator,
                    _ => TokenKind::Operator,
                };
                return self.emit(kind, start);
            }
        }

        // Every byte not matched above is ASCII, so this stays on a char
        // boundary.
        self.pos += 1;
        self.emit(TokenKind::Punct(b as char), start)
    }

    fn skip_line_comment(&mut self) {
        while let Some(b) = self.peek(0) {
            if b == b'\n' || self.starts_with("?>") {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skip a quoted literal starting at the opening quote. Returns whether
    /// the body contains variable interpolation.
    fn skip_quoted(&mut self, quote: u8) -> bool {
        let mut interpolated = false;
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            match b {
                b'\\' => {
                    self.pos = (self.pos + 2).min(self.bytes.len());
                    continue;
                }
                _ if b == quote => {
                    self.pos += 1;
                    break;
                }
                b'$' if quote != b'\''
                    && self.peek(1).is_some_and(|c| is_ident_start(c) || c == b'{') =>
                {
                    interpolated = true;
                }
                b'{' if quote != b'\'' && self.peek(1) == Some(b'$') => interpolated = true,
                _ => {}
            }
            self.pos += 1;
        }
        interpolated
    }

    fn lex_name(&mut self, start: usize) -> Token<'a> {
        let mut qualified = false;
        if self.bytes[self.pos] == b'\\' {
            self.pos += 1;
            qualified = true;
        }
        self.skip_ident();
        while self.peek(0) == Some(b'\\') && self.peek(1).is_some_and(is_ident_start) {
            self.pos += 1;
            self.skip_ident();
            qualified = true;
        }

        let word = &self.src[start..self.pos];
        let property_name = matches!(
            self.last_significant,
            Some(TokenKind::ObjectOperator | TokenKind::NullsafeObjectOperator)
        );
        let kind = if qualified || property_name {
            TokenKind::Name
        } else if word.eq_ignore_ascii_case("enum") {
            if self.enum_declaration_follows() {
                TokenKind::Keyword(Keyword::Enum)
            } else {
                TokenKind::Name
            }
        } else {
            Keyword::lookup(word).map_or(TokenKind::Name, TokenKind::Keyword)
        };
        self.emit(kind, start)
    }

    /// `enum` starts a declaration only when followed by whitespace and a
    /// name other than `extends`/`implements`.
    fn enum_declaration_follows(&self) -> bool {
        let mut i = self.pos;
        if !self.bytes.get(i).copied().is_some_and(is_whitespace) {
            return false;
        }
        while self.bytes.get(i).copied().is_some_and(is_whitespace) {
            i += 1;
        }
        let word_start = i;
        if !self.bytes.get(i).copied().is_some_and(is_ident_start) {
            return false;
        }
        while self.bytes.get(i).copied().is_some_and(is_ident_char) {
            i += 1;
        }
        let word = &self.src[word_start..i];
        !word.eq_ignore_ascii_case("extends") && !word.eq_ignore_ascii_case("implements")
    }

    fn lex_number(&mut self, start: usize) -> Token<'a> {
        let radix_digits: Option<fn(u8) -> bool> = if self.starts_with_ignore_case("0x") {
            Some(is_hex_digit)
        } else if self.starts_with_ignore_case("0b") {
            Some(is_binary_digit)
        } else if self.starts_with_ignore_case("0o") {
            Some(is_octal_digit)
        } else {
            None
        };
        if let Some(is_digit) = radix_digits {
            self.pos += 2;
            while self.peek(0).is_some_and(is_digit) {
                self.pos += 1;
            }
            return self.emit(TokenKind::Integer, start);
        }

        let is_digit = |b: u8| b.is_ascii_digit() || b == b'_';
        let mut float = false;
        while self.peek(0).is_some_and(is_digit) {
            self.pos += 1;
        }
        if self.peek(0) == Some(b'.') && self.peek(1).is_some_and(|b| b.is_ascii_digit()) {
            float = true;
            self.pos += 1;
            while self.peek(0).is_some_and(is_digit) {
                self.pos += 1;
            }
        }
        if self.peek(0).is_some_and(|b| b == b'e' || b == b'E') {
            let signed = self.peek(1).is_some_and(|b| b == b'+' || b == b'-');
            let digit_at = if signed { 2 } else { 1 };
            if self.peek(digit_at).is_some_and(|b| b.is_ascii_digit()) {
                float = true;
                self.pos += digit_at;
                while self.peek(0).is_some_and(is_digit) {
                    self.pos += 1;
                }
            }
        }
        let kind = if float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        self.emit(kind, start)
    }

    /// Lex a heredoc or nowdoc starting at `<<<`. Returns `None` (leaving
    /// the position untouched) when the header is malformed.
    fn lex_heredoc(&mut self) -> Option<TokenKind> {
        let bytes = self.bytes;
        let mut i = self.pos + 3;
        while bytes.get(i).is_some_and(|&b| b == b' ' || b == b'\t') {
            i += 1;
        }
        let quote = match bytes.get(i).copied() {
            Some(q) if q == b'\'' || q == b'"' => {
                i += 1;
                Some(q)
            }
            _ => None,
        };
        let label_start = i;
        if !bytes.get(i).copied().is_some_and(is_ident_start) {
            return None;
        }
        while bytes.get(i).copied().is_some_and(is_ident_char) {
            i += 1;
        }
        let label = &self.src[label_start..i];
        if let Some(q) = quote {
            if bytes.get(i) != Some(&q) {
                return None;
            }
            i += 1;
        }
        match bytes.get(i) {
            Some(b'\n') => i += 1,
            Some(b'\r') => {
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => return None,
        }

        let body_start = i;
        let mut line_start = i;
        let mut end = None;
        while line_start <= bytes.len() {
            let mut j = line_start;
            while bytes.get(j).is_some_and(|&b| b == b' ' || b == b'\t') {
                j += 1;
            }
            if self.src[j..].starts_with(label)
                && !bytes.get(j + label.len()).copied().is_some_and(is_ident_char)
            {
                end = Some((line_start, j + label.len()));
                break;
            }
            match find(bytes, line_start, b"\n") {
                Some(newline) => line_start = newline + 1,
                None => break,
            }
        }

        let (body_end, token_end) = end.unwrap_or((bytes.len(), bytes.len()));
        let body = &bytes[body_start..body_end];
        self.pos = token_end;

        if quote == Some(b'\'') || !has_interpolation(body) {
            Some(TokenKind::ConstantString)
        } else {
            Some(TokenKind::InterpolatedString)
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        Some(if self.in_code {
            self.lex_code()
        } else {
            self.lex_html()
        })
    }
}

fn has_interpolation(body: &[u8]) -> bool {
    let mut i = 0;
    while i < body.len() {
        match body[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'$' if body.get(i + 1).is_some_and(|&c| is_ident_start(c) || c == b'{') => {
                return true;
            }
            b'{' if body.get(i + 1) == Some(&b'$') => return true,
            _ => {}
        }
        i += 1;
    }
    false
}

/// Index of the `}` closing the `{` at `open`, or the input length when
/// unbalanced. Quoted strings inside the braces are skipped.
fn matching_brace(bytes: &[u8], open: usize) -> usize {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == b'\\' {
                i += 2;
                continue;
            }
            if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match b {
            b'\'' | b'"' => quote = Some(b),
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

/// Extract the complex expressions (`{$...}` and `${...}`) embedded in an
/// interpolated string literal.
///
/// Simple interpolation (`$name`, `$name->prop`, `$name[key]`) only reads
/// values and is not returned.
pub fn embedded_expressions(literal: &str) -> Vec<&str> {
    let bytes = literal.as_bytes();
    let mut fragments = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'{' if bytes.get(i + 1) == Some(&b'$') => {
                let end = matching_brace(bytes, i);
                fragments.push(&literal[i + 1..end]);
                i = end + 1;
            }
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                let end = matching_brace(bytes, i + 1);
                fragments.push(&literal[i + 2..end]);
                i = end + 1;
            }
            _ => i += 1,
        }
    }
    fragments
}

/// Tokenize a complete file.
pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    Lexer::new(src).collect()
}

/// Tokenize a code fragment that has no open tag.
pub fn tokenize_code(src: &str) -> Vec<Token<'_>> {
    Lexer::code(src).collect()
}

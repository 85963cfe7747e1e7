//! Token types produced by the configuration lexer

/// Keywords the classifier and the loader care about.
///
/// Every other reserved word is reported as [`TokenKind::Name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Class,
    Interface,
    Trait,
    Enum,
    Clone,
    Eval,
    /// `exit` and its alias `die`
    Exit,
    Extends,
    New,
    Return,
    Array,
    Namespace,
    Use,
    As,
    Function,
    Fn,
}

impl Keyword {
    /// Look up a keyword, case-insensitively.
    ///
    /// `enum` is contextual and never returned here; the lexer decides it
    /// from the following token.
    pub fn lookup(word: &str) -> Option<Self> {
        let keyword = match word.to_ascii_lowercase().as_str() {
            "class" => Self::Class,
            "interface" => Self::Interface,
            "trait" => Self::Trait,
            "clone" => Self::Clone,
            "eval" => Self::Eval,
            "exit" | "die" => Self::Exit,
            "extends" => Self::Extends,
            "new" => Self::New,
            "return" => Self::Return,
            "array" => Self::Array,
            "namespace" => Self::Namespace,
            "use" => Self::Use,
            "as" => Self::As,
            "function" => Self::Function,
            "fn" => Self::Fn,
            _ => return None,
        };
        Some(keyword)
    }
}

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Text outside of `<?php ... ?>`
    InlineHtml,
    OpenTag,
    CloseTag,
    Whitespace,
    Comment,
    DocComment,
    /// `$name`
    Variable,
    /// Identifier or namespaced name (`Foo`, `\Foo\Bar`, `namespace\Baz`)
    Name,
    Keyword(Keyword),
    Integer,
    Float,
    /// Quoted literal without interpolation: single quoted, nowdoc, or a
    /// double quoted / heredoc string with no embedded variables
    ConstantString,
    /// Double quoted or heredoc string with embedded variables
    InterpolatedString,
    /// Backtick string, executed by the shell
    ShellExec,
    /// `#[`
    Attribute,
    /// `::`
    DoubleColon,
    /// `=>`
    DoubleArrow,
    /// `->`
    ObjectOperator,
    /// `?->`
    NullsafeObjectOperator,
    /// Any other multi-character operator
    Operator,
    /// Any single-character token
    Punct(char),
}

impl TokenKind {
    /// Whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment | Self::DocComment)
    }

    /// Tokens that carry no meaning for evaluation: trivia plus tags and
    /// inline text.
    pub fn is_insignificant(self) -> bool {
        self.is_trivia() || matches!(self, Self::OpenTag | Self::CloseTag | Self::InlineHtml)
    }
}

/// A token borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// 1-based line of the token's first character
    pub line: usize,
}

impl Token<'_> {
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }
}

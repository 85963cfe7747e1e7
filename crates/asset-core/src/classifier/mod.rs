//! Static safety classification of package configuration
//!
//! Package configuration is third-party PHP source. Before the loader looks
//! at it, the classifier scans its token stream and rejects any file that
//! declares types, instantiates or clones objects, reaches into static
//! members, evaluates code, shells out, or terminates the process.
//!
//! The check works by exclusion: every token kind not listed in
//! [`UnsafeKind`] is accepted. It may reject harmless files; it must never
//! accept one using a listed construct.

pub mod lexer;
pub mod token;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use lexer::{embedded_expressions, tokenize, tokenize_code};
use token::{Keyword, Token, TokenKind};

/// Quoted `asset_manager` key followed by `=>`, whitespace tolerant.
static ASSET_CONFIG_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]asset_manager['"]\s*=>"#).unwrap());

/// Cheap pre-filter: does this source mention the asset configuration key
/// at all?
///
/// Files that fail this check are treated as declaring no assets and are
/// never tokenized, so they cannot trigger an unsafe-configuration warning.
pub fn declares_asset_config(source: &str) -> bool {
    ASSET_CONFIG_MARKER.is_match(source)
}

/// Construct that makes a configuration file unsafe to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnsafeKind {
    /// `class`, `interface`, `trait` or `enum` declaration
    TypeDeclaration,
    Clone,
    /// `::` not followed by the `class` pseudo-constant
    StaticAccess,
    Eval,
    /// `exit` or `die`
    Exit,
    Extends,
    New,
    /// Backtick shell execution
    ShellExec,
}

impl UnsafeKind {
    fn of(kind: TokenKind) -> Option<Self> {
        let unsafe_kind = match kind {
            TokenKind::Keyword(
                Keyword::Class | Keyword::Interface | Keyword::Trait | Keyword::Enum,
            ) => Self::TypeDeclaration,
            TokenKind::Keyword(Keyword::Clone) => Self::Clone,
            TokenKind::Keyword(Keyword::Eval) => Self::Eval,
            TokenKind::Keyword(Keyword::Exit) => Self::Exit,
            TokenKind::Keyword(Keyword::Extends) => Self::Extends,
            TokenKind::Keyword(Keyword::New) => Self::New,
            TokenKind::DoubleColon => Self::StaticAccess,
            TokenKind::ShellExec => Self::ShellExec,
            _ => return None,
        };
        Some(unsafe_kind)
    }
}

impl fmt::Display for UnsafeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::TypeDeclaration => "type declaration",
            Self::Clone => "object cloning",
            Self::StaticAccess => "static member access",
            Self::Eval => "code evaluation",
            Self::Exit => "process termination",
            Self::Extends => "class inheritance",
            Self::New => "object instantiation",
            Self::ShellExec => "shell execution",
        };
        f.write_str(description)
    }
}

/// The first unsafe construct found in a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsafeConstruct {
    pub kind: UnsafeKind,
    /// Source text of the offending token
    pub token: String,
    /// 1-based line of the offending token
    pub line: usize,
}

impl fmt::Display for UnsafeConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (`{}` on line {})", self.kind, self.token, self.line)
    }
}

/// Outcome of classifying a configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Safe,
    Unsafe(UnsafeConstruct),
}

impl Classification {
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }
}

/// Classify a complete configuration file.
pub fn classify(source: &str) -> Classification {
    match scan(&tokenize(source), 0) {
        Some(construct) => Classification::Unsafe(construct),
        None => Classification::Safe,
    }
}

/// Shorthand for `classify(source).is_safe()`.
pub fn is_safe(source: &str) -> bool {
    classify(source).is_safe()
}

fn next_significant(tokens: &[Token<'_>], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&i| !tokens[i].kind.is_trivia())
}

/// Scan a token stream; `line_offset` shifts reported lines for fragments
/// lexed out of a string literal.
fn scan(tokens: &[Token<'_>], line_offset: usize) -> Option<UnsafeConstruct> {
    let reject = |kind: UnsafeKind, token: &Token<'_>| UnsafeConstruct {
        kind,
        token: token.text.to_string(),
        line: token.line + line_offset,
    };

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        match token.kind {
            TokenKind::DoubleColon => match next_significant(tokens, i + 1) {
                Some(next) if tokens[next].is_keyword(Keyword::Class) => {
                    // `Foo::class` only names a class
                    i = next + 1;
                    continue;
                }
                _ => return Some(reject(UnsafeKind::StaticAccess, token)),
            },
            TokenKind::InterpolatedString => {
                for fragment in embedded_expressions(token.text) {
                    let fragment_tokens = tokenize_code(fragment);
                    if let Some(construct) = scan(&fragment_tokens, token.line - 1 + line_offset)
                    {
                        return Some(construct);
                    }
                }
            }
            kind => {
                if let Some(unsafe_kind) = UnsafeKind::of(kind) {
                    return Some(reject(unsafe_kind, token));
                }
            }
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_tolerates_whitespace_and_quotes() {
        assert!(declares_asset_config("return ['asset_manager' => []];"));
        assert!(declares_asset_config("return [\"asset_manager\"\n\t=>\n[]];"));
        assert!(!declares_asset_config("return ['asset-manager' => []];"));
        assert!(!declares_asset_config("// asset_manager"));
    }

    #[test]
    fn unsafe_construct_reports_line() {
        let source = "<?php\nreturn [\n    'x' => new Foo(),\n];";
        match classify(source) {
            Classification::Unsafe(construct) => {
                assert_eq!(construct.kind, UnsafeKind::New);
                assert_eq!(construct.line, 3);
                assert_eq!(construct.token, "new");
            }
            Classification::Safe => panic!("expected unsafe"),
        }
    }

    #[test]
    fn class_pseudo_constant_after_comment_is_safe() {
        assert!(is_safe("<?php return [Foo:: /* name */ class];"));
    }

    #[test]
    fn interpolated_expression_lines_are_offset() {
        let source = "<?php\n$a = \"{$x->f(new Foo)}\";";
        match classify(source) {
            Classification::Unsafe(construct) => {
                assert_eq!(construct.kind, UnsafeKind::New);
                assert_eq!(construct.line, 2);
            }
            Classification::Safe => panic!("expected unsafe"),
        }
    }

    #[test]
    fn display_names_the_construct() {
        let construct = UnsafeConstruct {
            kind: UnsafeKind::StaticAccess,
            token: "::".into(),
            line: 4,
        };
        assert_eq!(construct.to_string(), "static member access (`::` on line 4)");
    }
}

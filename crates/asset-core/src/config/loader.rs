//! Static evaluation of a configuration file's returned value
//!
//! Configuration files end in `return [...];`. Instead of executing the
//! file, the loader evaluates the returned expression over the token
//! stream. Literals, arrays, concatenation, `__DIR__`, `__FILE__`,
//! `dirname()` and `Name::class` are understood; every other expression
//! becomes [`ConfigValue::Opaque`]. Nothing is ever executed.

use std::collections::HashMap;
use std::path::Path;

use crate::classifier::lexer::tokenize;
use crate::classifier::token::{Keyword, Token, TokenKind};

use super::value::{ConfigArray, ConfigValue};

/// Operands nested deeper than this evaluate to [`ConfigValue::Opaque`].
const MAX_NESTING: usize = 256;

/// Evaluate the first top-level `return` of `source`.
///
/// `file` is the path the source was read from; it backs `__FILE__` and
/// `__DIR__`. A source without a top-level `return` evaluates to
/// [`ConfigValue::Opaque`].
pub fn evaluate(source: &str, file: &Path) -> ConfigValue {
    let tokens: Vec<Token<'_>> = tokenize(source)
        .into_iter()
        .filter(|t| !t.kind.is_insignificant())
        .collect();

    let names = NameContext::scan(&tokens);
    let Some(start) = find_top_level_return(&tokens) else {
        return ConfigValue::Opaque;
    };

    let mut evaluator = Evaluator {
        tokens: &tokens,
        pos: start + 1,
        file,
        names,
        depth: 0,
    };
    evaluator.expression()
}

/// Index of the first `return` outside any function or class body.
/// Braces of a `namespace Foo { ... }` block do not count as nesting.
fn find_top_level_return(tokens: &[Token<'_>]) -> Option<usize> {
    let mut braces: Vec<bool> = Vec::new();
    let mut namespace_pending = false;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Keyword(Keyword::Namespace) => namespace_pending = true,
            TokenKind::Punct(';') => namespace_pending = false,
            TokenKind::Punct('{') => {
                braces.push(namespace_pending);
                namespace_pending = false;
            }
            TokenKind::Punct('}') => {
                braces.pop();
            }
            TokenKind::Keyword(Keyword::Return) if braces.iter().all(|&ns| ns) => {
                return Some(i);
            }
            _ => {}
        }
    }
    None
}

/// Namespace and `use` imports, for resolving `Name::class`.
#[derive(Debug, Default)]
struct NameContext {
    namespace: Option<String>,
    /// Lowercased alias -> fully qualified name
    imports: HashMap<String, String>,
}

impl NameContext {
    fn scan(tokens: &[Token<'_>]) -> Self {
        let mut context = Self::default();
        let mut depth = 0usize;
        let mut statement_start = true;
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            match token.kind {
                TokenKind::Keyword(Keyword::Namespace) if depth == 0 && statement_start => {
                    if let Some(name) = tokens.get(i + 1).filter(|t| t.kind == TokenKind::Name) {
                        context.namespace = Some(name.text.trim_start_matches('\\').to_string());
                        i += 1;
                    }
                }
                TokenKind::Keyword(Keyword::Use) if depth == 0 && statement_start => {
                    i = context.scan_imports(tokens, i + 1);
                    statement_start = true;
                    continue;
                }
                TokenKind::Punct('{') => depth += 1,
                TokenKind::Punct('}') => depth = depth.saturating_sub(1),
                _ => {}
            }
            statement_start = matches!(token.kind, TokenKind::Punct(';' | '{' | '}'));
            i += 1;
        }
        context
    }

    /// Parse `A\B [as C], D\{E, F as G};` starting after `use`. Returns the
    /// index after the statement. `use function` and `use const` are
    /// skipped.
    fn scan_imports(&mut self, tokens: &[Token<'_>], mut i: usize) -> usize {
        let skip = tokens.get(i).is_some_and(|t| {
            t.is_keyword(Keyword::Function) || t.text.eq_ignore_ascii_case("const")
        });
        let mut prefix: Option<&str> = None;

        while let Some(token) = tokens.get(i) {
            match token.kind {
                TokenKind::Punct(';') => return i + 1,
                TokenKind::Punct('}') => prefix = None,
                TokenKind::Name => {
                    let name = token.text.trim_start_matches('\\');
                    if tokens.get(i + 1).is_some_and(|t| t.is_punct('\\'))
                        && tokens.get(i + 2).is_some_and(|t| t.is_punct('{'))
                    {
                        prefix = Some(name);
                        i += 3;
                        continue;
                    }
                    let qualified = match prefix {
                        Some(prefix) => format!("{prefix}\\{name}"),
                        None => name.to_string(),
                    };
                    let alias = match (tokens.get(i + 1), tokens.get(i + 2)) {
                        (Some(as_kw), Some(alias)) if as_kw.is_keyword(Keyword::As) => {
                            i += 2;
                            alias.text.to_string()
                        }
                        _ => name.rsplit('\\').next().unwrap_or(name).to_string(),
                    };
                    if !skip {
                        self.imports.insert(alias.to_ascii_lowercase(), qualified);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        i
    }

    /// Resolve a class name the way `Name::class` does at compile time.
    fn resolve(&self, name: &str) -> String {
        if let Some(qualified) = name.strip_prefix('\\') {
            return qualified.to_string();
        }
        if let Some(head) = name.get(..10)
            && head.eq_ignore_ascii_case("namespace\\")
        {
            let rest = &name[10..];
            return match &self.namespace {
                Some(ns) => format!("{ns}\\{rest}"),
                None => rest.to_string(),
            };
        }

        let (first, rest) = match name.split_once('\\') {
            Some((first, rest)) => (first, Some(rest)),
            None => (name, None),
        };
        if let Some(imported) = self.imports.get(&first.to_ascii_lowercase()) {
            return match rest {
                Some(rest) => format!("{imported}\\{rest}"),
                None => imported.clone(),
            };
        }
        match &self.namespace {
            Some(ns) => format!("{ns}\\{name}"),
            None => name.to_string(),
        }
    }
}

struct Evaluator<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    file: &'t Path,
    names: NameContext,
    depth: usize,
}

impl<'t, 'a> Evaluator<'t, 'a> {
    fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos + offset)
    }

    fn eat_punct(&mut self, c: char) -> bool {
        if self.peek().is_some_and(|t| t.is_punct(c)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn at_terminator(&self) -> bool {
        match self.peek() {
            None => true,
            Some(t) => {
                t.kind == TokenKind::DoubleArrow
                    || matches!(t.kind, TokenKind::Punct(',' | ']' | ')' | ';'))
            }
        }
    }

    /// Skip to the next terminator outside any brackets, leaving it
    /// unconsumed.
    fn skip_to_terminator(&mut self) {
        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Punct('(' | '[' | '{') => depth += 1,
                TokenKind::Punct(')' | ']' | '}') if depth > 0 => depth -= 1,
                _ if depth == 0 && self.at_terminator() => return,
                _ => {}
            }
            self.pos += 1;
        }
    }

    fn opaque(&mut self) -> ConfigValue {
        self.skip_to_terminator();
        ConfigValue::Opaque
    }

    /// `operand ('.' operand)*`, or opaque when any other operator follows.
    fn expression(&mut self) -> ConfigValue {
        let mut value = self.operand();
        while self.eat_punct('.') {
            let rhs = self.operand();
            value = match (value.to_php_string(), rhs.to_php_string()) {
                (Some(lhs), Some(rhs)) => ConfigValue::String(lhs + &rhs),
                _ => ConfigValue::Opaque,
            };
        }
        if self.at_terminator() {
            value
        } else {
            self.opaque()
        }
    }

    fn operand(&mut self) -> ConfigValue {
        if self.depth >= MAX_NESTING {
            return self.opaque();
        }
        self.depth += 1;
        let value = self.primary();
        self.depth -= 1;
        value
    }

    fn primary(&mut self) -> ConfigValue {
        let Some(token) = self.peek().copied() else {
            return ConfigValue::Opaque;
        };

        match token.kind {
            TokenKind::ConstantString => {
                self.pos += 1;
                ConfigValue::String(unquote(token.text))
            }
            TokenKind::Integer => {
                self.pos += 1;
                parse_int(token.text).map_or(ConfigValue::Opaque, ConfigValue::Int)
            }
            TokenKind::Float => {
                self.pos += 1;
                token
                    .text
                    .replace('_', "")
                    .parse()
                    .map_or(ConfigValue::Opaque, ConfigValue::Float)
            }
            TokenKind::Punct('-') => {
                self.pos += 1;
                match self.operand() {
                    ConfigValue::Int(n) => ConfigValue::Int(-n),
                    ConfigValue::Float(f) => ConfigValue::Float(-f),
                    _ => self.opaque(),
                }
            }
            TokenKind::Punct('[') => {
                self.pos += 1;
                self.array(']')
            }
            TokenKind::Keyword(Keyword::Array)
                if self.peek_at(1).is_some_and(|t| t.is_punct('(')) =>
            {
                self.pos += 2;
                self.array(')')
            }
            TokenKind::Punct('(') => {
                self.pos += 1;
                let inner = self.expression();
                if self.eat_punct(')') {
                    inner
                } else {
                    self.opaque()
                }
            }
            TokenKind::Name => self.name(token),
            _ => self.opaque(),
        }
    }

    fn name(&mut self, token: Token<'_>) -> ConfigValue {
        let bare = token.text.trim_start_matches('\\');

        if self
            .peek_at(1)
            .is_some_and(|t| t.kind == TokenKind::DoubleColon)
            && self.peek_at(2).is_some_and(|t| t.is_keyword(Keyword::Class))
        {
            self.pos += 3;
            let lower = bare.to_ascii_lowercase();
            if matches!(lower.as_str(), "self" | "static" | "parent") {
                return self.opaque();
            }
            return ConfigValue::String(self.names.resolve(token.text));
        }

        if self.peek_at(1).is_some_and(|t| t.is_punct('(')) {
            if bare.eq_ignore_ascii_case("dirname") {
                self.pos += 2;
                return self.dirname_call();
            }
            return self.opaque();
        }

        self.pos += 1;
        match bare.to_ascii_lowercase().as_str() {
            "true" => ConfigValue::Bool(true),
            "false" => ConfigValue::Bool(false),
            "null" => ConfigValue::Null,
            "__dir__" => ConfigValue::String(
                self.file
                    .parent()
                    .map(|dir| dir.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
            "__file__" => ConfigValue::String(self.file.to_string_lossy().into_owned()),
            _ => self.opaque(),
        }
    }

    /// `dirname(path[, levels])`, positioned after the opening parenthesis.
    fn dirname_call(&mut self) -> ConfigValue {
        let path = self.expression();
        let levels = if self.eat_punct(',') {
            self.expression()
        } else {
            ConfigValue::Int(1)
        };
        if !self.eat_punct(')') {
            return self.opaque();
        }
        match (path, levels) {
            (ConfigValue::String(path), ConfigValue::Int(levels)) if levels >= 1 => {
                let mut dir = path;
                for _ in 0..levels {
                    let parent = php_dirname(&dir);
                    if parent == dir {
                        break;
                    }
                    dir = parent;
                }
                ConfigValue::String(dir)
            }
            _ => ConfigValue::Opaque,
        }
    }

    /// Array literal, positioned after the opening bracket.
    fn array(&mut self, close: char) -> ConfigValue {
        let mut array = ConfigArray::new();
        let mut spread = false;

        loop {
            if self.eat_punct(close) {
                break;
            }
            if self.peek().is_none() {
                return ConfigValue::Opaque;
            }

            if self
                .peek()
                .is_some_and(|t| t.kind == TokenKind::Operator && t.text == "...")
            {
                // The spread source cannot be known statically
                self.pos += 1;
                self.skip_to_terminator();
                spread = true;
            } else {
                let first = self.expression();
                if self.peek().is_some_and(|t| t.kind == TokenKind::DoubleArrow) {
                    self.pos += 1;
                    let value = self.expression();
                    if let Some(key) = first.to_key() {
                        array.insert(key, value);
                    }
                } else {
                    array.push(first);
                }
            }

            if self.eat_punct(',') {
                continue;
            }
            if self.eat_punct(close) {
                break;
            }
            // Mismatched bracket or stray token
            self.pos += 1;
            self.skip_to_terminator();
            return ConfigValue::Opaque;
        }

        if spread {
            ConfigValue::Opaque
        } else {
            ConfigValue::Array(array)
        }
    }
}

fn parse_int(text: &str) -> Option<i64> {
    let digits = text.replace('_', "");
    let lower = digits.to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i64::from_str_radix(bin, 2).ok()
    } else if let Some(oct) = lower.strip_prefix("0o") {
        i64::from_str_radix(oct, 8).ok()
    } else if lower.len() > 1 && lower.starts_with('0') {
        i64::from_str_radix(&lower[1..], 8).ok()
    } else {
        lower.parse().ok()
    }
}

/// Parent directory with the configuration language's `dirname` rules.
fn php_dirname(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.starts_with('/') { "/" } else { "." }.to_string();
    }
    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches('/');
            if parent.is_empty() {
                "/".to_string()
            } else {
                parent.to_string()
            }
        }
    }
}

/// Decode a constant string token to its value.
fn unquote(text: &str) -> String {
    if let Some(rest) = text.strip_prefix("<<<") {
        return unquote_heredoc(rest);
    }
    let Some(quote) = text.chars().next() else {
        return String::new();
    };
    let body = &text[1..];
    let body = body.strip_suffix(quote).unwrap_or(body);
    if quote == '\'' {
        unescape_single(body)
    } else {
        unescape_double(body)
    }
}

fn unescape_single(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && (next == '\'' || next == '\\')
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

/// Decode a double-quoted body. Octal and `\x` escapes produce the code
/// point of the byte value (`"\xff"` becomes U+00FF), not a raw byte, so
/// paths built from non-ASCII escapes may differ from the runtime's.
fn unescape_double(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(&next) = chars.peek() else {
            out.push('\\');
            break;
        };
        let simple = match next {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            'v' => Some('\x0b'),
            'e' => Some('\x1b'),
            'f' => Some('\x0c'),
            '\\' => Some('\\'),
            '$' => Some('$'),
            '"' => Some('"'),
            _ => None,
        };
        if let Some(ch) = simple {
            out.push(ch);
            chars.next();
            continue;
        }

        if next.is_digit(8) {
            let mut code = 0u32;
            for _ in 0..3 {
                match chars.peek().and_then(|c| c.to_digit(8)) {
                    Some(d) => {
                        code = code * 8 + d;
                        chars.next();
                    }
                    None => break,
                }
            }
            out.push(char::from_u32(code & 0xff).unwrap_or('\u{fffd}'));
            continue;
        }

        if next == 'x' {
            let mut lookahead = chars.clone();
            lookahead.next();
            let hex: String = lookahead
                .clone()
                .take(2)
                .take_while(|c| c.is_ascii_hexdigit())
                .collect();
            if !hex.is_empty() {
                chars = lookahead;
                for _ in 0..hex.len() {
                    chars.next();
                }
                let code = u32::from_str_radix(&hex, 16).unwrap_or(0xfffd);
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
                continue;
            }
        }

        if next == 'u' {
            let mut lookahead = chars.clone();
            lookahead.next();
            if lookahead.next() == Some('{') {
                let hex: String = lookahead.clone().take_while(|c| *c != '}').collect();
                if let Ok(code) = u32::from_str_radix(&hex, 16) {
                    for _ in 0..=hex.chars().count() {
                        lookahead.next();
                    }
                    chars = lookahead;
                    out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
                    continue;
                }
            }
        }

        out.push('\\');
    }
    out
}

/// Decode a heredoc/nowdoc token with the leading `<<<` removed.
fn unquote_heredoc(rest: &str) -> String {
    let Some(header_end) = rest.find('\n') else {
        return String::new();
    };
    let nowdoc = rest[..header_end].trim_start().starts_with('\'');
    let body_and_close = &rest[header_end + 1..];

    // The closing label sits on the last line; its indentation is removed
    // from every body line.
    let (body, closing_line) = match body_and_close.rfind('\n') {
        Some(idx) => (&body_and_close[..idx], &body_and_close[idx + 1..]),
        None => ("", body_and_close),
    };
    let body = body.strip_suffix('\r').unwrap_or(body);
    let indent_len = closing_line.len() - closing_line.trim_start_matches([' ', '\t']).len();
    let indent = &closing_line[..indent_len];

    let dedented: Vec<&str> = body
        .split('\n')
        .map(|line| line.strip_prefix(indent).unwrap_or(line))
        .collect();
    let joined = dedented.join("\n");

    if nowdoc {
        joined
    } else {
        unescape_double(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eval(source: &str) -> ConfigValue {
        evaluate(source, Path::new("/pkg/config/module.config.php"))
    }

    #[test]
    fn dirname_follows_php_rules() {
        assert_eq!(php_dirname("/a/b/c"), "/a/b");
        assert_eq!(php_dirname("/a/b/"), "/a");
        assert_eq!(php_dirname("/a"), "/");
        assert_eq!(php_dirname("a"), ".");
        assert_eq!(php_dirname("/"), "/");
    }

    #[test]
    fn dirname_levels_stop_at_root() {
        assert_eq!(
            eval("<?php return dirname(__DIR__, 9223372036854775807);"),
            ConfigValue::String("/".into())
        );
        assert_eq!(
            eval("<?php return dirname('pkg/assets', 9223372036854775807);"),
            ConfigValue::String(".".into())
        );
        assert_eq!(
            eval("<?php return dirname(__DIR__, 2);"),
            ConfigValue::String("/".into())
        );
    }

    #[test]
    fn deep_nesting_is_opaque_below_the_limit() {
        let levels = 20_000;
        let source = format!(
            "<?php return ['asset_manager' => {}{}, 'after' => 1];",
            "[".repeat(levels),
            "]".repeat(levels)
        );

        let value = eval(&source);

        assert_eq!(value.get("after"), Some(&ConfigValue::Int(1)));
        let mut nested = value.get("asset_manager");
        let mut arrays = 0;
        while let Some(ConfigValue::Array(array)) = nested {
            arrays += 1;
            nested = array.values().next();
        }
        assert!(arrays < MAX_NESTING);
        assert_eq!(nested, Some(&ConfigValue::Opaque));
    }

    #[test]
    fn deep_unary_minus_chain_is_opaque() {
        let source = format!("<?php return [{}1, 2];", "- ".repeat(10_000));
        let value = eval(&source);
        assert_eq!(value.get("0"), Some(&ConfigValue::Opaque));
        assert_eq!(value.get("1"), Some(&ConfigValue::Int(2)));
    }

    #[test]
    fn parses_integer_radixes() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("0x1f"), Some(31));
        assert_eq!(parse_int("0b101"), Some(5));
        assert_eq!(parse_int("0o17"), Some(15));
        assert_eq!(parse_int("017"), Some(15));
        assert_eq!(parse_int("1_000"), Some(1000));
        assert_eq!(parse_int("0"), Some(0));
    }

    #[test]
    fn unquotes_single_and_double_strings() {
        assert_eq!(unquote(r"'it\'s \n'"), "it's \\n");
        assert_eq!(unquote(r#""tab\there \"q\" \x41\101\u{1F600}""#), "tab\there \"q\" AA\u{1F600}");
        assert_eq!(unquote(r#""keep \q""#), "keep \\q");
    }

    #[test]
    fn unquotes_heredoc_with_indentation() {
        let token = "<<<EOT\n    line one\n      line two\n    EOT";
        assert_eq!(unquote(token), "line one\n  line two");
        let nowdoc = "<<<'EOT'\nraw \\n\nEOT";
        assert_eq!(unquote(nowdoc), "raw \\n");
    }

    #[test]
    fn evaluates_dir_concatenation() {
        let value = eval("<?php return __DIR__ . '/../asset';");
        assert_eq!(value, ConfigValue::String("/pkg/config/../asset".into()));

        let value = eval("<?php return dirname(__DIR__) . '/asset';");
        assert_eq!(value, ConfigValue::String("/pkg/asset".into()));

        let value = eval("<?php return dirname(__FILE__, 2);");
        assert_eq!(value, ConfigValue::String("/pkg".into()));
    }

    #[test]
    fn resolves_class_names_against_imports() {
        let source = "<?php\nnamespace App\\Module;\nuse Vendor\\Lib\\Factory;\nuse Other\\Thing as Alias;\nreturn [Factory::class, Alias::class, Local::class, \\Root::class];";
        let value = eval(source);
        let values: Vec<_> = value
            .as_array()
            .unwrap()
            .values()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            values,
            vec!["Vendor\\Lib\\Factory", "Other\\Thing", "App\\Module\\Local", "Root"]
        );
    }

    #[test]
    fn unknown_expressions_are_opaque_without_hiding_siblings() {
        let source = "<?php return ['a' => getenv('X'), 'b' => $var + 1, 'c' => 'kept', 'd' => FOO];";
        let value = eval(source);
        assert_eq!(value.get("a"), Some(&ConfigValue::Opaque));
        assert_eq!(value.get("b"), Some(&ConfigValue::Opaque));
        assert_eq!(value.get("c"), Some(&ConfigValue::String("kept".into())));
        assert_eq!(value.get("d"), Some(&ConfigValue::Opaque));
    }

    #[test]
    fn return_inside_closure_is_ignored() {
        let source = "<?php\n$f = function () { return 'inner'; };\nreturn ['outer' => true];";
        assert_eq!(eval(source).get("outer"), Some(&ConfigValue::Bool(true)));
    }

    #[test]
    fn return_inside_braced_namespace_counts() {
        let source = "<?php namespace App { return ['k' => 1]; }";
        assert_eq!(eval(source).get("k"), Some(&ConfigValue::Int(1)));
    }

    #[test]
    fn missing_return_is_opaque() {
        assert_eq!(eval("<?php $config = [];"), ConfigValue::Opaque);
        assert_eq!(eval("just text"), ConfigValue::Opaque);
    }

    #[test]
    fn spread_makes_array_opaque() {
        let value = eval("<?php return ['paths' => [...$other, 'x']];");
        assert_eq!(value.get("paths"), Some(&ConfigValue::Opaque));
    }

    #[test]
    fn long_array_syntax_and_auto_keys() {
        let value = eval("<?php return array('x', 5 => 'y', 'z', 'k' => array(),);");
        let array = value.as_array().unwrap();
        assert_eq!(array.get("0"), Some(&ConfigValue::String("x".into())));
        assert_eq!(array.get("5"), Some(&ConfigValue::String("y".into())));
        assert_eq!(array.get("6"), Some(&ConfigValue::String("z".into())));
        assert_eq!(array.get("k"), Some(&ConfigValue::Array(ConfigArray::new())));
    }

    #[test]
    fn negative_numbers_and_booleans() {
        let value = eval("<?php return ['n' => -3, 'f' => -1.5, 'b' => FALSE, 'z' => null];");
        assert_eq!(value.get("n"), Some(&ConfigValue::Int(-3)));
        assert_eq!(value.get("f"), Some(&ConfigValue::Float(-1.5)));
        assert_eq!(value.get("b"), Some(&ConfigValue::Bool(false)));
        assert_eq!(value.get("z"), Some(&ConfigValue::Null));
    }
}

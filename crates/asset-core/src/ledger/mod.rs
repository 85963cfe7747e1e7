//! Ledger of installed asset namespaces
//!
//! The ledger is the ignore file inside the public root. Each namespace the
//! installer copies is recorded as a `<namespace>/` line, which keeps the
//! copied tree out of version control and tells the uninstaller which
//! directories it owns. Every other line is preserved verbatim.

use asset_fs::{NormalizedPath, io};
use tracing::debug;

use crate::Result;

/// Ordered lines of the ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    lines: Vec<String>,
    /// Whether the rendered text ends with a newline
    trailing_newline: bool,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger. It renders with a trailing newline once
    /// entries are added.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            trailing_newline: true,
        }
    }

    /// Parse ledger text. `\r\n`, `\r` and `\n` all end a line.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }

        let trailing_newline = text.ends_with('\n') || text.ends_with('\r');
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
        Self {
            lines: body.split('\n').map(str::to_string).collect(),
            trailing_newline,
        }
    }

    /// Load a ledger file while holding a shared lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, locked or read.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let text = io::read_text_shared(path)?;
        let ledger = Self::parse(&text);
        debug!(path = %path, lines = ledger.lines.len(), "Loaded ledger");
        Ok(ledger)
    }

    /// Load a ledger file, or start an empty one when it does not exist.
    pub fn load_or_default(path: &NormalizedPath) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Write the ledger atomically under an exclusive lock.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        io::write_atomic(path, self.render().as_bytes())?;
        debug!(path = %path, lines = self.lines.len(), "Saved ledger");
        Ok(())
    }

    /// Whether `line` is present exactly.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Append `line` unless already present. Returns whether it was added.
    pub fn append(&mut self, line: &str) -> bool {
        if self.contains(line) {
            return false;
        }
        self.lines.push(line.to_string());
        true
    }

    /// Remove the first exact occurrence of `line`. Returns whether a line
    /// was removed.
    pub fn remove(&mut self, line: &str) -> bool {
        match self.lines.iter().position(|l| l == line) {
            Some(index) => {
                self.lines.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines that look like namespace entries (`name/`), without the slash.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| {
            let name = line.strip_suffix('/')?;
            let plain = !name.is_empty()
                && !name.contains('/')
                && !name.starts_with('#')
                && !name.starts_with('!');
            plain.then_some(name)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the ledger text, one line per entry, `\n` separated.
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            text.push('\n');
        }
        text
    }
}

/// Ledger line for a namespace.
pub fn entry_for(namespace: &str) -> String {
    format!("{namespace}/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_preserves_unrelated_lines_and_newline_convention() {
        let ledger = Ledger::parse("# assets\n*.log\nwidget/\n");
        assert_eq!(ledger.render(), "# assets\n*.log\nwidget/\n");

        let ledger = Ledger::parse("*.log");
        assert_eq!(ledger.render(), "*.log");
    }

    #[test]
    fn crlf_lines_match_entries() {
        let ledger = Ledger::parse("widget/\r\ngadget/\r\n");
        assert!(ledger.contains("widget/"));
        assert!(ledger.contains("gadget/"));
        assert_eq!(ledger.render(), "widget/\ngadget/\n");
    }

    #[test]
    fn append_is_idempotent_and_remove_takes_first_match() {
        let mut ledger = Ledger::new();
        assert!(ledger.append("widget/"));
        assert!(!ledger.append("widget/"));
        assert_eq!(ledger.render(), "widget/\n");

        let mut ledger = Ledger::parse("a/\nb/\na/\n");
        assert!(ledger.remove("a/"));
        assert_eq!(ledger.lines(), ["b/", "a/"]);
        assert!(!ledger.remove("c/"));
    }

    #[test]
    fn entries_skip_rules_and_nested_paths() {
        let ledger = Ledger::parse("# c/\n!keep/\nwidget/\nnested/path/\n/\n*.log\ngadget/\n");
        let entries: Vec<_> = ledger.entries().collect();
        assert_eq!(entries, vec!["widget", "gadget"]);
    }

    #[test]
    fn empty_text_is_empty_ledger() {
        let ledger = Ledger::parse("");
        assert!(ledger.is_empty());
        assert_eq!(ledger.render(), "");
    }

    #[test]
    fn blank_lines_are_preserved() {
        let ledger = Ledger::parse("a/\n\nb/\n");
        assert_eq!(ledger.lines(), ["a/", "", "b/"]);
        assert_eq!(ledger.render(), "a/\n\nb/\n");
    }
}

//! Tests for the ledger file

use asset_core::ledger::{Ledger, entry_for};
use asset_fs::NormalizedPath;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::tempdir;

#[test]
fn test_load_save_round_trip_preserves_unrelated_lines() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join(".gitignore"));
    std::fs::write(path.to_native(), "# generated\n*.cache\nwidget/\n").unwrap();

    let mut ledger = Ledger::load(&path).unwrap();
    assert!(ledger.contains("widget/"));
    ledger.append("gadget/");
    ledger.save(&path).unwrap();

    let content = std::fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "# generated\n*.cache\nwidget/\ngadget/\n");
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join(".gitignore"));

    let ledger = Ledger::load_or_default(&path).unwrap();
    assert!(ledger.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join(".gitignore"));
    assert!(Ledger::load(&path).is_err());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = NormalizedPath::new(dir.path().join("public/.gitignore"));

    let mut ledger = Ledger::new();
    ledger.append(&entry_for("widget"));
    ledger.save(&path).unwrap();

    assert_eq!(std::fs::read_to_string(path.to_native()).unwrap(), "widget/\n");
}

#[test]
fn test_missing_trailing_newline_is_kept() {
    let mut ledger = Ledger::parse("*.log");
    ledger.append("widget/");
    assert_eq!(ledger.render(), "*.log\nwidget/");
}

#[test]
fn test_mixed_line_endings() {
    let ledger = Ledger::parse("a/\r\nb/\rc/\n");
    assert_eq!(ledger.lines(), ["a/", "b/", "c/"]);
}

proptest! {
    #[test]
    fn test_append_then_remove_restores_text(
        lines in prop::collection::vec("[a-z*#!. ]{0,8}/?", 0..8),
        trailing in any::<bool>(),
        name in "[a-z][a-z0-9_-]{0,12}",
    ) {
        let mut text = lines.join("\n");
        if trailing && !lines.is_empty() {
            text.push('\n');
        }
        let original = Ledger::parse(&text);
        let entry = entry_for(&name);
        prop_assume!(!original.contains(&entry));

        let mut ledger = original.clone();
        prop_assert!(ledger.append(&entry));
        prop_assert!(ledger.contains(&entry));
        prop_assert!(ledger.remove(&entry));
        prop_assert_eq!(ledger.render(), original.render());
    }

    #[test]
    fn test_parse_render_is_stable(lines in prop::collection::vec("[a-z/#]{0,6}", 1..6)) {
        let text = format!("{}\n", lines.join("\n"));
        prop_assert_eq!(Ledger::parse(&text).render(), text);
    }
}

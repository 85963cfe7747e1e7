use asset_fs::NormalizedPath;
use rstest::rstest;

#[cfg(windows)]
#[test]
fn test_backslashes_become_forward_slashes() {
    let path = NormalizedPath::new("public\\.gitignore");
    assert_eq!(path.as_str(), "public/.gitignore");
    assert_eq!(path.to_string(), "public/.gitignore");
}

#[cfg(unix)]
#[test]
fn test_backslash_is_a_file_name_character_on_unix() {
    let path = NormalizedPath::new("/srv/a\\b/public/.gitignore");
    assert_eq!(path.as_str(), "/srv/a\\b/public/.gitignore");
    assert_eq!(
        path.to_native(),
        std::path::PathBuf::from("/srv/a\\b/public/.gitignore")
    );
}

#[rstest]
#[case("config/module.config.php", Some("module.config.php"))]
#[case("public/asset/", Some("asset"))]
#[case("/", None)]
#[case("", None)]
fn test_file_name(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).file_name(), expected);
}

#[rstest]
#[case(".asset-manager.toml", Some("toml"))]
#[case("plans/release.yml", Some("yml"))]
#[case("public/.gitignore", None)]
#[case("vendor/acme/README", None)]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).extension(), expected);
}

#[test]
fn test_missing_path_is_neither_file_nor_dir() {
    let path = NormalizedPath::new("/nonexistent/asset-manager/public");
    assert!(!path.exists());
    assert!(!path.is_dir());
    assert!(!path.is_file());
}

//! Tests for package configuration inspection

use asset_core::config::{ConfigInspection, inspect_package_config};
use asset_core::UnsafeKind;
use asset_test_utils::{TestProject, asset_config, asset_config_raw};
use pretty_assertions::assert_eq;

#[test]
fn test_missing_config_file() {
    let project = TestProject::new();
    let inspection = inspect_package_config(&project.path("vendor/none/config/module.config.php"))
        .unwrap();
    assert_eq!(inspection, ConfigInspection::Missing);
}

#[test]
fn test_config_without_asset_key() {
    let project = TestProject::new();
    let dir = project.add_package("acme/plain", "<?php return ['router' => []];");
    let inspection = inspect_package_config(&dir.join("config/module.config.php")).unwrap();
    assert_eq!(inspection, ConfigInspection::NoAssetConfig);
}

#[test]
fn test_unsafe_file_without_asset_key_is_silent() {
    let project = TestProject::new();
    let dir = project.add_package("acme/plain", "<?php return ['service' => new Foo()];");
    let inspection = inspect_package_config(&dir.join("config/module.config.php")).unwrap();
    assert_eq!(inspection, ConfigInspection::NoAssetConfig);
}

#[test]
fn test_unsafe_config_is_reported() {
    let project = TestProject::new();
    let config = asset_config(&["asset"]).replace("return [", "$x = new Foo();\nreturn [");
    let dir = project.add_package("acme/unsafe", &config);

    let inspection = inspect_package_config(&dir.join("config/module.config.php")).unwrap();
    match inspection {
        ConfigInspection::Unsafe(construct) => {
            assert_eq!(construct.kind, UnsafeKind::New);
            assert_eq!(construct.line, 2);
        }
        other => panic!("expected unsafe, got {other:?}"),
    }
}

#[test]
fn test_declared_paths_resolve_dir() {
    let project = TestProject::new();
    let dir = project.add_package("acme/widget", &asset_config(&["asset", "extra"]));

    let inspection = inspect_package_config(&dir.join("config/module.config.php")).unwrap();
    let config_dir = dir.join("config");
    assert_eq!(
        inspection,
        ConfigInspection::Declared(vec![
            format!("{}/../asset", config_dir.display()),
            format!("{}/../extra", config_dir.display()),
        ])
    );
}

#[test]
fn test_literal_relative_paths_are_kept_verbatim() {
    let project = TestProject::new();
    let config = asset_config_raw(&["'assets/widget'".to_string(), "\"assets/gadget\"".to_string()]);
    let dir = project.add_package("acme/widget", &config);

    let inspection = inspect_package_config(&dir.join("config/module.config.php")).unwrap();
    assert_eq!(
        inspection.paths(),
        Some(&["assets/widget".to_string(), "assets/gadget".to_string()][..])
    );
}

#[test]
fn test_non_string_path_entry_means_no_config() {
    let project = TestProject::new();
    let config = asset_config_raw(&["'asset'".to_string(), "PUBLIC_PATH".to_string()]);
    let dir = project.add_package("acme/widget", &config);

    let inspection = inspect_package_config(&dir.join("config/module.config.php")).unwrap();
    assert_eq!(inspection, ConfigInspection::NoAssetConfig);
}

#[test]
fn test_class_keys_do_not_block_extraction() {
    let project = TestProject::new();
    let config = r#"<?php
namespace Acme\Widget;

use Acme\Widget\Factory\WidgetFactory;

return [
    'service_manager' => [
        'factories' => [
            Widget::class => WidgetFactory::class,
        ],
    ],
    'asset_manager' => [
        'resolver_configs' => [
            'paths' => [
                __DIR__ . '/../asset',
            ],
        ],
    ],
];
"#;
    let dir = project.add_package("acme/widget", config);

    let inspection = inspect_package_config(&dir.join("config/module.config.php")).unwrap();
    assert_eq!(inspection.paths().map(<[String]>::len), Some(1));
}

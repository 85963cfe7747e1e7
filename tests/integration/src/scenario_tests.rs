//! End-to-end scenarios across the classifier, extractor, synchronizers
//! and ledger.

use std::fs;

use asset_core::sync::{AssetInstaller, AssetUninstaller, resolve_sources};
use asset_core::{ConfigInspection, inspect_package_config};
use asset_test_utils::TestProject;
use pretty_assertions::assert_eq;

const WIDGET_FILES: [&str; 3] = [
    "widget/css/styles.css",
    "widget/img/icon.png",
    "widget/js/app.js",
];

fn widget_project() -> TestProject {
    let project = TestProject::new().with_public_dir();
    project.write_file("pkg/assets/widget/css/styles.css", "body { color: red; }");
    project.write_file("pkg/assets/widget/img/icon.png", "\u{89}PNG");
    project.write_file("pkg/assets/widget/js/app.js", "console.log('widget');");
    project
}

#[test]
fn test_widget_install_then_uninstall() {
    let project = widget_project();
    let sources = vec![project.path("pkg/assets")];
    let public = project.public_dir();

    let report = AssetInstaller::new(&public, ".gitignore")
        .install(&sources)
        .unwrap();
    assert_eq!(report.installed, vec!["widget"]);
    for file in WIDGET_FILES {
        assert_eq!(
            project.read(&format!("public/{file}")),
            project.read(&format!("pkg/assets/{file}")),
            "{file} should be copied byte for byte"
        );
    }
    assert_eq!(project.ledger().as_deref(), Some("widget/\n"));

    let report = AssetUninstaller::new(&public, ".gitignore")
        .uninstall(&sources)
        .unwrap();
    assert_eq!(report.removed, vec!["widget"]);
    for file in WIDGET_FILES {
        project.assert_file_not_exists(&format!("public/{file}"));
    }
    assert_eq!(project.ledger().as_deref(), Some(""));
}

#[test]
fn test_widget_uninstall_keeps_preexisting_rules() {
    let project = widget_project();
    project.write_ledger("# local rules\n*.map\n");
    let sources = vec![project.path("pkg/assets")];
    let public = project.public_dir();

    AssetInstaller::new(&public, ".gitignore")
        .install(&sources)
        .unwrap();
    assert_eq!(project.ledger().as_deref(), Some("# local rules\n*.map\nwidget/\n"));

    AssetUninstaller::new(&public, ".gitignore")
        .uninstall(&sources)
        .unwrap();
    assert_eq!(project.ledger().as_deref(), Some("# local rules\n*.map\n"));
}

#[test]
fn test_authorization_guard_protects_unrecorded_directory() {
    let project = widget_project();
    project.write_file("pkg/assets/c/file.txt", "from package");
    project.write_file("public/c/file.txt", "hand written");
    let sources = vec![project.path("pkg/assets")];
    let public = project.public_dir();
    project.write_ledger("widget/\n");
    fs::create_dir_all(public.join("widget")).unwrap();

    let report = AssetUninstaller::new(&public, ".gitignore")
        .uninstall(&sources)
        .unwrap();

    assert_eq!(report.removed, vec!["widget"]);
    assert_eq!(project.read("public/c/file.txt"), "hand written");
}

#[test]
fn test_package_config_drives_install() {
    let project = TestProject::new().with_public_dir();
    let package = project.add_asset_package(
        "acme/widget",
        &[("widget/css/styles.css", "x"), ("gadget/js/app.js", "y")],
    );

    let inspection = inspect_package_config(&package.join("config/module.config.php")).unwrap();
    let ConfigInspection::Declared(paths) = inspection else {
        panic!("expected declared paths, got {inspection:?}");
    };
    let sources = resolve_sources(project.root(), &paths);

    let report = AssetInstaller::new(project.public_dir(), ".gitignore")
        .install(&sources)
        .unwrap();

    assert_eq!(report.installed, vec!["gadget", "widget"]);
    assert_eq!(project.ledger().as_deref(), Some("gadget/\nwidget/\n"));
}

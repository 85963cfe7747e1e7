//! Package lifecycle scenarios: several packages sharing one public root.

use asset_core::{AssetManager, Package, PackageOperation, Settings, VendorLocator};
use asset_test_utils::{TestProject, asset_config};
use pretty_assertions::assert_eq;

fn manager(project: &TestProject) -> AssetManager<VendorLocator> {
    let settings = Settings::discover(project.root()).unwrap();
    let locator = VendorLocator::new(settings.vendor_dir(project.root()));
    AssetManager::new(project.root(), settings, locator)
}

fn install(name: &str) -> PackageOperation {
    PackageOperation::Install(Package::new(name))
}

fn uninstall(name: &str) -> PackageOperation {
    PackageOperation::Uninstall(Package::new(name))
}

#[test]
fn test_packages_share_ledger_independently() {
    let project = TestProject::new().with_public_dir();
    project.add_asset_package("acme/widget", &[("widget/app.js", "w")]);
    project.add_asset_package("acme/gadget", &[("gadget/app.js", "g")]);
    let manager = manager(&project);

    manager.handle(&install("acme/widget")).unwrap();
    manager.handle(&install("acme/gadget")).unwrap();
    assert_eq!(project.ledger().as_deref(), Some("widget/\ngadget/\n"));

    manager.handle(&uninstall("acme/widget")).unwrap();
    assert_eq!(project.ledger().as_deref(), Some("gadget/\n"));
    project.assert_file_not_exists("public/widget");
    assert_eq!(project.read("public/gadget/app.js"), "g");
}

#[test]
fn test_deferred_batch_mixes_safe_and_unsafe_packages() {
    let project = TestProject::new().with_public_dir();
    project.add_asset_package("acme/widget", &[("widget/app.js", "w")]);
    let unsafe_config = asset_config(&["asset"]).replace("return [", "`rm -rf /`;\nreturn [");
    project.add_package("evil/package", &unsafe_config);
    project.write_file("vendor/evil/package/asset/evil/x.js", "x");
    let mut manager = manager(&project);

    manager.schedule(install("evil/package"));
    manager.schedule(install("acme/widget"));
    let report = manager.flush();

    assert!(report.is_success());
    assert_eq!(report.installed, vec!["widget"]);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("shell execution"));
    project.assert_file_not_exists("public/evil");
}

#[test]
fn test_update_through_deferred_queue() {
    let project = TestProject::new().with_public_dir();
    project.add_asset_package("acme/widget-legacy", &[("widget/legacy.js", "old")]);
    project.add_asset_package("acme/widget", &[("widget/modern.js", "new")]);
    let mut manager = manager(&project);
    manager.handle(&install("acme/widget-legacy")).unwrap();

    manager.schedule(PackageOperation::Update {
        from: Package::new("acme/widget-legacy"),
        to: Package::new("acme/widget"),
    });
    let report = manager.flush();

    assert_eq!(report.removed, vec!["widget"]);
    assert_eq!(report.installed, vec!["widget"]);
    project.assert_file_not_exists("public/widget/legacy.js");
    assert_eq!(project.read("public/widget/modern.js"), "new");
}

#[test]
fn test_missing_public_root_makes_everything_a_no_op() {
    let project = TestProject::new();
    project.add_asset_package("acme/widget", &[("widget/app.js", "w")]);
    let manager = manager(&project);

    let report = manager.handle(&install("acme/widget")).unwrap();
    assert!(report.is_empty());
    let report = manager.handle(&uninstall("acme/widget")).unwrap();
    assert!(report.is_empty());
    project.assert_file_not_exists("public");
}

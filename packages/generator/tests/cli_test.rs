//! Tests for the `xamlnames` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

const SIMPLE_WINDOW: &str = r#"<Window xmlns="http://schemas.microsoft.com/winfx/2006/xaml/presentation">
    <Button Name="Ok"/>
</Window>"#;

/// Write `SIMPLE_WINDOW` to each relative path under `dir`.
fn write_windows(dir: &Path, paths: &[&str]) {
    for path in paths {
        let file = dir.join(path);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, SIMPLE_WINDOW).unwrap();
    }
}

fn xamlnames() -> Command {
    Command::cargo_bin("xamlnames").unwrap()
}

#[test]
fn test_analyze_lists_named_elements() {
    xamlnames()
        .arg("analyze")
        .arg(fixture_path("MainWindow.xaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("element_tree"))
        .stdout(predicate::str::contains("MyApp.MainWindow"))
        .stdout(predicate::str::contains("OkButton"))
        .stdout(predicate::str::contains("System.Windows.Controls.Button"));
}

#[test]
fn test_analyze_with_catalog() {
    xamlnames()
        .arg("analyze")
        .arg(fixture_path("MainWindow.xaml"))
        .arg("--catalog")
        .arg(fixture_path("controls.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("MyApp.Controls.Gauge"));
}

#[test]
fn test_missing_catalog_is_skipped() {
    xamlnames()
        .arg("analyze")
        .arg(fixture_path("Theme.xaml"))
        .arg("--catalog")
        .arg(fixture_path("missing.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("resource_dictionary"))
        .stderr(predicate::str::contains("skipped catalog"));
}

#[test]
fn test_analyze_broken_markup_fails() {
    xamlnames()
        .arg("analyze")
        .arg(fixture_path("Broken.xaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Broken.xaml"))
        .stderr(predicate::str::contains("malformed markup"));
}

#[test]
fn test_rejects_non_markup_path() {
    xamlnames()
        .arg("analyze")
        .arg(fixture_path("controls.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid markup path"));
}

#[test]
fn test_generate_rust() {
    let dir = tempdir().unwrap();

    xamlnames()
        .arg("generate")
        .arg(fixture_path("MainWindow.xaml"))
        .arg("--output")
        .arg(dir.path())
        .arg("--component")
        .arg("MyApp")
        .arg("--root")
        .arg(fixture_path(""))
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated:"));

    let code = fs::read_to_string(dir.path().join("main_window.rs")).unwrap();
    assert!(code.contains("pub struct MainWindow {"));
    assert!(code.contains("pub fn ok_button(&mut self)"));
    assert!(code.contains(
        "pub const RESOURCE_URI: &str = \"/MyApp;component/MainWindow.xaml\";"
    ));
}

#[test]
fn test_resource_uri_relative_to_working_directory() {
    let project = tempdir().unwrap();
    write_windows(project.path(), &["Views/Main.xaml"]);

    xamlnames()
        .current_dir(project.path())
        .args(["generate", "Views/Main.xaml", "--format", "json", "--output", "out"])
        .assert()
        .success();

    let json = fs::read_to_string(project.path().join("out").join("Main.names.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["contract"]["resource_uri"], "/App;component/Views/Main.xaml");
}

#[test]
fn test_file_outside_root_uses_file_name() {
    let project = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    write_windows(elsewhere.path(), &["Shared/Main.xaml"]);

    xamlnames()
        .arg("generate")
        .arg(elsewhere.path().join("Shared").join("Main.xaml"))
        .args(["--format", "json", "--root"])
        .arg(project.path())
        .arg("--output")
        .arg(project.path())
        .assert()
        .success();

    let json = fs::read_to_string(project.path().join("Main.names.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["contract"]["resource_uri"], "/App;component/Main.xaml");
}

#[test]
fn test_generate_rejects_output_collisions() {
    let project = tempdir().unwrap();
    write_windows(project.path(), &["Views/Main.xaml", "Dialogs/Main.xaml"]);

    xamlnames()
        .current_dir(project.path())
        .args(["generate", "Views/Main.xaml", "Dialogs/Main.xaml", "--output", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Dialogs/Main.xaml and Views/Main.xaml both generate out/main.rs",
        ));

    let code = fs::read_to_string(project.path().join("out").join("main.rs")).unwrap();
    assert!(code.contains("/App;component/Views/Main.xaml"));
}

#[test]
fn test_generate_descriptors() {
    let dir = tempdir().unwrap();

    for (format, file) in [("yaml", "Theme.names.yaml"), ("json", "Theme.names.json")] {
        xamlnames()
            .arg("generate")
            .arg(fixture_path("Theme.xaml"))
            .args(["--format", format])
            .arg("--output")
            .arg(dir.path())
            .assert()
            .success();

        let content = fs::read_to_string(dir.path().join(file)).unwrap();
        assert!(content.contains("resource_dictionary"));
    }
}

#[test]
fn test_generate_stops_at_first_failure() {
    let dir = tempdir().unwrap();

    xamlnames()
        .arg("generate")
        .arg(fixture_path("Duplicate.xaml"))
        .arg(fixture_path("App.xaml"))
        .arg("--output")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("name 'Action' is already used"));

    assert!(!dir.path().join("app.rs").exists());
}

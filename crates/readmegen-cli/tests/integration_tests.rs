//! Integration tests for the readmegen binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the caller's config files and environment.
fn readmegen(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("readmegen");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn python_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(
        root.join("setup.py"),
        "from setuptools import setup\n\nsetup(\n    name=\"weather-cli\",\n    description=\"Forecasts in your terminal\",\n    install_requires=[\"requests>=2.0\", \"click\"],\n)\n",
    )
    .unwrap();
    fs::write(root.join("requirements.txt"), "requests>=2.0\nrich\n").unwrap();
    fs::create_dir(root.join("weather")).unwrap();
    fs::write(root.join("weather").join("__init__.py"), "").unwrap();
    temp
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate a README"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand_is_usage_error() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path()).assert().code(2);
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path())
        .args(["--quiet", "--verbose", "preview"])
        .assert()
        .code(2);
}

#[test]
fn test_preview_prints_detected_facts() {
    let project = python_project();
    readmegen(project.path())
        .arg("preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("# weather-cli"))
        .stdout(predicate::str::contains("Forecasts in your terminal"))
        .stdout(predicate::str::contains("import weather_cli"))
        .stdout(predicate::str::contains("- rich"))
        .stdout(predicate::str::contains("weather"));

    assert!(!project.path().join("README.md").exists());
}

#[test]
fn test_generate_writes_readme() {
    let project = python_project();
    readmegen(project.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("README generated"));

    let readme = fs::read_to_string(project.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# weather-cli"));
    assert!(readme.contains("- click"));
    assert_eq!(readme.matches("- requests>=2.0\n").count(), 1);
    assert!(readme.contains("*This README was generated by readmegen on "));
}

#[test]
fn test_generate_with_root_and_output() {
    let project = python_project();
    let work = TempDir::new().unwrap();
    let out = work.path().join("docs").join("README.md");
    fs::create_dir(work.path().join("docs")).unwrap();

    readmegen(work.path())
        .arg("generate")
        .arg("--root")
        .arg(project.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let readme = fs::read_to_string(out).unwrap();
    assert!(readme.starts_with("# weather-cli"));
}

#[test]
fn test_generate_dry_run_does_not_write() {
    let project = python_project();
    readmegen(project.path())
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("# weather-cli"));

    assert!(!project.path().join("README.md").exists());
}

#[test]
fn test_missing_root_is_user_error() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path())
        .args(["preview", "--root", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_custom_template_file() {
    let project = python_project();
    fs::write(
        project.path().join("readme.hbs"),
        "{{project_name}} by {{author}}\n",
    )
    .unwrap();

    readmegen(project.path())
        .args(["preview", "--template", "readme.hbs"])
        .env("READMEGEN_AUTHOR", "Ada")
        .assert()
        .success()
        .stdout(predicate::str::contains("weather-cli by Ada"));
}

#[test]
fn test_config_file_overrides_detection() {
    let project = python_project();
    fs::write(
        project.path().join("config.yaml"),
        "project_name: Skycast\ninclude_toc: false\n",
    )
    .unwrap();

    readmegen(project.path())
        .arg("preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Skycast"))
        .stdout(predicate::str::contains("Table of Contents").not());
}

#[test]
fn test_environment_overrides_config_file() {
    let project = python_project();
    fs::write(project.path().join("config.yaml"), "project_name: Skycast\n").unwrap();

    readmegen(project.path())
        .arg("preview")
        .env("READMEGEN_PROJECT_NAME", "FromEnv")
        .assert()
        .success()
        .stdout(predicate::str::contains("# FromEnv"));
}

#[test]
fn test_explicit_missing_config_is_not_found() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path())
        .args(["-c", "missing.yaml", "preview"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_malformed_config_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.json"), "{ nope").unwrap();
    readmegen(temp.path())
        .args(["--config", "broken.json", "preview"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let text = fs::read_to_string(temp.path().join("config.yaml")).unwrap();
    assert!(text.contains("license: MIT"));
    assert!(text.contains("max_depth: 3"));
}

#[test]
fn test_init_keeps_existing_without_force() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "author: Ada\n").unwrap();

    readmegen(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "author: Ada\n");

    readmegen(temp.path()).args(["init", "--force"]).assert().success();
    assert!(fs::read_to_string(&path).unwrap().contains("license: MIT"));
}

#[test]
fn test_init_other_formats() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path()).args(["init", "readmegen.toml"]).assert().success();
    let text = fs::read_to_string(temp.path().join("readmegen.toml")).unwrap();
    assert!(text.contains("license = \"MIT\""));

    readmegen(temp.path())
        .args(["init", "settings.ini"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unsupported config file format"));
    assert!(!temp.path().join("settings.ini").exists());
}

#[test]
fn test_config_show_prints_resolved_settings() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path())
        .args(["config", "show"])
        .env("READMEGEN_AUTHOR", "Grace")
        .assert()
        .success()
        .stdout(predicate::str::contains("license: MIT"))
        .stdout(predicate::str::contains("author: Grace"));
}

#[test]
fn test_config_path_lists_locations() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("active:"))
        .stdout(predicate::str::contains("config.yaml"));
}

#[test]
fn test_check_reports_missing_files() {
    let project = python_project();
    readmegen(project.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Consider adding LICENSE"))
        .stdout(predicate::str::contains("Consider adding a test directory"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();
    readmegen(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readmegen"));
}

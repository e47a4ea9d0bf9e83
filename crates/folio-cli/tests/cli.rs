//! CLI command integration tests.
//! Each test uses a temp directory via FOLIO_DATA_DIR for full isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio_cmd(data_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("FOLIO_DATA_DIR", data_dir.path());
    cmd.env_remove("FOLIO_THEME");
    cmd
}

#[test]
fn list_shows_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Immersive AR Shopping"))
        .stdout(predicate::str::contains("VR Art Gallery"))
        .stdout(predicate::str::contains("6 project(s)"));
}

#[test]
fn list_filters_by_category() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .args(["list", "--category", "Web Development"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 project(s)"))
        .stdout(predicate::str::contains("Fintech Dashboard"))
        .stdout(predicate::str::contains("Neural Network Visualizer").not());
}

#[test]
fn search_is_case_insensitive_and_reaches_tags() {
    let dir = TempDir::new().unwrap();

    // "REACT" should match the tag "React" and also "React Native"
    let upper = folio_cmd(&dir)
        .args(["list", "--search", "REACT"])
        .output()
        .unwrap();
    let lower = folio_cmd(&dir)
        .args(["list", "--search", "react"])
        .output()
        .unwrap();

    assert!(upper.status.success());
    assert_eq!(upper.stdout, lower.stdout);
    let stdout = String::from_utf8_lossy(&upper.stdout);
    assert!(stdout.contains("Immersive AR Shopping"), "tag match missing: {stdout}");
}

#[test]
fn unmatched_search_prints_empty_state() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .args(["list", "--search", "zzz-no-such-project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no projects match)"));
}

#[test]
fn list_sorts_by_title() {
    let dir = TempDir::new().unwrap();
    let output = folio_cmd(&dir)
        .args(["list", "--sort", "title"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let creative = stdout.find("Creative Portfolio Site").unwrap();
    let fintech = stdout.find("Fintech Dashboard").unwrap();
    let vr = stdout.find("VR Art Gallery").unwrap();
    assert!(creative < fintech && fintech < vr, "titles out of order:\n{stdout}");
}

#[test]
fn list_rejects_unknown_sort_order() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .args(["list", "--sort", "newest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort order"));
}

#[test]
fn categories_include_all_with_full_count() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("All"))
        .stdout(predicate::str::contains("6"))
        .stdout(predicate::str::contains("Web Development"));
}

#[test]
fn stats_on_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("projects:     6"))
        .stdout(predicate::str::contains("featured:     3"))
        .stdout(predicate::str::contains("categories:   4"))
        .stdout(predicate::str::contains("theme:        light"));
}

#[test]
fn theme_defaults_to_light_then_toggles() {
    let dir = TempDir::new().unwrap();

    folio_cmd(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    folio_cmd(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme set to dark"));

    // Persisted across invocations
    folio_cmd(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn theme_set_and_env_default() {
    let dir = TempDir::new().unwrap();

    // FOLIO_THEME supplies the default until something is persisted
    folio_cmd(&dir)
        .env("FOLIO_THEME", "dark")
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));

    folio_cmd(&dir)
        .args(["theme", "set", "light"])
        .assert()
        .success();

    // Persisted value now wins over the env default
    folio_cmd(&dir)
        .env("FOLIO_THEME", "dark")
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    folio_cmd(&dir)
        .args(["theme", "set", "plaid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn type_emits_full_text() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .args(["type", "hi there", "--delay-ms", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hi there"));
}

#[test]
fn term_demo_types_skills_then_education() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .arg("term")
        .assert()
        .success()
        .stdout(predicate::str::contains("cat ~/Skills.txt"))
        .stdout(predicate::str::contains("React & Next.js"))
        .stdout(predicate::str::contains("cat ~/Education.txt"))
        .stdout(predicate::str::contains("BS Computer Science"))
        .stdout(predicate::str::contains("Oregon State University"));
}

#[test]
fn export_import_roundtrip() {
    let dir = TempDir::new().unwrap();
    let export_path = dir.path().join("catalog.json");

    folio_cmd(&dir)
        .arg("export")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    folio_cmd(&dir)
        .arg("import")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("projects=6"));

    // Imported catalog is served back
    folio_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("projects:     6"));
}

#[test]
fn import_rejects_invalid_catalog() {
    let dir = TempDir::new().unwrap();
    let bad_path = dir.path().join("bad.json");
    std::fs::write(&bad_path, "{\"version\": \"1.0.0\"}").unwrap();

    folio_cmd(&dir)
        .arg("import")
        .arg(&bad_path)
        .assert()
        .failure();
}

#[test]
fn contact_validates_before_sending() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .args([
            "contact",
            "--name",
            "Sarah",
            "--email",
            "not-an-email",
            "--message",
            "Hello!",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not look like an email"));
}

#[test]
fn contact_simulates_success() {
    let dir = TempDir::new().unwrap();
    folio_cmd(&dir)
        .args([
            "contact",
            "--name",
            "Sarah",
            "--email",
            "sarah@techcorp.com",
            "--message",
            "Loved the site!",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message sent!"));
}

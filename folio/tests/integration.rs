use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

fn folio() -> Command {
    Command::new(env!("CARGO_BIN_EXE_folio"))
}

#[test]
fn builds_site_from_fixture_content() {
    let output_dir = tempdir().expect("tempdir");

    folio()
        .args([
            "build",
            "--content",
            "tests/fixtures/profile.yaml",
            "--output",
            output_dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let index_path = output_dir.path().join("index.html");
    assert!(index_path.exists(), "index.html was not generated");

    let html = fs::read_to_string(&index_path).expect("Failed to read index.html");

    // Hero content
    assert!(html.contains("Kai Example"), "Missing display name");
    assert!(
        html.contains("Building fast things that learn"),
        "Missing tagline"
    );

    // Hosts the animation entry points attach to
    assert!(html.contains("id=\"particle-field\""), "Missing particle host");
    assert!(html.contains("id=\"typing-text\""), "Missing typing target");
    assert!(html.contains("id=\"skills-chart\""), "Missing chart canvas");
    assert!(html.contains("id=\"skill-layer\""), "Missing skill layer");

    // Embedded payloads
    assert!(
        html.contains("Independent AI Researcher"),
        "Missing typewriter roles"
    );
    assert!(
        html.contains(r#"{"name":"Transformer","x":8.0,"y":18.0}"#),
        "Missing skill payload"
    );
    assert!(
        html.contains(r#"{"name":"Reinforcement Learning","score":96.0}"#),
        "Missing radar payload"
    );
}

#[test]
fn bare_content_flag_defaults_to_build() {
    let output_dir = tempdir().expect("tempdir");

    folio()
        .args([
            "--content",
            "tests/fixtures/profile.yaml",
            "--output",
            output_dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(output_dir.path().join("index.html").exists());
}

#[test]
fn missing_content_file_fails() {
    let output_dir = tempdir().expect("tempdir");

    folio()
        .args([
            "build",
            "--content",
            "tests/fixtures/nonexistent.yaml",
            "--output",
            output_dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure();
}

#[test]
fn out_of_range_content_is_rejected() {
    let work_dir = tempdir().expect("tempdir");
    let content_path = work_dir.path().join("bad.yaml");
    fs::write(
        &content_path,
        "name: Kai\nroles: [Engineer]\nskills:\n  - { name: Lost, x: 150, y: 10 }\n",
    )
    .expect("write content");

    folio()
        .args([
            "build",
            "--content",
            content_path.to_str().unwrap(),
            "--output",
            work_dir.path().join("dist").to_str().unwrap(),
        ])
        .assert()
        .failure();
}

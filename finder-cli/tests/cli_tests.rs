use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("restaurant_data.json"),
        r#"[{"name": "Katz's Delicatessen"}, {"name": "Lombardi's"}, {"name": "Peter Luger"}]"#,
    )
    .unwrap();
    dir
}

fn command(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("restaurant-finder").unwrap();
    cmd.current_dir(cwd)
        .env_remove("FINDER_DATA_DIR")
        .env_remove("GEMINI_API_KEY")
        .env_remove("GOOGLE_GENAI_USE_VERTEXAI")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn find_prints_bounded_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir();
    let output = command(dir.path())
        .args(["find", "italian", "New York", "--count", "2", "--data-dir"])
        .arg(dir.path())
        .output()?;

    assert!(output.status.success());
    let records: Vec<Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "Katz's Delicatessen");
    Ok(())
}

#[test]
fn find_unknown_location_prints_empty_array() -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir();
    command(dir.path())
        .args(["find", "thai", "Boston", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::eq("[]\n"));
    Ok(())
}

#[test]
fn find_without_data_prints_empty_array() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    command(dir.path())
        .args(["find", "italian", "New York", "--count", "3", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::eq("[]\n"));
    Ok(())
}

#[test]
fn serve_requires_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    command(dir.path())
        .args(["serve", "--port", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GEMINI_API_KEY environment variable not set"));
    Ok(())
}

use assert_cmd::{crate_name, Command};
use assertables::{assert_contains, assert_starts_with};
use std::fs;
use tempfile::TempDir;

const MAP: &str = r#"{"view_box": [20, 10], "regions": [
    {"code": "W", "name": "West", "path": "M0 0 H10 V10 H0 Z", "photo_count": 2},
    {"code": "E", "name": "East", "path": "M10 0 H20 V10 H10 Z"}
]}"#;

fn wanderstate() -> Command {
    Command::cargo_bin(crate_name!()).expect("binary built")
}

#[test]
fn test_cmdline_help() {
    let output = wanderstate().arg("-h").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).into_owned();
    assert_contains!(stdout, "Usage:");
    assert_contains!(stdout, "--hit");
}

#[test]
fn test_cmdline_version() {
    let output = wanderstate().arg("--version").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).into_owned();
    assert_starts_with!(stdout, "wanderstate ");
}

#[test]
fn test_cmdline_stdin_to_stdout() {
    let output = wanderstate()
        .args(["--width", "224", "--height", "124"])
        .write_stdin(MAP)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).into_owned();
    assert_starts_with!(stdout, "<svg");
    assert_contains!(stdout, r#"<g transform="translate(12 12)">"#);
    assert_contains!(stdout, r#"<path d="M 0 0 L 100 0 L 100 100 L 0 100 Z"/>"#);
}

#[test]
fn test_cmdline_bad_input() {
    wanderstate().write_stdin("[1, 2, 3]").assert().failure();
    wanderstate()
        .arg("does/not/exist.json")
        .assert()
        .failure();
}

#[test]
fn test_cmdline_file_to_file() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("map.json");
    let output = dir.path().join("map.svg");
    fs::write(&input, MAP).expect("write map");

    wanderstate()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--select", "E"])
        .assert()
        .success()
        .stdout("");
    let svg = fs::read_to_string(&output).expect("output written");
    assert_contains!(svg, r##"<g id="E" fill="#CCCCCC" stroke="blue""##);
}

#[test]
fn test_cmdline_json_format() {
    let output = wanderstate()
        .args(["--format", "json", "--padding", "0", "--width", "20", "--height", "10"])
        .write_stdin(MAP)
        .assert()
        .success();
    let v: serde_json::Value =
        serde_json::from_slice(&output.get_output().stdout).expect("json output");
    assert_eq!(v["regions"][0]["band"], "light");
    assert_eq!(v["regions"][1]["paths"][0], "M 10 0 L 20 0 L 20 10 L 10 10 Z");
}

#[test]
fn test_cmdline_hit() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("map.json");
    fs::write(&input, MAP).expect("write map");

    let args = ["--padding", "0", "--width", "200", "--height", "100", "--hit"];
    wanderstate()
        .arg(&input)
        .args(args)
        .arg("150,50")
        .assert()
        .success()
        .stdout("E\n");
    wanderstate()
        .arg(&input)
        .args(args)
        .arg("50,50")
        .assert()
        .success()
        .stdout("W\n");
    wanderstate()
        .arg(&input)
        .args(args)
        .arg("-5,50")
        .assert()
        .success()
        .stdout("-\n");
    wanderstate()
        .arg(&input)
        .args(args)
        .arg("nonsense")
        .assert()
        .failure();
}

#[test]
fn test_cmdline_output_same_as_input() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("map.json");
    fs::write(&input, MAP).expect("write map");

    wanderstate()
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&input).expect("unchanged"), MAP);
}

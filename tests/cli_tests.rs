use httpmock::prelude::*;
use std::process::{Command, Output};

fn run_inspace(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_inspace"))
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("NO_COLOR")
        .output()
        .expect("failed to spawn inspace binary")
}

#[test]
fn test_unreachable_endpoint_exits_with_error() {
    let output = run_inspace(&[
        "--api-endpoint",
        "http://127.0.0.1:1/astros.json",
        "--no-clear",
    ]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.starts_with("error:"), "stderr was: {}", stderr);
}

#[test]
fn test_error_status_exits_with_error_and_no_output() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/astros.json");
        then.status(500);
    });

    let output = run_inspace(&["--api-endpoint", &server.url("/astros.json")]);

    api_mock.assert();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("500"));
}

#[test]
fn test_invalid_endpoint_is_rejected_before_any_request() {
    let output = run_inspace(&["--api-endpoint", "ftp://example.com/astros.json"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.starts_with("error:"));
    assert!(stderr.contains("api_endpoint"));
}

#[test]
fn test_successful_run_prints_listing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/astros.json");
        then.status(200).json_body(serde_json::json!({
            "number": 2,
            "people": [
                {"name": "A", "craft": "ISS"},
                {"name": "B", "craft": "Tiangong"}
            ]
        }));
    });

    let output = run_inspace(&["--api-endpoint", &server.url("/astros.json"), "--no-clear"]);

    api_mock.assert();
    assert_eq!(output.status.code(), Some(0));

    // Piped stdout gets no colors.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\x1b'));
    let person_lines: Vec<&str> = stdout
        .lines()
        .skip_while(|line| !line.contains("people in space"))
        .collect();
    assert_eq!(
        person_lines,
        vec![
            "There is currently 2 people in space",
            "A - ISS",
            "B - Tiangong"
        ]
    );
}

//! Integration tests for the `setup-verifier` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use std::fs;
use std::net::TcpListener;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn verifier(dir: &TempDir, backend: &str, frontend: &str) -> Command {
    let mut cmd = Command::new(cargo_bin("setup-verifier"));
    cmd.current_dir(dir.path())
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("VERIFY_BACKEND_URL", backend)
        .env("VERIFY_FRONTEND_URL", frontend);
    cmd
}

#[test]
fn cli_reports_unreachable_deployment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = verifier(&temp, &closed_url(), &closed_url());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Overall: 0/5 tests passed"))
        .stdout(predicate::str::contains("Environment: [FAIL]"))
        .stdout(predicate::str::contains("Make sure Docker is running"));
    Ok(())
}

#[test]
fn cli_reads_key_from_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".env"), "OPENAI_API_KEY=sk-from-file\n")?;
    let mut cmd = verifier(&temp, &closed_url(), &closed_url());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("OpenAI API key is configured"))
        .stdout(predicate::str::contains("Overall: 1/5 tests passed"))
        .stdout(predicate::str::contains("Tips:").not());
    Ok(())
}

#[test]
fn cli_succeeds_against_healthy_deployment() -> Result<(), Box<dyn std::error::Error>> {
    let backend = MockServer::start();
    backend.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200).json_body(json!({"status": "ok"}));
    });
    backend.mock(|when, then| {
        when.method(GET).path("/visuals");
        then.status(200).json_body(json!({"visuals": []}));
    });
    backend.mock(|when, then| {
        when.method(POST).path("/generate-visual");
        then.status(200)
            .json_body(json!({"success": true, "visual_id": "v1", "user_input": "circle"}));
    });
    let frontend = MockServer::start();
    frontend.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("ok");
    });

    let temp = TempDir::new()?;
    let mut cmd = verifier(&temp, &backend.base_url(), &frontend.base_url());
    cmd.env("OPENAI_API_KEY", "sk-test");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Backend is healthy"))
        .stdout(predicate::str::contains("0 visuals found"))
        .stdout(predicate::str::contains("Visual ID: v1"))
        .stdout(predicate::str::contains("Overall: 5/5 tests passed"))
        .stdout(predicate::str::contains(format!(
            "Frontend: {}",
            frontend.base_url()
        )));
    Ok(())
}

#[test]
fn cli_ignores_placeholder_key() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = verifier(&temp, &closed_url(), &closed_url());
    cmd.env("OPENAI_API_KEY", "your_openai_api_key_here");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("OPENAI_API_KEY not configured properly"))
        .stdout(predicate::str::contains("Please set OPENAI_API_KEY"));
    Ok(())
}

#[test]
fn cli_runs_all_checks_with_unreadable_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".env"), b"OPENAI_API_KEY=\xff\xfe\n")?;
    let mut cmd = verifier(&temp, &closed_url(), &closed_url());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("OPENAI_API_KEY not configured properly"))
        .stdout(predicate::str::contains("Overall: 0/5 tests passed"))
        .stdout(predicate::str::contains("Tips:"));
    Ok(())
}

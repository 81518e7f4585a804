//! End-to-end runs of the standard suite against mock deployments.

use std::net::TcpListener;

use httpmock::prelude::*;
use serde_json::json;
use setup_verifier::config::{Environment, VerifierConfig, CREDENTIAL_VAR, SAMPLE_INPUT};
use setup_verifier::run_verification;
use setup_verifier::ui::{MockUI, StatusKind};

const CHECK_NAMES: [&str; 5] = [
    "Environment",
    "Backend Health",
    "Frontend Access",
    "Visuals Endpoint",
    "Visual Generation",
];

/// A local URL nothing is listening on.
fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn healthy_backend() -> MockServer {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200).json_body(json!({"status": "ok"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/visuals");
        then.status(200).json_body(json!({"visuals": [{"id": 1}, {"id": 2}]}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/generate-visual")
            .json_body(json!({"user_input": SAMPLE_INPUT}));
        then.status(200).json_body(json!({
            "success": true,
            "visual_id": "abc123",
            "user_input": SAMPLE_INPUT
        }));
    });
    server
}

fn healthy_frontend() -> MockServer {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("<html></html>");
    });
    server
}

fn config(backend: &str, frontend: &str) -> VerifierConfig {
    VerifierConfig::default().with_urls(backend.parse().unwrap(), frontend.parse().unwrap())
}

#[test]
fn all_checks_pass() {
    let backend = healthy_backend();
    let frontend = healthy_frontend();
    let env = Environment::from_pairs([(CREDENTIAL_VAR, "sk-test")]);
    let config = config(&backend.base_url(), &frontend.base_url());
    let mut ui = MockUI::new();

    let report = run_verification(&env, &config, &mut ui).unwrap();

    assert_eq!(report.total(), 5);
    assert!(report.all_passed());
    assert!(ui.has_message("Overall: 5/5 tests passed"));
    assert!(ui.has_success("All tests passed"));
    assert!(ui.has_message(&format!("Frontend: {}", frontend.base_url())));
    assert!(ui.has_message(&format!("API Docs: {}/docs", backend.base_url())));
    assert!(ui.has_success("Visuals endpoint working: 2 visuals found"));
    assert!(ui.has_message("Visual ID: abc123"));
    assert!(ui.hints().is_empty());
}

#[test]
fn environment_failure_prints_tips() {
    let backend = healthy_backend();
    let frontend = healthy_frontend();
    let env = Environment::from_pairs([(CREDENTIAL_VAR, "your_openai_api_key_here")]);
    let config = config(&backend.base_url(), &frontend.base_url());
    let mut ui = MockUI::new();

    let report = run_verification(&env, &config, &mut ui).unwrap();

    assert_eq!(report.passed(), 4);
    assert!(ui.has_message("Overall: 4/5 tests passed"));
    assert!(ui.has_hint("Please set OPENAI_API_KEY in your .env file"));
    assert!(ui.has_hint("Make sure Docker is running"));
    assert!(ui.has_hint("docker-compose up --build"));
    assert!(!ui.has_success("All tests passed"));
}

#[test]
fn unreachable_deployment_still_reports_every_check() {
    let env = Environment::from_pairs([(CREDENTIAL_VAR, "sk-test")]);
    let config = config(&closed_url(), &closed_url());
    let mut ui = MockUI::new();

    let report = run_verification(&env, &config, &mut ui).unwrap();

    let names: Vec<&str> = report.results().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, CHECK_NAMES);
    assert_eq!(report.passed(), 1);
    assert!(ui.has_message("Overall: 1/5 tests passed"));
    assert!(ui.has_warning("Some tests failed"));
    // Tips are only for a broken environment.
    assert!(!ui.has_hint("Docker"));
}

#[test]
fn summary_lists_checks_in_order() {
    let backend = MockServer::start();
    backend.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(500);
    });
    let frontend = healthy_frontend();
    let env = Environment::default();
    let config = config(&backend.base_url(), &frontend.base_url());
    let mut ui = MockUI::new();

    run_verification(&env, &config, &mut ui).unwrap();

    let expected: Vec<(StatusKind, String)> = vec![
        (StatusKind::Fail, "Environment".to_string()),
        (StatusKind::Fail, "Backend Health".to_string()),
        (StatusKind::Pass, "Frontend Access".to_string()),
        (StatusKind::Fail, "Visuals Endpoint".to_string()),
        (StatusKind::Fail, "Visual Generation".to_string()),
    ];
    assert_eq!(ui.statuses(), expected.as_slice());
    assert!(ui.has_error("Backend Health failed"));
}

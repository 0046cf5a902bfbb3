use crate::harness::TestContext;
use mockito::Matcher;
use predicates::prelude::*;

const POSTER_PNG_BASE64: &str = "iVBORw0KGgo=";

fn trip() -> Vec<&'static str> {
    vec![
        "generate",
        "-t",
        "Road to Lisbon",
        "-e",
        "Road to Lisbon",
        "-s",
        "Porto@2025-04-02",
        "-s",
        "Coimbra@2025-04-04",
        "-s",
        "Lisbon@2025-04-07",
        "--yes",
    ]
}

fn point_config_at(ctx: &TestContext, server: &mockito::Server) {
    ctx.write_config(&format!(
        "[gemini]\napi_url = \"{}\"\nmodel = \"test-model\"\ntimeout_secs = 5\n",
        server.url()
    ));
}

#[test]
fn generate_mock_saves_placeholder_poster() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(trip())
        .arg("--mock")
        .arg("-o")
        .arg(ctx.out_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== MOCK MODE ==="))
        .stdout(predicate::str::contains("Saved poster to"));

    let posters = ctx.saved_posters();
    assert_eq!(posters.len(), 1);
    assert_eq!(posters[0].extension().and_then(|e| e.to_str()), Some("png"));
}

#[test]
fn generate_uses_configured_output_directory() {
    let ctx = TestContext::new();
    ctx.write_config(&format!("[output]\ndirectory = {:?}\n", ctx.out_dir().display().to_string()));

    ctx.cli().args(trip()).arg("--mock").assert().success();

    assert_eq!(ctx.saved_posters().len(), 1);
}

#[test]
fn generate_without_api_key_fails_with_friendly_message() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(trip())
        .arg("-o")
        .arg(ctx.out_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Poster generation failed. Check your API key"));

    assert!(ctx.saved_posters().is_empty());
}

#[test]
fn generate_sends_prompt_and_writes_returned_image() {
    let ctx = TestContext::new();
    ctx.save_template("Poster for {{englishTitle}} ({{dateRange}})");
    let mut server = mockito::Server::new();
    point_config_at(&ctx, &server);

    let mock = server
        .mock("POST", "/models/test-model:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJsonString(
            r#"{"contents": [{"parts": [{"text": "Poster for Road to Lisbon (2025.04.02 – 2025.04.07)"}]}]}"#
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"candidates": [{{"content": {{"parts": [{{"inlineData": {{"mimeType": "image/png", "data": "{}"}}}}]}}}}]}}"#,
            POSTER_PNG_BASE64
        ))
        .expect(1)
        .create();

    ctx.cli()
        .args(trip())
        .arg("-o")
        .arg(ctx.out_dir())
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .success();

    mock.assert();
    let posters = ctx.saved_posters();
    assert_eq!(posters.len(), 1);
    assert_eq!(std::fs::read(&posters[0]).unwrap(), b"\x89PNG\r\n\x1a\n");
}

#[test]
fn generate_prompt_file_replaces_rendered_prompt() {
    let ctx = TestContext::new();
    let prompt = ctx.write_file("prompt.txt", b"hand written prompt");
    let mut server = mockito::Server::new();
    point_config_at(&ctx, &server);

    let mock = server
        .mock("POST", "/models/test-model:generateContent")
        .match_body(Matcher::PartialJsonString(
            r#"{"contents": [{"parts": [{"text": "hand written prompt"}]}]}"#.to_string(),
        ))
        .with_status(200)
        .with_body(format!(
            r#"{{"candidates": [{{"content": {{"parts": [{{"inlineData": {{"data": "{}"}}}}]}}}}]}}"#,
            POSTER_PNG_BASE64
        ))
        .expect(1)
        .create();

    ctx.cli()
        .args(trip())
        .arg("--prompt-file")
        .arg(&prompt)
        .arg("-o")
        .arg(ctx.out_dir())
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .success();

    mock.assert();
}

#[test]
fn generate_api_error_is_attempted_once() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    point_config_at(&ctx, &server);

    let mock = server
        .mock("POST", "/models/test-model:generateContent")
        .with_status(503)
        .with_body(r#"{"error": {"message": "model overloaded"}}"#)
        .expect(1)
        .create();

    ctx.cli()
        .args(trip())
        .arg("-o")
        .arg(ctx.out_dir())
        .env("GEMINI_API_KEY", "test-key")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Poster generation failed"));

    mock.assert();
    assert!(ctx.saved_posters().is_empty());
}

#[test]
fn generate_rejects_unknown_config_keys() {
    let ctx = TestContext::new();
    ctx.write_config("[gemini]\nretries = 3\n");

    ctx.cli()
        .args(trip())
        .arg("--mock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("retries"));
}

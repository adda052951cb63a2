mod harness;

use harness::git_repository::{self, log_subjects, status};
use harness::{OWNER, TestContext};
use mockito::Matcher;
use predicates::prelude::*;
use serde_json::json;

fn dispatch_path() -> String {
    format!("/repos/{OWNER}/bntf-ios-app/dispatches")
}

/// Archive whose notify section points at a local mock server.
fn archive_with_api(server: &mockito::Server) -> TestContext {
    let ctx = TestContext::new();
    ctx.write_config(&format!(
        "[notify]\napi_url = \"{}\"\nmax_retries = 1\nretry_delay_ms = 1\n",
        server.url()
    ));
    ctx.cli().arg("init").assert().success();
    ctx
}

#[test]
fn notify_dry_run_prints_payload() {
    let ctx = TestContext::without_git();
    ctx.init_archive();
    ctx.write_file("Policies/x.pdf", b"%PDF");

    let output = ctx.cli().args(["notify", "--dry-run"]).assert().success().get_output().stdout.clone();
    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(payload["event_type"], "document_update");
    assert_eq!(payload["client_payload"]["totalDocuments"], 1);
    assert_eq!(payload["client_payload"]["categoryCounts"]["Policies"], 1);
    assert_eq!(payload["client_payload"]["updatedCategories"].as_array().unwrap().len(), 6);
    assert_eq!(payload["client_payload"]["indexUrl"], ctx.raw_url("pdf-index.json"));
}

#[test]
fn notify_requires_token() {
    let ctx = TestContext::without_git();
    ctx.init_archive();

    ctx.cli()
        .arg("notify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment variable 'GITHUB_TOKEN' is not set"));
}

#[test]
fn notify_posts_repository_dispatch() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", dispatch_path().as_str())
        .match_header("authorization", "Bearer test-token")
        .match_header("accept", "application/vnd.github+json")
        .match_body(Matcher::PartialJson(json!({
            "event_type": "document_update",
            "client_payload": { "totalDocuments": 1, "version": "2.0" }
        })))
        .with_status(204)
        .create();

    let ctx = archive_with_api(&server);
    ctx.write_file("Vedtekter/Vedtekter.pdf", b"%PDF");

    ctx.cli()
        .arg("notify")
        .env("GITHUB_TOKEN", "test-token")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sent document_update event (1 documents, HTTP 204)"));

    mock.assert();
}

#[test]
fn notify_reports_api_errors() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", dispatch_path().as_str())
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create();

    let ctx = archive_with_api(&server);

    ctx.cli()
        .arg("notify")
        .env("GITHUB_TOKEN", "wrong")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dispatch failed (401): Bad credentials"));

    mock.assert();
}

#[test]
fn webhook_writes_config_without_secret_value() {
    let ctx = TestContext::without_git();

    ctx.cli()
        .arg("webhook")
        .env("BNTF_WEBHOOK_SECRET", "super-secret-value")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote webhook-config.json"));

    let content = ctx.read_file("webhook-config.json");
    assert!(!content.contains("super-secret-value"));

    let config: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(config["config"]["url"], "https://api.bntf.no/webhook/document-update");
    assert_eq!(config["config"]["secretEnv"], "BNTF_WEBHOOK_SECRET");
    assert_eq!(config["events"], json!(["push", "release"]));
    assert_eq!(config["triggers"]["onPush"], true);
}

#[test]
fn sync_commits_and_pushes_to_remote() {
    let ctx = TestContext::new();
    ctx.init_archive();
    let remote = ctx.add_bare_remote();
    ctx.write_file("Policies/x.pdf", b"%PDF");

    ctx.cli()
        .args(["sync", "--no-notify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Committed"))
        .stdout(predicate::str::contains("Pushed main to origin"))
        .stdout(predicate::str::contains("Notification skipped: disabled with --no-notify"));

    assert!(status(ctx.work_dir()).is_empty(), "working tree should be clean after sync");
    let subjects = log_subjects(&remote, "main");
    assert_eq!(subjects.len(), 1);
    assert!(subjects[0].starts_with("Update documents: 1 documents - "), "{}", subjects[0]);
    assert!(subjects[0].ends_with(" UTC"), "{}", subjects[0]);

    let index: serde_json::Value = serde_json::from_str(&ctx.read_file("pdf-index.json")).unwrap();
    assert_eq!(index["statistics"]["totalDocuments"], 1);

    ctx.cli()
        .args(["sync", "--no-notify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to sync"));
    assert_eq!(log_subjects(&remote, "main").len(), 1);
}

#[test]
fn sync_without_push_only_commits_locally() {
    let ctx = TestContext::new();
    ctx.init_archive();
    let remote = ctx.add_bare_remote();

    ctx.cli()
        .args(["s", "--no-push", "-m", "Nye dokumenter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pushed").not())
        .stdout(predicate::str::contains("Notification skipped: changes were not pushed"));

    let subjects = log_subjects(ctx.work_dir(), "main");
    assert!(subjects[0].starts_with("Nye dokumenter: 0 documents - "));
    assert!(git_repository::git(&remote, &["for-each-ref"]).trim().is_empty());
}

#[test]
fn sync_refuses_invalid_archive() {
    let ctx = TestContext::new();
    ctx.init_archive();
    ctx.write_file("Policies/notes.txt", b"not a pdf");

    ctx.cli()
        .args(["sync", "--no-push"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[ERROR] Policies/notes.txt"))
        .stderr(predicate::str::contains("Validation failed: 1 error(s)"));

    assert!(!status(ctx.work_dir()).is_empty(), "nothing should have been committed");
}

#[test]
fn sync_outside_git_repository_fails() {
    let ctx = TestContext::without_git();
    ctx.init_archive();

    ctx.cli()
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a git repository"));
}

#[test]
fn sync_skips_notification_without_token() {
    let ctx = TestContext::new();
    ctx.init_archive();
    ctx.add_bare_remote();

    ctx.cli()
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Notification skipped: environment variable 'GITHUB_TOKEN' is not set",
        ));
}

#[test]
fn sync_notifies_app_with_updated_categories() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", dispatch_path().as_str())
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::PartialJson(json!({
            "client_payload": { "totalDocuments": 1, "updatedCategories": ["Policies"] }
        })))
        .with_status(204)
        .create();

    let ctx = archive_with_api(&server);
    ctx.commit_all("Initial archive");
    ctx.add_bare_remote();
    ctx.write_file("Policies/x.pdf", b"%PDF");

    ctx.cli()
        .arg("sync")
        .env("GITHUB_TOKEN", "test-token")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pushed main to origin"))
        .stdout(predicate::str::contains("Notified the app (Policies)"));

    mock.assert();
}

#[test]
fn sync_keeps_push_when_notification_fails() {
    let mut server = mockito::Server::new();
    let mock =
        server.mock("POST", dispatch_path().as_str()).with_status(500).expect(1).create();

    let ctx = archive_with_api(&server);
    let remote = ctx.add_bare_remote();

    ctx.cli()
        .arg("sync")
        .env("GITHUB_TOKEN", "test-token")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pushed main to origin"))
        .stderr(predicate::str::contains("Notification failed"));

    mock.assert();
    assert_eq!(log_subjects(&remote, "main").len(), 1);
}

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

const LISTINGS_BODY: &str = include_str!("../../../fixtures/listings/events.json");
const CONTENT_BODY: &str = include_str!("../../../fixtures/content/events_page.html");

fn write_config(dir: &Path, server_uri: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let content = format!(
        r#"url = "{server_uri}/api/events"
url2 = "{server_uri}/events"
base_url = "https://www.example.org"
organizer = "CREW SRQ"
industry = "Commercial Real Estate"
market = "Sarasota"
scraper_interval = 0
"#
    );
    std::fs::write(&path, content).unwrap();
    path
}

async fn mount_endpoints(server: &wiremock::MockServer) {
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/api/events"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_raw(LISTINGS_BODY, "application/json"),
        )
        .expect(1)
        .mount(server)
        .await;

    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/events"))
        .and(wiremock::matchers::query_param("chapters", "CN,SAR"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(CONTENT_BODY))
        .expect(1)
        .mount(server)
        .await;
}

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("crewsrq");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_fetch_help_lists_options() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("crewsrq");
    cmd.args(["fetch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--csv"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_fetch_without_config_fails() {
    // Arrange
    let home = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("crewsrq");
    cmd.env("HOME", home.path())
        .arg("fetch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_config_show_prints_defaults() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "http://127.0.0.1:9");

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("crewsrq");
    cmd.args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("lookahead_days = 365"))
        .stdout(predicate::str::contains("chapter_codes = \"CN,SAR\""))
        .stdout(predicate::str::contains("on_unresolved_slug = \"skip\""));
}

#[test]
fn test_config_show_rejects_invalid_url() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "url = \"nope\"\nurl2 = \"https://x.org/events\"\nbase_url = \"https://x.org\"\n",
    )
    .unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("crewsrq");
    cmd.args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[tokio::test]
async fn test_fetch_prints_joined_table() {
    // Arrange
    let server = wiremock::MockServer::start().await;
    mount_endpoints(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), &server.uri());

    // Act
    let output = tokio::task::spawn_blocking(move || {
        cargo_bin_cmd!("crewsrq")
            .args(["fetch", "--config"])
            .arg(&path)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Event Title"));
    assert!(stdout.contains("Holiday Gala"));
    assert!(stdout.contains("https://www.example.org/events/holiday-gala"));
    assert!(stdout.contains("2024-12-05 17:30:00"));
    assert!(!stdout.contains("Tampa Bay Mixer"));
    assert!(!stdout.contains("Breakfast Roundtable"));
    assert_eq!(stdout.lines().count(), 2);
}

#[tokio::test]
async fn test_fetch_json_and_csv() {
    // Arrange
    let server = wiremock::MockServer::start().await;
    mount_endpoints(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), &server.uri());
    let csv_path = dir.path().join("events.csv");
    let csv_arg = csv_path.clone();

    // Act
    let output = tokio::task::spawn_blocking(move || {
        cargo_bin_cmd!("crewsrq")
            .args(["fetch", "--json", "--config"])
            .arg(&path)
            .arg("--csv")
            .arg(&csv_arg)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    // Assert
    assert!(output.status.success());
    let events: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(events.as_array().unwrap().len(), 1);
    assert_eq!(events[0]["Event Title"], "Holiday Gala");
    assert_eq!(events[0]["Organizer"], "CREW SRQ");

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Date,Start Time,End Time,Title"));
    assert!(csv.contains("2024-12-05,17:30,21:00,Holiday Gala,CREW SRQ"));
}

#[tokio::test]
async fn test_fetch_fails_when_content_page_changes() {
    // Arrange
    let server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::path("/api/events"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;
    wiremock::Mock::given(wiremock::matchers::path("/events"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), &server.uri());

    // Act
    let output = tokio::task::spawn_blocking(move || {
        cargo_bin_cmd!("crewsrq")
            .args(["fetch", "--config"])
            .arg(&path)
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    // Assert
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("__NEXT_DATA__"), "{stderr}");
}

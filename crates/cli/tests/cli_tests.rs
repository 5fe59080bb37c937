//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("credence");
    cmd.env_remove("FACT_CHECK_API_KEY").env_remove("NEWS_API_KEY").env_remove("RUST_LOG");
    cmd
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn get_article_path(name: &str) -> String {
    get_fixture_path(&format!("articles/{}", name))
}

fn json_report(args: &[&str]) -> serde_json::Value {
    let output = cmd().args(["-f", "json", "--seed", "1"]).args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_article_path("balanced.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Credibility Score"))
        .stdout(predicate::str::contains("Fact Checks (simulated)"));
}

#[test]
fn test_cli_stdin_input() {
    let text = std::fs::read_to_string(get_article_path("balanced.txt")).unwrap();
    cmd()
        .arg("-")
        .write_stdin(text)
        .assert()
        .success()
        .stdout(predicate::str::contains("Text Analysis"));
}

#[test]
fn test_cli_json_format() {
    let report = json_report(&[&get_article_path("balanced.txt")]);
    let breakdown = &report["credibility"]["breakdown"];

    for key in ["Source Credibility", "Content Analysis", "Fact Checking", "Bias Assessment"] {
        assert!(breakdown[key].is_number(), "missing {key}");
    }
    assert_eq!(breakdown["Source Credibility"], 50.0);
    assert_eq!(report["fact_checks"]["fallback_used"], true);
    assert!(report["credibility"]["overall_score"].as_u64().unwrap() <= 100);
}

#[test]
fn test_cli_seed_is_deterministic() {
    let path = get_article_path("balanced.txt");
    assert_eq!(json_report(&[&path]), json_report(&[&path]));
}

#[test]
fn test_cli_html_page() {
    cmd()
        .arg(get_fixture_path("pages/news_article.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Credibility Score"));
}

#[test]
fn test_cli_html_stdin() {
    let html = std::fs::read_to_string(get_fixture_path("pages/news_article.html")).unwrap();
    let output = cmd().args(["-f", "json", "-"]).write_stdin(html).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["text"]["word_count"].as_u64().unwrap() > 0);
}

#[test]
fn test_cli_source_url() {
    let report = json_report(&["--url", "https://apnews.com/article/x", &get_article_path("balanced.txt")]);

    assert_eq!(report["source_url"], "https://apnews.com/article/x");
    assert_eq!(report["credibility"]["breakdown"]["Source Credibility"], 90.0);
}

#[test]
fn test_cli_dataset() {
    let report = json_report(&[
        "--dataset",
        &get_fixture_path("unreliable_sources.csv"),
        "--url",
        "https://hoax-daily.example/a",
        &get_article_path("balanced.txt"),
    ]);

    assert_eq!(report["credibility"]["breakdown"]["Source Credibility"], 0.0);
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.json");

    cmd()
        .args(["-f", "json", "-o", output.to_str().unwrap()])
        .arg(get_article_path("clickbait.txt"))
        .assert()
        .success();

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert!(written["sentiment"]["bias_score"].is_number());
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_article_path("balanced.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Credence"));
}

#[test]
fn test_cli_invalid_file() {
    cmd().arg("nonexistent.txt").assert().failure();
}

#[test]
fn test_cli_missing_dataset() {
    cmd()
        .args(["--dataset", "nonexistent.csv", &get_article_path("balanced.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not found"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "yaml", &get_article_path("balanced.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

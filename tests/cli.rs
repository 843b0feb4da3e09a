use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("tooltip-review").unwrap()
}

#[test]
fn review_reads_stdin() {
    cmd()
        .args(["review", "--category", "financial"])
        .write_stdin("Costs rose 12% last year.")
        .assert()
        .success()
        .stdout(contains("\"hasMetrics\": true"))
        .stdout(contains("include a practical example"));
}

#[test]
fn enhance_with_seed_is_repeatable() {
    let run = || {
        cmd()
            .args(["enhance", "--category", "staffing", "--seed", "7"])
            .write_stdin("Describe how you handle staff scheduling each week.")
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let text = String::from_utf8(first.stdout).unwrap();
    assert!(text.starts_with("Describe how you handle staff scheduling each week."));
}

#[test]
fn report_defaults_to_sample_questions() {
    cmd()
        .args(["report", "--seed", "1"])
        .assert()
        .success()
        .stdout(contains("# Tooltip Readability Review Report"))
        .stdout(contains("- Total tooltips reviewed: 4"))
        .stdout(contains("## Top Issues"));
}

#[test]
fn report_json_from_question_file() {
    let dir = tempfile::tempdir().unwrap();
    let questions = dir.path().join("questions.json");
    std::fs::write(
        &questions,
        r#"[
            {"id": "a", "text": "A?", "category": "financial", "helpText": "Costs rose 12%."},
            {"id": "b", "text": "B?", "category": "marketing"}
        ]"#,
    )
    .unwrap();

    cmd()
        .args(["report", "--json", "--questions"])
        .arg(&questions)
        .assert()
        .success()
        .stdout(contains("\"total_reviewed\": 2"))
        .stdout(contains("\"marketing\""));
}

#[test]
fn report_accepts_null_help_text() {
    let dir = tempfile::tempdir().unwrap();
    let questions = dir.path().join("questions.json");
    std::fs::write(
        &questions,
        r#"[{"id": "a", "text": "A?", "category": "financial", "helpText": null}]"#,
    )
    .unwrap();

    cmd()
        .args(["report", "--seed", "1", "--questions"])
        .arg(&questions)
        .assert()
        .success()
        .stdout(contains("- financial: 1/1 need improvement (100%)"))
        .stdout(contains("add a complete explanation."));
}

#[test]
fn report_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.md");

    cmd()
        .args(["report", "--seed", "3", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(contains("Report written to"));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("## Category Breakdown"));
    assert!(written.contains("## Example Enhancements"));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"min_readability": 250}"#).unwrap();

    cmd()
        .args(["review", "--config"])
        .arg(&config)
        .write_stdin("Some text.")
        .assert()
        .failure()
        .stderr(contains("min_readability"));
}

#[test]
fn missing_question_file_fails() {
    cmd()
        .args(["report", "--questions", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(contains("does-not-exist.json"));
}

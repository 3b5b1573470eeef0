use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const ANSWERS_YAML: &str = r#"
visa_type:
  key: o1a
  label: O-1A
  cost: 6000
  time: { optimistic: 3, intermediate: 5, pessimistic: 9 }
current_status: { label: F-1, cost_adjustment: 400 }
premium: { cost: 2805, time_reduction: 0.5 }
"#;

#[test]
fn plot_timeline_creates_png() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("answers.yaml");
    input.write_str(ANSWERS_YAML).unwrap();
    let output = temp.child("timeline.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("visa-estimates");
    cmd.args([
        "plot-timeline",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
        "-s",
        "pessimistic",
        "-r",
        "2026-03-01",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Timeline plot written to"));

    let metadata = fs::metadata(output.path()).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn plot_costs_creates_png() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("answers.yaml");
    input.write_str(ANSWERS_YAML).unwrap();
    let output = temp.child("costs.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("visa-estimates");
    cmd.args([
        "plot-costs",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cost plot written to"));

    let metadata = fs::metadata(output.path()).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn plot_timeline_fails_without_visa_type() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("answers.yaml");
    input.write_str("country: { label: Mexico, time_multiplier: 1.2 }\n").unwrap();
    let output = temp.child("timeline.png");

    let mut cmd = assert_cmd::cargo_bin_cmd!("visa-estimates");
    cmd.args([
        "plot-timeline",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to plot timeline"));
}

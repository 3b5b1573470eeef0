use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("visa-estimates");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("estimate"))
        .stdout(predicate::str::contains("plot-timeline"));
    Ok(())
}

#[test]
fn rejects_unknown_scenario() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("visa-estimates");
    cmd.args(["estimate", "-i", "a.yaml", "-o", "b.yaml", "-s", "likely"]);
    cmd.assert().failure();
}

#[test]
fn invalid_log_filter_in_environment_is_reported() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("visa-estimates");
    cmd.env("VISA_ESTIMATES_LOG", "visa_estimates=loud")
        .args(["completions", "bash"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize logging"))
        .stderr(predicate::str::contains("visa_estimates=loud"));
}

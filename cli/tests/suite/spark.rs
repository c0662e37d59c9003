use anyhow::Result;
use predicates::str::contains;

use super::uniplot;

#[test]
fn pipe_passes_data_through_unchanged() -> Result<()> {
    let data = "line one\nline two\n".repeat(100);
    uniplot()
        .args(["pipe", "--columns", "40", "--interval-ms", "5"])
        .write_stdin(data.clone())
        .assert()
        .success()
        .stdout(data);
    Ok(())
}

#[test]
fn sample_draws_on_stderr() -> Result<()> {
    uniplot()
        .args(["sample", "--columns", "40", "--interval-ms", "20", "--unit", "req"])
        .write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stdout("")
        .stderr(contains("req/s"));
    Ok(())
}

#[test]
fn sample_skips_malformed_lines() -> Result<()> {
    uniplot()
        .args(["--color", "never", "sample", "--columns", "40", "--interval-ms", "20"])
        .write_stdin("1\nfast\n3\n")
        .assert()
        .success()
        .stderr(contains("skipping malformed line 2"));
    Ok(())
}

use anyhow::Result;
use predicates::str::contains;
use tempfile::TempDir;

use super::uniplot;

const SAMPLES: &str = "0\n1\n1\n1\n";

#[test]
fn config_file_supplies_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("uniplot.toml");
    std::fs::write(&path, "[hist]\nbins = 2\nwidth = 3\n")?;

    uniplot()
        .arg("--config")
        .arg(&path)
        .arg("hist")
        .write_stdin(SAMPLES)
        .assert()
        .success()
        .stdout("0-0.5  25%  █▏    [1/4]\n0.5-1  75%  ███▏  [3/4]\n");
    Ok(())
}

#[test]
fn flags_win_over_config_from_env() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("uniplot.toml");
    std::fs::write(&path, "[hist]\nbins = 2\nwidth = 3\n")?;

    uniplot()
        .env("UNIPLOT_CONFIG", &path)
        .args(["hist", "--bins", "1"])
        .write_stdin(SAMPLES)
        .assert()
        .success()
        .stdout("0-1  100%  ███▏  [4/4]\n");
    Ok(())
}

#[test]
fn unknown_keys_fail() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("uniplot.toml");
    std::fs::write(&path, "[hist]\nbuckets = 2\n")?;

    uniplot()
        .arg("--config")
        .arg(&path)
        .arg("hist")
        .write_stdin(SAMPLES)
        .assert()
        .failure()
        .stderr(contains("failed to parse config file"));
    Ok(())
}

#[test]
fn missing_named_config_fails() -> Result<()> {
    let dir = TempDir::new()?;

    uniplot()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("bar")
        .write_stdin("1 1\n")
        .assert()
        .failure()
        .stderr(contains("failed to read config file"));
    Ok(())
}

use anyhow::Result;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_sample(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_sample"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_binary_runs_entry_point() -> Result<()> {
    let output = run_sample(&["one", "two", "three"])?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_binary_runs_with_no_args() -> Result<()> {
    let output = run_sample(&[])?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_wrong_config_extension_exits_with_2() -> Result<()> {
    let output = run_sample(&["--config", "sample.json", "one"])?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Setting 'config' is invalid"));
    assert!(stderr.contains("Suggestion:"));
    Ok(())
}

#[test]
fn test_missing_config_file_exits_with_3() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("absent.toml");
    let path = missing.to_str().unwrap().to_string();

    let output = run_sample(&["--config", path.as_str()])?;
    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Could not read a required file"));
    Ok(())
}

#[test]
fn test_malformed_config_file_exits_with_1() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("sample.toml");
    fs::write(&config_path, "[run\nargs = ")?;
    let path = config_path.to_str().unwrap().to_string();

    let output = run_sample(&["--config", path.as_str()])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid TOML"));
    Ok(())
}

#[test]
fn test_config_file_args_reach_binary() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("sample.toml");
    fs::write(
        &config_path,
        "[logging]\nformat = \"json\"\n\n[run]\nargs = [\"one\", \"two\", \"three\"]\n",
    )?;
    let path = config_path.to_str().unwrap().to_string();

    let output = run_sample(&["--config", path.as_str()])?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

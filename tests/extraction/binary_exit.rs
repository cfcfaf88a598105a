use std::process::Command;

use tempfile::TempDir;

use crate::extraction::support::{scenario_a, write_input, OUTPUT_FILE};

const DOWNLOAD_URL: &str =
    "http://wwwmobile.caiso.com/Web.Service.Chart/api/v1/ChartService/GetPriceContourMap";

fn nodeloc(workspace: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_nodeloc"))
        .arg("--workspace")
        .arg(workspace)
        .arg("--log-level")
        .arg("off")
        .args(args)
        .env_remove("NODELOC_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_input_exits_non_zero_with_download_url() {
    let temp = TempDir::new().unwrap();

    let output = nodeloc(temp.path(), &["extract"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(DOWNLOAD_URL),
        "stderr should name the download URL: {stderr}"
    );
    assert!(!temp.path().join(OUTPUT_FILE).exists());
}

#[test]
fn successful_extract_exits_zero() {
    let temp = TempDir::new().unwrap();
    write_input(temp.path(), &scenario_a());

    let output = nodeloc(temp.path(), &["extract"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Retained 1, dropped 2"));
    assert!(temp.path().join(OUTPUT_FILE).exists());
}

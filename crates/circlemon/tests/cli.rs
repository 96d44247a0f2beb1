use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_circlemon"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute circlemon");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CPU and RAM usage"));
    assert!(stdout.contains("sample"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_circlemon"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute circlemon");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("circlemon"));
}

#[test]
fn unknown_subcommand_fails() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_circlemon"));
    cmd.arg("frobnicate");

    // Act
    let output = cmd.output().expect("failed to execute circlemon");

    // Assert
    assert!(!output.status.success());
}

#[test]
fn sample_help_lists_options() {
    let output = Command::new(env!("CARGO_BIN_EXE_circlemon"))
        .args(["sample", "--help"])
        .output()
        .expect("failed to execute circlemon");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--count"));
    assert!(stdout.contains("--json"));
}

#[cfg(windows)]
#[test]
fn sample_prints_json_lines() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_circlemon"));
    cmd.args(["sample", "--count", "1", "--json"]);

    // Act
    let output = cmd.output().expect("failed to execute circlemon");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(value["ram_total_mb"].as_f64().unwrap() > 0.0);
}

#[cfg(not(windows))]
#[test]
fn run_reports_unsupported_platform() {
    let output = Command::new(env!("CARGO_BIN_EXE_circlemon"))
        .arg("run")
        .output()
        .expect("failed to execute circlemon");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("only runs on Windows"));
}

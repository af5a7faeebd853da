use assert_cmd::Command;

#[test]
fn test_help_lists_subcommands() {
    let output = Command::cargo_bin("diskgauge")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in ["health", "perf", "list", "init"] {
        assert!(stdout.contains(subcommand), "help should mention {subcommand}");
    }
}

#[test]
fn test_version_exits_cleanly() {
    Command::cargo_bin("diskgauge")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn test_init_writes_config_file() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("diskgauge")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let config_path = dir.path().join(".diskgauge.toml");
    assert!(config_path.exists());
    let contents = std::fs::read_to_string(config_path).unwrap();
    assert!(contents.contains("smartctl_path"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".diskgauge.toml"), "# existing\n").unwrap();

    Command::cargo_bin("diskgauge")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();

    Command::cargo_bin("diskgauge")
        .unwrap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

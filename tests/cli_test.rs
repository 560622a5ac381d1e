use std::path::Path;
use std::process::{Command, Output};

fn render(home: &Path, data: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_leanvision"))
        .arg("render")
        .args(args)
        .env("HOME", home)
        .env("XDG_DATA_HOME", data)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("LEANVISION_CONFIG")
        .env_remove("LEANVISION_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_render_leaves_no_log_file() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("data");

    let output = render(home.path(), &data, &["stats", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["route"], "/stats");
    assert!(output.stderr.is_empty());
    assert!(!data.join("leanvision").exists());
}

#[test]
fn test_render_ignores_unwritable_data_dir() {
    let home = tempfile::tempdir().unwrap();
    let blocker = home.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    // a regular file in place of the data dir makes any log dir creation fail
    let output = render(home.path(), &blocker.join("data"), &["recs"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("◆ LeanVision"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_render_reports_bad_config_on_stderr() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("bad.toml");
    std::fs::write(&config, "start_page = \"kitchen\"\n").unwrap();

    let output = render(
        home.path(),
        &home.path().join("data"),
        &["downloads", "--config", config.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("bad.toml"));
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .contains("Загрузка документов"));
}

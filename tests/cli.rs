use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn rtb() -> Command {
    let mut cmd = Command::cargo_bin("rtb").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("CLICOLOR_FORCE");
    cmd
}

#[test]
fn error_goes_to_stderr_by_default() {
    rtb()
        .args(["log", "--severity", "error", "10"])
        .assert()
        .success()
        .stdout("")
        .stderr("[Error] 10\n");
}

#[test]
fn warning_goes_to_stderr_by_default() {
    rtb()
        .args(["log", "-s", "warning", "-l", "Message", "10"])
        .assert()
        .success()
        .stdout("")
        .stderr("[Warning] Message: 10\n");
}

#[test]
fn info_goes_to_stdout_by_default() {
    rtb()
        .args(["log", "-l", "Message", "loggable", "type"])
        .assert()
        .success()
        .stdout("[Info] Message: loggable type\n")
        .stderr("");
}

#[test]
fn error_can_move_to_stdout() {
    rtb()
        .args(["log", "-s", "error", "--sink", "stdout", "10"])
        .assert()
        .success()
        .stdout("[Error] 10\n")
        .stderr("");
}

#[test]
fn null_sink_prints_nothing() {
    rtb()
        .args(["log", "-s", "error", "--sink", "null", "10"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn file_sink_writes_to_given_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("w.log");

    rtb()
        .args(["log", "-s", "warning", "--sink", "file", "--file"])
        .arg(&path)
        .arg("careful")
        .assert()
        .success()
        .stdout("")
        .stderr("");

    assert_eq!(fs::read_to_string(&path).unwrap(), "[Warning] careful\n");
}

#[test]
fn file_sink_defaults_to_rtb_log() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtb()
        .current_dir(temp_dir.path())
        .args(["log", "-s", "error", "--sink", "file", "Error!"])
        .assert()
        .success();

    let written = fs::read_to_string(temp_dir.path().join("rtb.log")).unwrap();
    assert_eq!(written, "[Error] Error!\n");
}

#[test]
fn unopenable_file_is_reported_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("missing").join("x.log");

    rtb()
        .args(["log", "--sink", "file", "--file"])
        .arg(&path)
        .arg("dropped")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::starts_with("[Error] Error opening log file"));
}

#[test]
fn timestamps_are_optional() {
    rtb()
        .args(["log", "--timestamps", "-l", "t", "v"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[Info\] \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} t: v\n$").unwrap());
}

#[test]
fn config_dir_sets_routing() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("rtb.json"),
        r#"{"info_sink": "stderr"}"#,
    )
    .unwrap();

    rtb()
        .arg("--config")
        .arg(temp_dir.path())
        .args(["log", "hello"])
        .assert()
        .success()
        .stdout("")
        .stderr("[Info] hello\n");
}

#[test]
fn broken_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("rtb.json"), "{not json").unwrap();

    rtb()
        .arg("--config")
        .arg(temp_dir.path())
        .args(["log", "hello"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Serialization error"));
}

#[test]
fn unknown_sink_is_a_usage_error() {
    rtb()
        .args(["log", "--sink", "syslog", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sink kind"));
}

#[test]
fn parse_reports_flags_and_params() {
    rtb()
        .args([
            "parse", "--flag", "a", "--flag", "b", "--param", "width:int", "--param",
            "angle:int", "--param", "name:string", "--", "-b", "-width=0x500", "-angle=SO0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("-a").and(predicate::str::contains("absent")))
        .stdout(predicate::str::contains("value=true"))
        .stdout(predicate::str::contains("raw=\"0x500\" value=1280 (int)"))
        .stdout(predicate::str::contains("raw=\"SO0\" error=invalid argument"))
        .stderr("[Warning] angle: \"SO0\" is invalid argument\n");
}

#[test]
fn parse_reports_out_of_range() {
    rtb()
        .args([
            "parse",
            "--param",
            "angle:int",
            "--",
            "-angle=100000000000000000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("error=out of range"));
}

#[test]
fn parse_warns_on_duplicate_registration() {
    rtb()
        .args(["parse", "--flag", "b", "--flag", "b", "--", "-b"])
        .assert()
        .success()
        .stderr("[Warning] Duplicate flag ignored: b\n");
}

#[test]
fn parse_rejects_bad_param_spec() {
    rtb()
        .args(["parse", "--param", "width", "--", "-width=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME:TYPE"));
}

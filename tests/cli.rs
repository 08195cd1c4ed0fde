//! Тесты бинарника `witsshell` как черного ящика.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const ERROR_MESSAGE: &str = "An error has occurred\n";
const PROMPT: &str = "witsshell> ";

/// Команда запуска собранного шелла.
fn shell() -> Command {
    Command::new(env!("CARGO_BIN_EXE_witsshell"))
}

/// Интерактивный режим: ввод подается через stdin.
fn run_interactive(input: &str) -> Output {
    let mut child = shell()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Режим скрипта: ввод записывается во временный файл.
fn run_script(contents: &str) -> Output {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    script.write_all(contents.as_bytes()).unwrap();
    shell().arg(script.path()).output().unwrap()
}

#[test]
fn too_many_arguments_is_usage_error() {
    let out = shell().args(["a.txt", "b.txt"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stderr), ERROR_MESSAGE);
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_script_is_startup_error() {
    let out = shell()
        .arg("/definitely/not/a/script-12345.sh")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stderr), ERROR_MESSAGE);
}

#[test]
fn script_runs_to_end_without_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let out_file = dir.path().join("out.txt");
    let out = run_script(&format!(
        "path /bin /usr/bin\necho hello > {}\n",
        out_file.display()
    ));

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
    assert_eq!(std::fs::read_to_string(&out_file).unwrap(), "hello\n");
}

#[test]
fn children_inherit_shell_stdout() {
    let out = run_script("path /bin /usr/bin\necho hi\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "hi\n");
}

#[test]
fn exit_terminates_script_with_success() {
    let out = run_script("exit\ncd\n");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}

#[test]
fn exit_with_argument_keeps_running() {
    let out = run_script("exit 3\ncd\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stderr), ERROR_MESSAGE.repeat(2));
}

#[test]
fn interactive_mode_prints_prompt() {
    let out = run_interactive("\nexit\n");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), PROMPT.repeat(2));
}

#[test]
fn interactive_end_of_input_exits_with_success() {
    let out = run_interactive("");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), PROMPT);
}

#[test]
fn cd_affects_later_commands() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_script(&format!(
        "path /bin /usr/bin\ncd {}\ntouch made-here\n",
        dir.path().display()
    ));
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
    assert!(dir.path().join("made-here").exists());
}

#[test]
fn redirected_command_error_goes_into_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_file = dir.path().join("out.txt");
    let out = run_script(&format!("nope-xyz-12345 > {}\n", out_file.display()));

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
    assert_eq!(std::fs::read_to_string(&out_file).unwrap(), ERROR_MESSAGE);
}

#[test]
fn log_file_receives_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("shell.log");
    let mut script = tempfile::NamedTempFile::new().unwrap();
    script.write_all(b"nope-xyz-12345\n").unwrap();

    let out = shell()
        .arg("--log-file")
        .arg(&log)
        .args(["--log-level", "debug"])
        .arg(script.path())
        .output()
        .unwrap();

    assert_eq!(String::from_utf8_lossy(&out.stderr), ERROR_MESSAGE);
    let text = std::fs::read_to_string(&log).unwrap();
    assert!(text.contains("command not found: nope-xyz-12345"));
}

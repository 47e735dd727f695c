#![allow(dead_code)]

use assert_cmd::Command;
use chrono::NaiveDateTime;
use regex::Regex;

pub const LINE_PATTERN: &str =
    r"^[A-Za-z]{3} [A-Za-z]{3} [ 0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2} [0-9]{4}\n$";

/// The binary with logging and time-zone settings pinned, so host
/// environment does not leak into assertions.
pub fn hello_time_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hello-time"));
    cmd.env_remove("RUST_LOG")
        .env_remove("HELLO_TIME_LOG")
        .env_remove("HELLO_TIME_VERBOSE")
        .env("TZ", "UTC0");
    cmd
}

/// Runs the binary with `args` after its reader has already exited, so the
/// first write hits a broken pipe. The exit status is echoed to stderr as
/// `exit=<code>`.
#[cfg(unix)]
pub fn closed_stdout_cmd(args: &[&str]) -> Command {
    through_shell(r#"(sleep 1; "$0" "$@"; echo "exit=$?" >&2) | true"#, args)
}

/// Runs the binary with stdout on `/dev/full`, where every write fails.
#[cfg(target_os = "linux")]
pub fn full_stdout_cmd(args: &[&str]) -> Command {
    through_shell(r#""$0" "$@" > /dev/full; echo "exit=$?" >&2"#, args)
}

#[cfg(unix)]
fn through_shell(script: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(script)
        .arg(assert_cmd::cargo::cargo_bin!("hello-time"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("HELLO_TIME_LOG")
        .env_remove("HELLO_TIME_VERBOSE")
        .env("TZ", "UTC0");
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("failed to run hello-time");
    assert!(output.status.success(), "hello-time exited with {}", output.status);
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

pub fn line_regex() -> Regex {
    Regex::new(LINE_PATTERN).unwrap()
}

pub fn parse_line(line: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(line.trim_end(), "%a %b %e %H:%M:%S %Y")
        .unwrap_or_else(|e| panic!("unparseable time line {line:?}: {e}"))
}

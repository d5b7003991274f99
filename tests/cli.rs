//! Runs the built binary to check exit codes and stream usage

use std::net::TcpListener;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_confluence-alfred"))
        .args(args)
        .env_remove("CONFLUENCE_TOKEN")
        .env_remove("CONFLUENCE_URL")
        .env_remove("CONFLUENCE_USERNAME")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

#[test]
fn missing_every_flag_exits_with_usage() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--query"));
    assert!(stderr.contains("missing required flags: --token, --url, --username, --query"));
}

#[test]
fn each_missing_flag_is_fatal() {
    let full = [
        ("--token", "t"),
        ("--url", "http://127.0.0.1:9"),
        ("--username", "u"),
        ("--query", "q"),
    ];
    for skip in 0..full.len() {
        let mut argv = Vec::new();
        for (i, (flag, value)) in full.iter().enumerate() {
            if i != skip {
                argv.push(*flag);
                argv.push(*value);
            }
        }
        let out = run(&argv);
        assert_eq!(out.status.code(), Some(1), "without {}", full[skip].0);
        assert!(out.stdout.is_empty(), "without {}", full[skip].0);
    }
}

#[test]
fn empty_value_counts_as_missing() {
    let out = run(&["--token", "", "--url", "http://127.0.0.1:9", "--username", "u", "--query", "q"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing required flags: --token"));
}

/// Base URL on a local port that was just released, so nothing accepts on it
fn closed_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[test]
fn unreachable_server_reports_fetch_failure() {
    let url = closed_local_url();
    let out = run(&["--token", "t", "--url", &url, "--username", "u", "--query", "q"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("couldn't fetch results: "));
}

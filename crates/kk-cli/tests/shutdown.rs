//! Integration tests for `kk serve`: it answers over HTTP and exits cleanly
//! on a termination signal.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

fn kk_binary() -> std::path::PathBuf {
    assert_cmd::cargo::cargo_bin!("kk").into()
}

fn spawn_serve() -> Child {
    Command::new(kk_binary())
        .args(["serve", "--bind", "127.0.0.1:0"])
        .env_remove("KK_CONFIG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn kk serve")
}

/// Read the `listening on http://…` line and return the socket address.
fn wait_for_addr(child: &mut Child) -> String {
    let stdout = child.stdout.take().expect("stdout pipe");
    let mut line = String::new();
    BufReader::new(stdout).read_line(&mut line).expect("read stdout");
    line.trim()
        .strip_prefix("listening on http://")
        .unwrap_or_else(|| panic!("unexpected banner: {line:?}"))
        .to_string()
}

fn http_get(addr: &str, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    write!(
        stream,
        "GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n"
    )
    .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}

fn wait_with_deadline(child: &mut Child, limit: Duration) -> std::process::ExitStatus {
    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait().expect("try_wait") {
            return status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("kk serve did not exit within {limit:?}");
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}

#[test]
fn serve_answers_health_and_kai() {
    let mut child = spawn_serve();
    let addr = wait_for_addr(&mut child);

    let health = http_get(&addr, "/health");
    assert!(health.starts_with("HTTP/1.1 200"), "{health}");
    assert!(health.ends_with("ok"), "{health}");

    let kai = http_get(&addr, "/kai?override_time=2024-05-10T06:45:41.888Z");
    assert!(kai.starts_with("HTTP/1.1 200"), "{kai}");
    assert!(kai.contains("\"elapsedPulses\":0"), "{kai}");

    let bad = http_get(&addr, "/kai?override_time=garbage");
    assert!(bad.starts_with("HTTP/1.1 400"), "{bad}");

    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(unix)]
#[test]
fn serve_exits_on_sigterm() {
    let mut child = spawn_serve();
    let _ = wait_for_addr(&mut child);

    unsafe {
        libc::kill(child.id() as libc::pid_t, libc::SIGTERM);
    }

    let status = wait_with_deadline(&mut child, Duration::from_secs(2));
    assert!(status.success(), "kk serve should exit 0 on SIGTERM, got {status}");
}

#[cfg(unix)]
#[test]
fn serve_exits_on_sigint() {
    let mut child = spawn_serve();
    let _ = wait_for_addr(&mut child);

    unsafe {
        libc::kill(child.id() as libc::pid_t, libc::SIGINT);
    }

    let status = wait_with_deadline(&mut child, Duration::from_secs(2));
    assert!(status.success(), "kk serve should exit 0 on SIGINT, got {status}");
}

#[test]
fn serve_fails_on_bad_bind() {
    let output = Command::new(kk_binary())
        .args(["serve", "--bind", "not-an-address"])
        .env_remove("KK_CONFIG")
        .output()
        .expect("run kk serve");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to bind"), "{stderr}");
}

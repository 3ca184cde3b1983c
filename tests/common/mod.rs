//! Shared helpers for integration tests: a one-shot local HTTP server and a
//! configuration whose external commands are stand-ins available on any
//! unix system.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use smarty_mcfly::process::CommandSpec;
use smarty_mcfly::Config;

/// Converter stand-in that copies its stdin to stdout.
pub const PASSTHROUGH: &str = "sh -c cat --";

/// Serve a single HTTP response on a loopback port and return a URL for it.
pub fn serve_once(status: u16, body: &str) -> String {
    respond_once(format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    ))
}

/// Serve a single redirect to `location`.
pub fn redirect_once(location: &str) -> String {
    respond_once(format!(
        "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        location
    ))
}

fn respond_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get local address");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/docs/page.html", addr)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

pub fn command(line: &str) -> CommandSpec {
    CommandSpec::parse(line).expect("Expected a non-empty command line")
}

/// Configuration that never reaches pandoc, man, go or the network.
pub fn test_config() -> Config {
    Config {
        pandoc: command(PASSTHROUGH),
        man: command("false"),
        go: command("false"),
        gzip: command("gzip"),
        git: command("false"),
        repo_url: "file:///nonexistent/smarty-mcfly.git".to_string(),
    }
}

pub fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path.as_ref())
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.as_ref().display(), e))
}

pub fn has_program(program: &str) -> bool {
    std::process::Command::new(program)
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok()
}

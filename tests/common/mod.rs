//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use tempfile::TempDir;

/// Builder for a SiYuan workspace directory inside a temp dir
pub struct WorkspaceDirBuilder {
    temp_dir: TempDir,
    dir: PathBuf,
}

impl WorkspaceDirBuilder {
    /// Create a workspace directory with the given basename and no log file
    pub fn new(name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path().join(name);
        fs::create_dir(&dir).expect("Failed to create workspace dir");
        Self { temp_dir, dir }
    }

    /// Path of the workspace directory
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Write `temp/siyuan.log` with the given content
    pub fn with_log(self, content: &str) -> Self {
        let temp = self.dir.join("temp");
        fs::create_dir_all(&temp).expect("Failed to create temp dir");
        fs::write(temp.join("siyuan.log"), content).expect("Failed to write siyuan.log");
        self
    }

    /// Write a log whose last boot line announces `port`
    pub fn with_boot_log(self, port: u16) -> Self {
        let content = format!(
            "I 2025/01/25 22:21:47 serve.go:189: kernel [pid=88564] http server [0.0.0.0:1] is booting\n\
             I 2025/01/25 22:21:48 kernel is ready\n\
             I 2025/01/26 17:37:08 serve.go:189: kernel [pid=31181] http server [127.0.0.1:{}] is booting\n",
            port
        );
        self.with_log(&content)
    }

    /// Keep the temp dir alive for as long as the returned guard lives
    pub fn build(self) -> (TempDir, PathBuf) {
        (self.temp_dir, self.dir)
    }
}

/// Build a block JSON object as the kernel returns it
pub fn block_json(id: &str, content: &str, block_type: &str, h_path: &str) -> String {
    serde_json::json!({
        "id": id,
        "rootID": id,
        "box": "20210808180117-notebk",
        "content": content,
        "type": block_type,
        "hPath": h_path
    })
    .to_string()
}

/// Wrap block JSON objects in a successful search envelope
pub fn search_response(blocks: &[String]) -> String {
    format!(
        r#"{{"code":0,"msg":"","data":{{"blocks":[{}],"matchedBlockCount":{},"matchedRootCount":1,"pageCount":1}}}}"#,
        blocks.join(","),
        blocks.len()
    )
}

/// Loopback HTTP server that answers a fixed number of requests with canned bodies
pub struct StubServer {
    pub port: u16,
    handle: JoinHandle<Vec<String>>,
}

impl StubServer {
    /// Serve one request per entry in `bodies`, in order
    pub fn start(bodies: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let port = listener.local_addr().expect("Failed to read stub address").port();

        let handle = thread::spawn(move || {
            let mut requests = Vec::new();
            for body in bodies {
                let (mut stream, _) = listener.accept().expect("Failed to accept connection");
                requests.push(read_request_body(&mut stream));
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                stream.write_all(response.as_bytes()).expect("Failed to write response");
                stream.flush().expect("Failed to flush response");
            }
            requests
        });

        Self { port, handle }
    }

    /// Wait for all requests to be served and return their bodies
    pub fn requests(self) -> Vec<String> {
        self.handle.join().expect("Stub server panicked")
    }
}

fn read_request_body(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).expect("Failed to read request");
        assert!(n > 0, "Connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).expect("Failed to read request body");
        assert!(n > 0, "Connection closed before body was complete");
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string()
}

/// A loopback port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("Failed to read address").port()
}

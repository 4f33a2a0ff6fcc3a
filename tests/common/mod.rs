//! Shared utilities for integration testing.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use overdue_logger::config::LoggerConfig;
use overdue_logger::http::HttpServer;
use overdue_logger::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A logger running on an ephemeral port, writing into a temp directory.
pub struct TestLogger {
    pub addr: SocketAddr,
    pub log_path: PathBuf,
    pub shutdown: Shutdown,
    _dir: tempfile::TempDir,
}

impl TestLogger {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Current log contents, empty when nothing has been written yet.
    pub fn contents(&self) -> String {
        read_log(&self.log_path)
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Drop for TestLogger {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

pub fn read_log(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

/// Start a logger; `seed` is written to the log file first when given.
pub async fn start_logger(seed: Option<&str>) -> TestLogger {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("overdue_speakers.txt");
    if let Some(seed) = seed {
        std::fs::write(&log_path, seed).unwrap();
    }

    let mut config = LoggerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.log_file.path = log_path.display().to_string();

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let stopped = shutdown.signalled();
    tokio::spawn(async move {
        let _ = server.run(listener, stopped).await;
    });

    TestLogger {
        addr,
        log_path,
        shutdown,
        _dir: dir,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

//! Append-only file sink.
//!
//! Each append opens the file in append mode, writes the whole record with a
//! single `write_all`, and closes it again. Concurrent requests therefore rely
//! on the OS append semantics for interleaving; no process-level lock is held.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::observability::metrics;
use crate::overdue::format::render_line;
use crate::overdue::types::{LogResult, OverdueEvent};

/// Handle to the overdue log file. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct OverdueLog {
    path: PathBuf,
}

impl OverdueLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render `event` and append it, creating the file if absent.
    ///
    /// Returns the line that was written.
    pub async fn record(&self, event: &OverdueEvent) -> LogResult<String> {
        let line = render_line(event);
        let start = Instant::now();
        self.append(line.clone()).await?;
        metrics::record_append(start);
        Ok(line)
    }

    /// Append raw text to the end of the file.
    pub async fn append(&self, text: String) -> io::Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || append_blocking(&path, text.as_bytes()))
            .await
            .map_err(io::Error::other)?
    }
}

fn append_blocking(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(bytes)?;
    file.flush()
}

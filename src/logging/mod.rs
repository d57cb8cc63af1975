//! Logging seam for the engine.
//!
//! The embedding server owns the sink; the engine calls it at most once per
//! startup invocation, with the fixed enforcement notice, and only when the
//! bound-transport snapshot resolves to production mode.

use log::Level;

pub trait AuditSink {
    fn log(&self, level: Level, msg: &str);
}

/// Discards all lines. Useful in tests and embedding harnesses.
#[derive(Default, Debug, Copy, Clone)]
pub struct NullSink;

impl AuditSink for NullSink {
    fn log(&self, _level: Level, _msg: &str) {}
}

/// Forwards to the `log` facade.
#[derive(Default, Debug, Copy, Clone)]
pub struct LogSink;

impl AuditSink for LogSink {
    fn log(&self, level: Level, msg: &str) {
        log::log!(level, "{}", msg);
    }
}

// Optional: file-backed JSONL sink for production integration.
// Enabled via `--features file-logging`.
#[cfg(feature = "file-logging")]
#[derive(Debug, Clone)]
pub struct FileAuditSink {
    path: std::path::PathBuf,
}

#[cfg(feature = "file-logging")]
impl FileAuditSink {
    pub fn new<P: Into<std::path::PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn write_line(&self, line: &str) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(mut f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            use std::io::Write as _;
            let _ = f.write_all(line.as_bytes());
            let _ = f.write_all(b"\n");
        }
    }
}

#[cfg(feature = "file-logging")]
impl AuditSink for FileAuditSink {
    fn log(&self, level: Level, msg: &str) {
        let out = serde_json::json!({
            "subsystem": "interlock",
            "level": format!("{}", level),
            "message": msg,
        });
        if let Ok(line) = serde_json::to_string(&out) {
            self.write_line(&line);
        }
    }
}

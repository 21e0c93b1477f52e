// src/events.rs
//! Host trigger events and the machine-readable analysis audit trail.
//!
//! Audit events are appended to `.lintwarden/events.jsonl`.

use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Events the host environment feeds into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    DocumentOpened(PathBuf),
    DocumentSaved(PathBuf),
    WorkspaceChanged,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ScanStarted,
    ScanCompleted {
        files: usize,
        diagnostics: usize,
    },
    ScanCancelled {
        files_completed: usize,
    },
    FileAnalyzed {
        path: String,
        diagnostics: usize,
    },
    FixesApplied {
        path: String,
        count: usize,
    },
    ReportWritten {
        path: String,
    },
    ReportFailed {
        error: String,
    },
    AnalysisFailed {
        path: String,
        error: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisEvent {
    pub timestamp: u64,
    pub kind: EventKind,
}

#[derive(Clone)]
pub struct EventLogger {
    log_path: PathBuf,
}

impl EventLogger {
    #[must_use]
    pub fn new(project_root: &Path) -> Self {
        let log_path = project_root.join(".lintwarden").join("events.jsonl");
        Self { log_path }
    }

    pub fn log(&self, kind: EventKind) {
        // Logging is best-effort. We swallow errors to avoid crashing main flow.
        if let Ok(json) = Self::serialize_event(kind) {
            let _ = self.append_to_file(&json);
        }
    }

    fn serialize_event(kind: EventKind) -> anyhow::Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = AnalysisEvent { timestamp, kind };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(&self, line: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

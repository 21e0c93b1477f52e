// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

/// Diagnostic severity. Engine severity level 2 maps to `Error`,
/// everything else to `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        if level == 2 {
            Severity::Error
        } else {
            Severity::Warning
        }
    }
}

/// A single positioned issue reported against a file. Immutable once created.
/// All line/column fields are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
    pub message: String,
    pub severity: Severity,
    pub rule_id: &'static str,
}

/// A textual replacement the engine can apply to repair a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub start_byte: usize,
    pub end_byte: usize,
    pub replacement: String,
}

/// Raw message as emitted by the rule engine, before severity mapping.
/// `line`/`column` are 1-based; the end position is optional.
#[derive(Debug, Clone, Serialize)]
pub struct RawMessage {
    pub line: usize,
    pub column: usize,
    pub end_line: Option<usize>,
    pub end_column: Option<usize>,
    pub level: u8,
    pub rule_id: &'static str,
    pub message: String,
    pub fix: Option<Fix>,
}

impl RawMessage {
    /// Creates a message without an end position or fix.
    #[must_use]
    pub fn simple(
        line: usize,
        column: usize,
        level: u8,
        rule_id: &'static str,
        message: String,
    ) -> Self {
        Self {
            line,
            column,
            end_line: None,
            end_column: None,
            level,
            rule_id,
            message,
            fix: None,
        }
    }

    /// Attaches a fix to the message.
    #[must_use]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Attaches an explicit end position.
    #[must_use]
    pub fn with_end(mut self, end_line: usize, end_column: usize) -> Self {
        self.end_line = Some(end_line);
        self.end_column = Some(end_column);
        self
    }
}

/// Aggregated results from one workspace scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub files_analyzed: usize,
    pub cancelled: bool,
}

impl ScanOutcome {
    /// Returns true if any diagnostics were accumulated.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// An identified, versioned unit of source text owned by the host.
/// The core only reads path and text at analysis time.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub version: u64,
    pub text: String,
}

impl Document {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, version: u64, text: String) -> Self {
        Self {
            path: path.into(),
            version,
            text,
        }
    }

    /// Reads the current on-disk content for a path. Content is never
    /// cached between analyses.
    ///
    /// # Errors
    /// Returns `LintError::Io` if the file cannot be read.
    pub fn read(path: impl Into<PathBuf>) -> crate::error::Result<Self> {
        let path = path.into();
        let text =
            std::fs::read_to_string(&path).map_err(|e| crate::error::LintError::io(e, &path))?;
        Ok(Self {
            path,
            version: 0,
            text,
        })
    }
}

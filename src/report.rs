// src/report.rs
//! Renders the diagnostics store into the consolidated report and persists
//! it under the project root.
//!
//! Format: for each file with at least one diagnostic, a `File: <path>` line
//! followed by one indented line per diagnostic, then a blank line. Files
//! with zero diagnostics are omitted. The report file is always rewritten in
//! full, never patched.

use crate::error::{LintError, Result};
use crate::types::Diagnostic;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

pub const REPORT_DIR: &str = "lint-report";
pub const REPORT_FILE: &str = "eslint-report.txt";

/// Pure rendering: store snapshot in, report text out.
#[must_use]
pub fn render(snapshot: &BTreeMap<PathBuf, Vec<Diagnostic>>) -> String {
    let mut out = String::with_capacity(4096);
    for (path, diagnostics) in snapshot {
        if diagnostics.is_empty() {
            continue;
        }
        let _ = writeln!(out, "File: {}", path.display());
        for d in diagnostics {
            let _ = writeln!(
                out,
                "  [{}, {}] {} ({})",
                d.start_line, d.start_column, d.message, d.rule_id
            );
        }
        out.push('\n');
    }
    out
}

/// Ensures `lint-report/` exists under the root and overwrites the report.
///
/// # Errors
/// Returns `LintError::Io` if the directory cannot be created or the file
/// cannot be written.
pub fn persist(root: &Path, text: &str) -> Result<PathBuf> {
    let dir = root.join(REPORT_DIR);
    fs::create_dir_all(&dir).map_err(|e| LintError::io(e, &dir))?;
    let path = dir.join(REPORT_FILE);
    fs::write(&path, text).map_err(|e| LintError::io(e, &path))?;
    Ok(path)
}

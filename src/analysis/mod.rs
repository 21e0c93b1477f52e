// src/analysis/mod.rs
//! The analysis pipeline: single-file analysis and workspace scanning.

mod analyzer;
mod scanner;

pub use analyzer::analyze_document;
pub use scanner::{scan_with_progress, scan_workspace};

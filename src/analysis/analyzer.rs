// src/analysis/analyzer.rs
//! Single-file analysis.
//!
//! Checks the cancellation signal before doing anything, restricts itself to
//! recognized dialects, maps raw engine messages to diagnostics, and wholly
//! replaces the store entry for the path. Engine failures are surfaced as a
//! warning and yield an empty result so one bad file never aborts a scan;
//! the store keeps the last completed result in that case.

use std::path::Path;

use crate::cancel::CancelToken;
use crate::engine::RuleEngine;
use crate::events::{EventKind, EventLogger};
use crate::lang::Lang;
use crate::notify;
use crate::store::DiagnosticsStore;
use crate::types::{Diagnostic, Document, RawMessage, Severity};

pub fn analyze_document(
    doc: &Document,
    engine: &RuleEngine,
    store: &DiagnosticsStore,
    cancel: &CancelToken,
    events: Option<&EventLogger>,
) -> Vec<Diagnostic> {
    if cancel.is_cancelled() {
        return Vec::new();
    }
    if Lang::from_path(&doc.path).is_none() {
        return Vec::new();
    }

    let messages = match engine.evaluate(&doc.path, &doc.text) {
        Ok(messages) => messages,
        Err(e) => {
            notify::warn(&format!("analysis of {} failed: {e}", doc.path.display()));
            if let Some(events) = events {
                events.log(EventKind::AnalysisFailed {
                    path: doc.path.display().to_string(),
                    error: e.to_string(),
                });
            }
            return Vec::new();
        }
    };

    let diagnostics: Vec<Diagnostic> = messages
        .iter()
        .map(|m| to_diagnostic(&doc.path, m))
        .collect();
    store.replace(&doc.path, diagnostics.clone());

    if !diagnostics.is_empty() {
        match engine.apply_fixes(&doc.path, &doc.text, &messages) {
            Ok(0) => {}
            Ok(count) => {
                if let Some(events) = events {
                    events.log(EventKind::FixesApplied {
                        path: doc.path.display().to_string(),
                        count,
                    });
                }
            }
            Err(e) => {
                notify::warn(&format!(
                    "could not apply fixes to {}: {e}",
                    doc.path.display()
                ));
            }
        }
    }

    diagnostics
}

// A message without an explicit end gets a zero-width tail: end on the
// start line, one column past the start column.
fn to_diagnostic(path: &Path, message: &RawMessage) -> Diagnostic {
    Diagnostic {
        path: path.to_path_buf(),
        start_line: message.line,
        start_column: message.column,
        end_line: message.end_line.unwrap_or(message.line),
        end_column: message.end_column.unwrap_or(message.column + 1),
        message: message.message.clone(),
        severity: Severity::from_level(message.level),
        rule_id: message.rule_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use std::path::PathBuf;

    fn setup() -> (RuleEngine, DiagnosticsStore, CancelToken) {
        (
            RuleEngine::new(RuleConfig::embedded()).unwrap(),
            DiagnosticsStore::new(),
            CancelToken::new(),
        )
    }

    #[test]
    fn test_cancelled_analysis_touches_nothing() {
        let (engine, store, cancel) = setup();
        cancel.cancel();
        let doc = Document::new("a.js", 1, "console.log('hi');".to_string());
        let diags = analyze_document(&doc, &engine, &store, &cancel, None);
        assert!(diags.is_empty());
        assert!(store.get(&PathBuf::from("a.js")).is_none());
    }

    #[test]
    fn test_unrecognized_dialect_is_empty_without_error() {
        let (engine, store, cancel) = setup();
        let doc = Document::new("a.rb", 1, "puts 'hi'".to_string());
        assert!(analyze_document(&doc, &engine, &store, &cancel, None).is_empty());
        assert!(store.get(&PathBuf::from("a.rb")).is_none());
    }

    #[test]
    fn test_store_entry_replaced_wholly() {
        let (engine, store, cancel) = setup();
        let path = PathBuf::from("a.js");

        let dirty = Document::new(&path, 1, "console.log('hi');\n".to_string());
        let diags = analyze_document(&dirty, &engine, &store, &cancel, None);
        assert!(!diags.is_empty());
        assert_eq!(store.get(&path).unwrap(), diags);

        let clean = Document::new(&path, 2, "export const x = 1;\n".to_string());
        assert!(analyze_document(&clean, &engine, &store, &cancel, None).is_empty());
        assert!(store.get(&path).unwrap().is_empty());
    }

    #[test]
    fn test_point_diagnostic_gets_zero_width_tail() {
        let (engine, store, cancel) = setup();
        let doc = Document::new("a.js", 1, "console.log('hi');\n".to_string());
        let diags = analyze_document(&doc, &engine, &store, &cancel, None);
        let d = diags.iter().find(|d| d.rule_id == "no-console").unwrap();
        assert_eq!(d.end_line, d.start_line);
        assert_eq!(d.end_column, d.start_column + 1);
    }

    #[test]
    fn test_reanalysis_without_change_is_identical() {
        let (engine, store, cancel) = setup();
        let path = PathBuf::from("a.js");
        // no-console carries no fix, so analysis never rewrites the file
        // and the two runs see identical text.
        let doc = Document::new(&path, 1, "console.log(1);\nconsole.log(2);\n".to_string());

        analyze_document(&doc, &engine, &store, &cancel, None);
        let first = store.get(&path).unwrap();
        analyze_document(&doc, &engine, &store, &cancel, None);
        let second = store.get(&path).unwrap();
        assert_eq!(first, second);
    }
}

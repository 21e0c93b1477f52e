// src/analysis/scanner.rs
//! Full-workspace scanning.
//!
//! Enumerates eligible files under the project root and runs the single-file
//! analyzer over each in enumeration order. The cancellation signal is
//! checked at the top of the loop: once signalled, no further per-file work
//! is launched and whatever accumulated so far is returned. Completed work
//! is never rolled back, and a scan cancelled before any file starts leaves
//! the store fully untouched. A single unreadable file is warned about and
//! skipped, never fatal to the scan.

use std::path::Path;

use crate::cancel::CancelToken;
use crate::discovery;
use crate::engine::RuleEngine;
use crate::events::EventLogger;
use crate::notify;
use crate::store::DiagnosticsStore;
use crate::types::{Document, ScanOutcome};

use super::analyze_document;

pub fn scan_workspace(
    root: &Path,
    engine: &RuleEngine,
    store: &DiagnosticsStore,
    cancel: &CancelToken,
    events: Option<&EventLogger>,
) -> ScanOutcome {
    scan_with_progress(root, engine, store, cancel, events, &|_| {})
}

/// Like [`scan_workspace`], but invokes `on_file_done` after each file's
/// analysis completes. Callers can react per file, including signalling
/// cancellation, which takes effect before the next file starts.
pub fn scan_with_progress<F>(
    root: &Path,
    engine: &RuleEngine,
    store: &DiagnosticsStore,
    cancel: &CancelToken,
    events: Option<&EventLogger>,
    on_file_done: &F,
) -> ScanOutcome
where
    F: Fn(&Path),
{
    let (files, walk_errors) = discovery::enumerate(root);
    if walk_errors > 0 {
        notify::warn(&format!(
            "{walk_errors} director{} could not be read during enumeration",
            if walk_errors == 1 { "y" } else { "ies" }
        ));
    }

    if cancel.is_cancelled() {
        return ScanOutcome {
            cancelled: true,
            ..ScanOutcome::default()
        };
    }

    // Files that left the workspace also leave the store, so the next
    // report render matches the workspace membership.
    store.retain(&files);

    let mut outcome = ScanOutcome::default();
    for path in files {
        if cancel.is_cancelled() {
            outcome.cancelled = true;
            break;
        }
        let doc = match Document::read(&path) {
            Ok(doc) => doc,
            Err(e) => {
                notify::warn(&format!("skipping {}: {e}", path.display()));
                continue;
            }
        };
        outcome
            .diagnostics
            .extend(analyze_document(&doc, engine, store, cancel, events));
        outcome.files_analyzed += 1;
        on_file_done(&path);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use std::fs;

    fn setup() -> (RuleEngine, DiagnosticsStore, CancelToken) {
        (
            RuleEngine::new(RuleConfig::embedded()).unwrap(),
            DiagnosticsStore::new(),
            CancelToken::new(),
        )
    }

    #[test]
    fn test_pre_cancelled_scan_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.js"), "console.log('hi');\n").unwrap();

        let (engine, store, cancel) = setup();
        cancel.cancel();
        let outcome = scan_workspace(dir.path(), &engine, &store, &cancel, None);
        assert!(outcome.cancelled);
        assert_eq!(outcome.files_analyzed, 0);
        assert!(outcome.diagnostics.is_empty());
        assert_eq!(store.total_diagnostics(), 0);
    }

    #[test]
    fn test_two_file_scenario() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.js"), "console.log('x');\n").unwrap();
        fs::write(
            dir.path().join("b.js"),
            "export function f(x) { if (x == 1) { return x; } return 0; }\n",
        )
        .unwrap();

        let (engine, store, cancel) = setup();
        let outcome = scan_workspace(dir.path(), &engine, &store, &cancel, None);
        assert_eq!(outcome.files_analyzed, 2);

        let a_rules: Vec<_> = store
            .get(&dir.path().join("a.js"))
            .unwrap()
            .iter()
            .map(|d| d.rule_id)
            .collect();
        assert!(a_rules.contains(&"no-console"));

        let b_rules: Vec<_> = store
            .get(&dir.path().join("b.js"))
            .unwrap()
            .iter()
            .map(|d| d.rule_id)
            .collect();
        assert!(b_rules.contains(&"eqeqeq"));
    }

    #[test]
    fn test_cancel_after_first_file_keeps_only_its_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.js");
        let b = dir.path().join("b.js");
        fs::write(&a, "console.log('x');\n").unwrap();
        fs::write(&b, "console.log('y');\n").unwrap();

        let (engine, store, cancel) = setup();
        let outcome = scan_with_progress(dir.path(), &engine, &store, &cancel, None, &|_| {
            cancel.cancel();
        });

        assert!(outcome.cancelled);
        assert_eq!(outcome.files_analyzed, 1);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].path, a);
        assert_eq!(outcome.diagnostics[0].rule_id, "no-console");
        assert!(store.get(&a).is_some());
        assert!(store.get(&b).is_none());
    }

    #[test]
    fn test_pre_cancelled_scan_keeps_departed_entries() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone.js");
        fs::write(&gone, "console.log('x');\n").unwrap();

        let (engine, store, cancel) = setup();
        scan_workspace(dir.path(), &engine, &store, &cancel, None);
        assert!(store.get(&gone).is_some());

        fs::remove_file(&gone).unwrap();
        cancel.cancel();
        let outcome = scan_workspace(dir.path(), &engine, &store, &cancel, None);
        assert!(outcome.cancelled);
        assert!(store.get(&gone).is_some());
    }

    #[test]
    fn test_scan_drops_departed_files() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone.js");
        fs::write(&gone, "console.log('x');\n").unwrap();

        let (engine, store, cancel) = setup();
        scan_workspace(dir.path(), &engine, &store, &cancel, None);
        assert!(store.get(&gone).is_some());

        fs::remove_file(&gone).unwrap();
        scan_workspace(dir.path(), &engine, &store, &cancel, None);
        assert!(store.get(&gone).is_none());
    }
}

// src/session.rs
//! Process context owning the pipeline: rule engine, diagnostics store,
//! cancellation token, and the report/audit outputs. Host trigger events
//! enter here.

use std::path::{Path, PathBuf};

use crate::analysis::{analyze_document, scan_workspace};
use crate::cancel::CancelToken;
use crate::config::RuleConfig;
use crate::engine::RuleEngine;
use crate::error::Result;
use crate::events::{EventKind, EventLogger, TriggerEvent};
use crate::notify;
use crate::report;
use crate::store::DiagnosticsStore;
use crate::types::{Document, ScanOutcome};

pub struct LintSession {
    root: PathBuf,
    engine: RuleEngine,
    store: DiagnosticsStore,
    cancel: CancelToken,
    events: EventLogger,
}

impl LintSession {
    /// Opens a session over a project root with the embedded configuration.
    ///
    /// # Errors
    /// Returns `LintError::Config` if the rule configuration is invalid.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(root, RuleConfig::embedded())
    }

    /// Opens a session with an explicit configuration (tests mostly).
    ///
    /// # Errors
    /// Returns `LintError::Config` if the rule configuration is invalid.
    pub fn with_config(root: impl Into<PathBuf>, config: RuleConfig) -> Result<Self> {
        let root = root.into();
        let events = EventLogger::new(&root);
        Ok(Self {
            root,
            engine: RuleEngine::new(config)?,
            store: DiagnosticsStore::new(),
            cancel: CancelToken::new(),
            events,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn store(&self) -> &DiagnosticsStore {
        &self.store
    }

    /// A clone of the shared cancellation token, for the host to signal.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Dispatches one host trigger event.
    pub fn handle_event(&self, event: TriggerEvent) {
        match event {
            TriggerEvent::DocumentOpened(path) | TriggerEvent::DocumentSaved(path) => {
                self.analyze_and_sync(&path);
            }
            TriggerEvent::WorkspaceChanged => {
                self.initial_scan();
            }
        }
    }

    /// Full workspace scan followed by report generation from its results.
    pub fn initial_scan(&self) -> ScanOutcome {
        self.events.log(EventKind::ScanStarted);
        let outcome = scan_workspace(
            &self.root,
            &self.engine,
            &self.store,
            &self.cancel,
            Some(&self.events),
        );
        if outcome.cancelled {
            self.events.log(EventKind::ScanCancelled {
                files_completed: outcome.files_analyzed,
            });
        } else {
            self.events.log(EventKind::ScanCompleted {
                files: outcome.files_analyzed,
                diagnostics: outcome.diagnostics.len(),
            });
        }
        self.sync_report();
        outcome
    }

    // Single-file path. When the analysis produced at least one diagnostic
    // the report is re-derived from a fresh full workspace re-scan, not from
    // the in-memory store alone; the two paths can disagree if files changed
    // in between, and that is accepted. Scan-internal analyzer calls never
    // come back through here, so the re-scan cannot recurse.
    fn analyze_and_sync(&self, path: &Path) {
        if self.cancel.is_cancelled() {
            return;
        }
        let doc = match Document::read(path) {
            Ok(doc) => doc,
            Err(e) => {
                notify::warn(&format!("cannot analyze {}: {e}", path.display()));
                return;
            }
        };
        let diagnostics = analyze_document(
            &doc,
            &self.engine,
            &self.store,
            &self.cancel,
            Some(&self.events),
        );
        self.events.log(EventKind::FileAnalyzed {
            path: path.display().to_string(),
            diagnostics: diagnostics.len(),
        });
        if !diagnostics.is_empty() {
            scan_workspace(
                &self.root,
                &self.engine,
                &self.store,
                &self.cancel,
                Some(&self.events),
            );
            self.sync_report();
        }
    }

    fn sync_report(&self) {
        let text = report::render(&self.store.snapshot());
        match report::persist(&self.root, &text) {
            Ok(path) => {
                notify::info(&format!("lint report updated: {}", path.display()));
                self.events.log(EventKind::ReportWritten {
                    path: path.display().to_string(),
                });
            }
            Err(e) => {
                notify::error(&format!("failed to write lint report: {e}"));
                self.events.log(EventKind::ReportFailed {
                    error: e.to_string(),
                });
            }
        }
    }
}

// src/engine/duplicate.rs
//! Stateful duplicate-block rule.
//!
//! Evaluated once per brace-delimited statement block while the engine
//! processes one file. The fingerprint is SHA-256 over the *entire file's*
//! current source bytes, not the block's own text, so any two blocks seen
//! within the same unchanged file collide. That coarse behavior is
//! intentional; do not narrow it to per-block hashing without changing the
//! acceptance tests.
//!
//! The table lives for exactly one evaluation pass and never leaks state
//! into the next file's analysis.

use crate::types::RawMessage;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tree_sitter::Node;

use super::rules::CheckContext;

pub const RULE_ID: &str = "duplicate-block";

type Hash = [u8; 32];

/// Mapping from content hash to the ordered source lines where that hash
/// was first and subsequently observed.
#[derive(Debug, Default)]
pub struct FingerprintTable {
    seen: HashMap<Hash, Vec<usize>>,
}

impl FingerprintTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one block sighting. Returns the lines previously recorded
    /// for this hash (empty on first sight).
    pub fn observe(&mut self, hash: Hash, line: usize) -> Vec<usize> {
        let entry = self.seen.entry(hash).or_default();
        let previous = entry.clone();
        entry.push(line);
        previous
    }
}

/// Stable content hash over a UTF-8 byte sequence. The exact algorithm is
/// not load-bearing; only stability and collision resistance matter.
#[must_use]
pub fn fingerprint(content: &str) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hasher.finalize().into()
}

/// Runs the duplicate-block rule over one file with a fresh table.
pub fn check_duplicates(ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.duplicate_block.engine_level() else {
        return;
    };
    let mut table = FingerprintTable::new();
    visit(ctx.root, ctx.source, level, &mut table, out);
}

fn visit(
    node: Node,
    source: &str,
    level: u8,
    table: &mut FingerprintTable,
    out: &mut Vec<RawMessage>,
) {
    if node.kind() == "statement_block" {
        let line = node.start_position().row + 1;
        let column = node.start_position().column + 1;
        let previous = table.observe(fingerprint(source), line);
        if !previous.is_empty() {
            let lines: Vec<String> = previous.iter().map(ToString::to_string).collect();
            out.push(RawMessage::simple(
                line,
                column,
                level,
                RULE_ID,
                format!(
                    "Duplicate code block detected; previously seen at line(s) {}.",
                    lines.join(", ")
                ),
            ));
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, level, table, out);
    }
}

// src/engine/mod.rs
//! Rule Engine Adapter.
//!
//! Wraps the rule-evaluation machinery behind a narrow contract: source
//! text + file path in, ordered raw messages out. The path is used only for
//! dialect selection and ignore-pattern matching. Applying fixes overwrites
//! the analyzed file on disk; that is a documented side effect of analysis,
//! not advisory reporting.

pub mod duplicate;
pub mod rules;

use std::path::Path;

use tree_sitter::Parser;

use crate::config::RuleConfig;
use crate::error::{LintError, Result};
use crate::lang::Lang;
use crate::types::{Fix, RawMessage};

use rules::CheckContext;

pub struct RuleEngine {
    config: RuleConfig,
}

impl RuleEngine {
    /// Creates the adapter over a rule configuration.
    ///
    /// # Errors
    /// Returns `LintError::Config` if the configuration is invalid.
    pub fn new(config: RuleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Runs every enabled rule over one file's text and returns the ordered
    /// message sequence. Unrecognized dialects and ignored paths yield an
    /// empty sequence without error.
    ///
    /// # Errors
    /// Returns `LintError::Engine` if the dialect grammar cannot be loaded
    /// or the text cannot be parsed at all.
    pub fn evaluate(&self, path: &Path, source: &str) -> Result<Vec<RawMessage>> {
        if self.is_ignored(path) {
            return Ok(Vec::new());
        }
        let Some(lang) = Lang::from_path(path) else {
            return Ok(Vec::new());
        };

        let mut parser = Parser::new();
        parser
            .set_language(lang.grammar())
            .map_err(|e| LintError::Engine(e.to_string()))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| LintError::Engine(format!("failed to parse {}", path.display())))?;

        let ctx = CheckContext {
            root: tree.root_node(),
            source,
            path,
            config: &self.config,
        };

        let mut out = Vec::new();
        rules::check_line_length(&ctx, &mut out);
        rules::check_banned(&ctx, &mut out);
        rules::check_naming(&ctx, &mut out);
        rules::check_declarations(&ctx, &mut out);
        rules::check_metrics(&ctx, &mut out);
        duplicate::check_duplicates(&ctx, &mut out);

        out.sort_by(|a, b| {
            (a.line, a.column, a.rule_id).cmp(&(b.line, b.column, b.rule_id))
        });
        Ok(out)
    }

    /// Applies every fix attached to the messages and overwrites the file.
    /// Overlapping fixes are dropped (first by position wins). Returns the
    /// number of fixes applied; zero means the file was left untouched.
    ///
    /// # Errors
    /// Returns `LintError::Io` if the repaired text cannot be written back.
    pub fn apply_fixes(
        &self,
        path: &Path,
        source: &str,
        messages: &[RawMessage],
    ) -> Result<usize> {
        let mut fixes: Vec<&Fix> = messages.iter().filter_map(|m| m.fix.as_ref()).collect();
        if fixes.is_empty() {
            return Ok(0);
        }
        fixes.sort_by_key(|f| f.start_byte);

        let mut accepted: Vec<&Fix> = Vec::with_capacity(fixes.len());
        let mut last_end = 0usize;
        for fix in fixes {
            if fix.start_byte >= last_end && fix.end_byte <= source.len() {
                last_end = fix.end_byte;
                accepted.push(fix);
            }
        }

        let mut repaired = source.to_string();
        for fix in accepted.iter().rev() {
            repaired.replace_range(fix.start_byte..fix.end_byte, &fix.replacement);
        }
        std::fs::write(path, &repaired).map_err(|e| LintError::io(e, path))?;
        Ok(accepted.len())
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.config
            .ignore_patterns
            .iter()
            .any(|p| path_str.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleLevel;
    use std::path::PathBuf;

    fn engine() -> RuleEngine {
        RuleEngine::new(RuleConfig::embedded()).unwrap()
    }

    fn rule_ids(messages: &[RawMessage]) -> Vec<&'static str> {
        messages.iter().map(|m| m.rule_id).collect()
    }

    #[test]
    fn test_clean_source_yields_nothing() {
        let msgs = engine()
            .evaluate(&PathBuf::from("a.js"), "const answer = 42;\nexport { answer };\n")
            .unwrap();
        assert!(msgs.is_empty(), "unexpected: {msgs:?}");
    }

    #[test]
    fn test_no_console() {
        let msgs = engine()
            .evaluate(&PathBuf::from("a.js"), "console.log('hi');\n")
            .unwrap();
        assert!(rule_ids(&msgs).contains(&"no-console"));
        let m = msgs.iter().find(|m| m.rule_id == "no-console").unwrap();
        assert_eq!((m.line, m.column), (1, 1));
        assert_eq!(m.level, 1);
    }

    #[test]
    fn test_eqeqeq_with_fix() {
        let source = "export function check(x) { return x == 1; }\n";
        let msgs = engine().evaluate(&PathBuf::from("b.js"), source).unwrap();
        let m = msgs.iter().find(|m| m.rule_id == "eqeqeq").unwrap();
        assert_eq!(m.level, 2);
        assert!(m.message.contains("'==='"));
        let fix = m.fix.as_ref().unwrap();
        assert_eq!(&source[fix.start_byte..fix.end_byte], "==");
        assert_eq!(fix.replacement, "===");
    }

    #[test]
    fn test_no_var() {
        let msgs = engine()
            .evaluate(&PathBuf::from("a.js"), "var count = 0;\nexport { count };\n")
            .unwrap();
        assert!(rule_ids(&msgs).contains(&"no-var"));
    }

    #[test]
    fn test_quotes_prefers_single() {
        let msgs = engine()
            .evaluate(&PathBuf::from("a.js"), "export const s = \"hello\";\n")
            .unwrap();
        let m = msgs.iter().find(|m| m.rule_id == "quotes").unwrap();
        assert_eq!(m.level, 1);
        assert_eq!(m.fix.as_ref().unwrap().replacement, "'hello'");
    }

    #[test]
    fn test_max_len_anchored_at_long_line() {
        let long = format!("export const padding = 1; {}\n", "+ 1 ".repeat(40));
        assert!(long.len() > 120);
        let source = format!("export const ok = 1;\n{long}");
        let msgs = engine().evaluate(&PathBuf::from("a.js"), &source).unwrap();
        let m = msgs.iter().find(|m| m.rule_id == "max-len").unwrap();
        assert_eq!(m.line, 2);
        assert_eq!(m.column, 121);
    }

    #[test]
    fn test_max_len_skips_urls() {
        let source = format!(
            "export const u = 'https://example.com/{}';\n",
            "x".repeat(120)
        );
        let msgs = engine().evaluate(&PathBuf::from("a.js"), &source).unwrap();
        assert!(!rule_ids(&msgs).contains(&"max-len"));
    }

    #[test]
    fn test_duplicate_blocks_collide_within_one_file() {
        let source = "export function a() { return 1; }\nexport function b() { return 2; }\nexport function c() { return 3; }\n";
        let msgs = engine().evaluate(&PathBuf::from("a.js"), source).unwrap();
        let dups: Vec<_> = msgs
            .iter()
            .filter(|m| m.rule_id == "duplicate-block")
            .collect();
        // Whole-file fingerprint: the second and third blocks both collide
        // with every block seen before them.
        assert_eq!(dups.len(), 2);
        assert!(dups[0].message.contains("line(s) 1"));
        assert!(dups[1].message.contains("1, 2"));
    }

    #[test]
    fn test_duplicate_detection_is_idempotent() {
        let source = "export function a() { return 1; }\nexport function b() { return 2; }\n";
        let e = engine();
        let first = e.evaluate(&PathBuf::from("a.js"), source).unwrap();
        let second = e.evaluate(&PathBuf::from("a.js"), source).unwrap();
        let lines = |msgs: &[RawMessage]| -> Vec<usize> {
            msgs.iter()
                .filter(|m| m.rule_id == "duplicate-block")
                .map(|m| m.line)
                .collect()
        };
        assert_eq!(lines(&first), lines(&second));
    }

    #[test]
    fn test_default_case_family() {
        let source = "export function pick(x) {\n  switch (x) {\n    case 1:\n      break;\n  }\n}\n";
        let msgs = engine().evaluate(&PathBuf::from("a.ts"), source).unwrap();
        assert!(rule_ids(&msgs).contains(&"default-case"));

        let source = "export function pick(x) {\n  switch (x) {\n    default:\n      break;\n    case 1:\n      break;\n  }\n}\n";
        let msgs = engine().evaluate(&PathBuf::from("a.ts"), source).unwrap();
        assert!(rule_ids(&msgs).contains(&"default-case-last"));
    }

    #[test]
    fn test_camelcase_and_init() {
        let source = "let my_total;\nexport { my_total };\n";
        let msgs = engine().evaluate(&PathBuf::from("a.js"), source).unwrap();
        let ids = rule_ids(&msgs);
        assert!(ids.contains(&"camelcase"));
        assert!(ids.contains(&"init-declarations"));
    }

    #[test]
    fn test_unused_var() {
        let source = "const unusedThing = 1;\nexport const used = 2;\nconsole.info(used);\n";
        let msgs = engine().evaluate(&PathBuf::from("a.js"), source).unwrap();
        let unused: Vec<_> = msgs
            .iter()
            .filter(|m| m.rule_id == "no-unused-vars")
            .collect();
        assert_eq!(unused.len(), 1);
        assert!(unused[0].message.contains("'unusedThing'"));
    }

    #[test]
    fn test_complexity_threshold() {
        let source = "export function busy(x) {\n  if (x) {}\n  if (x) {}\n  if (x) {}\n  if (x) {}\n  if (x) {}\n  return x;\n}\n";
        let msgs = engine().evaluate(&PathBuf::from("a.js"), source).unwrap();
        let m = msgs.iter().find(|m| m.rule_id == "complexity").unwrap();
        assert!(m.message.contains("complexity of 6"));
    }

    #[test]
    fn test_max_depth() {
        let source = "export function deep(x) {\n  if (x) {\n    if (x) {\n      if (x) {\n        x();\n      }\n    }\n  }\n}\n";
        let msgs = engine().evaluate(&PathBuf::from("a.js"), source).unwrap();
        assert!(rule_ids(&msgs).contains(&"max-depth"));
    }

    #[test]
    fn test_max_statements_counts_only_statements() {
        let body = "  x = x + 1;\n".repeat(16);
        let source = format!("export function busy(x) {{\n{body}}}\n");
        let msgs = engine().evaluate(&PathBuf::from("a.js"), &source).unwrap();
        let m = msgs.iter().find(|m| m.rule_id == "max-statements").unwrap();
        assert!(m.message.contains("(16)"));

        // Comments inside the body are named nodes but not statements.
        let commented = format!(
            "export function busy(x) {{\n{}{}}}\n",
            "  // step\n".repeat(10),
            "  x = x + 1;\n".repeat(15)
        );
        let msgs = engine()
            .evaluate(&PathBuf::from("a.js"), &commented)
            .unwrap();
        assert!(
            !rule_ids(&msgs).contains(&"max-statements"),
            "unexpected: {msgs:?}"
        );
    }

    #[test]
    fn test_unrecognized_dialect_is_empty() {
        let msgs = engine()
            .evaluate(&PathBuf::from("notes.md"), "anything == at all\n")
            .unwrap();
        assert!(msgs.is_empty());
    }

    #[test]
    fn test_ignored_path_is_empty() {
        let msgs = engine()
            .evaluate(&PathBuf::from("node_modules/x/index.js"), "var a = 1 == 2;\n")
            .unwrap();
        assert!(msgs.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RuleConfig::embedded();
        config.max_complexity = 0;
        assert!(RuleEngine::new(config).is_err());
    }

    #[test]
    fn test_apply_fixes_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fix.js");
        let source = "export function check(x) { return x == 1; }\n";
        std::fs::write(&path, source).unwrap();

        let e = engine();
        let msgs = e.evaluate(&path, source).unwrap();
        let applied = e.apply_fixes(&path, source, &msgs).unwrap();
        assert!(applied >= 1);

        let repaired = std::fs::read_to_string(&path).unwrap();
        assert!(repaired.contains("x === 1"));
    }

    #[test]
    fn test_levels_can_disable_rules() {
        let mut config = RuleConfig::embedded();
        config.no_console = RuleLevel::Off;
        let e = RuleEngine::new(config).unwrap();
        let msgs = e
            .evaluate(&PathBuf::from("a.js"), "console.log('hi');\n")
            .unwrap();
        assert!(!rule_ids(&msgs).contains(&"no-console"));
    }
}

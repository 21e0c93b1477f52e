// src/config.rs
//! Fixed, embedded rule configuration.
//!
//! The recognized option set is closed: style/complexity thresholds plus the
//! custom duplicate-block rule. Nothing is loaded from disk.

use crate::error::{LintError, Result};
use serde::{Deserialize, Serialize};

/// Severity assigned to a rule in the embedded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    /// The numeric severity the engine attaches to messages for this rule,
    /// or `None` when the rule is disabled.
    #[must_use]
    pub fn engine_level(self) -> Option<u8> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Warn => Some(1),
            RuleLevel::Error => Some(2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    Single,
    Double,
}

impl QuoteStyle {
    #[must_use]
    pub fn quote_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub camelcase: RuleLevel,
    pub complexity: RuleLevel,
    pub max_complexity: usize,
    pub max_depth: RuleLevel,
    pub max_nesting_depth: usize,
    pub max_params: RuleLevel,
    pub max_function_params: usize,
    pub max_statements: RuleLevel,
    pub max_function_statements: usize,
    pub no_var: RuleLevel,
    pub no_console: RuleLevel,
    pub eqeqeq: RuleLevel,
    pub no_unused_vars: RuleLevel,
    pub init_declarations: RuleLevel,
    pub default_case: RuleLevel,
    pub default_case_last: RuleLevel,
    pub max_len: RuleLevel,
    pub max_line_length: usize,
    pub no_debugger: RuleLevel,
    pub quotes: RuleLevel,
    pub quote_style: QuoteStyle,
    pub duplicate_block: RuleLevel,

    /// Path substrings the engine skips entirely.
    pub ignore_patterns: Vec<String>,
}

impl RuleConfig {
    /// The fixed configuration shipped with the tool. `no-debugger` is
    /// gated on the host environment: enabled only for production builds.
    #[must_use]
    pub fn embedded() -> Self {
        let no_debugger = if std::env::var("NODE_ENV").as_deref() == Ok("production") {
            RuleLevel::Error
        } else {
            RuleLevel::Off
        };

        Self {
            camelcase: RuleLevel::Error,
            complexity: RuleLevel::Error,
            max_complexity: 5,
            max_depth: RuleLevel::Error,
            max_nesting_depth: 2,
            max_params: RuleLevel::Error,
            max_function_params: 4,
            max_statements: RuleLevel::Error,
            max_function_statements: 15,
            no_var: RuleLevel::Error,
            no_console: RuleLevel::Warn,
            eqeqeq: RuleLevel::Error,
            no_unused_vars: RuleLevel::Warn,
            init_declarations: RuleLevel::Error,
            default_case: RuleLevel::Error,
            default_case_last: RuleLevel::Error,
            max_len: RuleLevel::Error,
            max_line_length: 120,
            no_debugger,
            quotes: RuleLevel::Warn,
            quote_style: QuoteStyle::Single,
            duplicate_block: RuleLevel::Warn,
            ignore_patterns: vec!["node_modules".to_string(), ".min.".to_string()],
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `LintError::Config` if any threshold is zero. With the
    /// embedded table this cannot happen, but the adapter checks anyway.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("complexity", self.max_complexity),
            ("max-depth", self.max_nesting_depth),
            ("max-params", self.max_function_params),
            ("max-statements", self.max_function_statements),
            ("max-len", self.max_line_length),
        ];
        for (name, value) in thresholds {
            if value == 0 {
                return Err(LintError::Config(format!(
                    "threshold for '{name}' must be positive"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::embedded()
    }
}

// Pattern constants
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "bower_components",
    "dist",
    "build",
    "out",
    "coverage",
    ".cache",
    "vendor",
    "target",
];

pub const SOURCE_EXT_PATTERN: &str = r"(?i)\.(jsx?|tsx?|mjs|cjs)$";

/// Directory names excluded from workspace enumeration.
#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

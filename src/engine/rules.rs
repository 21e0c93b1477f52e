// src/engine/rules.rs
//! The closed declarative rule set, evaluated over the parsed AST.
//!
//! Rules are a fixed tagged set selected by the embedded configuration:
//! declarative threshold/style checks here, plus the one stateful
//! structural rule in `engine::duplicate`. There is no runtime rule
//! registration.

mod banned;
mod complexity;
mod declarations;
mod lines;
mod naming;

use std::path::Path;
use tree_sitter::Node;

use crate::config::RuleConfig;

pub use banned::check_banned;
pub use complexity::check_metrics;
pub use declarations::check_declarations;
pub use lines::check_line_length;
pub use naming::check_naming;

/// Context for running checks on a single file.
pub struct CheckContext<'a> {
    pub root: Node<'a>,
    pub source: &'a str,
    pub path: &'a Path,
    pub config: &'a RuleConfig,
}

pub(crate) fn is_function_kind(kind: &str) -> bool {
    matches!(
        kind,
        "function_declaration"
            | "function_expression"
            | "function"
            | "generator_function_declaration"
            | "method_definition"
            | "arrow_function"
    )
}

pub(crate) fn function_name(node: Node, source: &str) -> String {
    if let Some(name) = node.child_by_field_name("name") {
        if let Ok(text) = name.utf8_text(source.as_bytes()) {
            return text.to_string();
        }
    }
    for child in node.children(&mut node.walk()) {
        if child.kind() == "identifier" || child.kind() == "property_identifier" {
            if let Ok(text) = child.utf8_text(source.as_bytes()) {
                return text.to_string();
            }
        }
    }
    "<anonymous>".to_string()
}

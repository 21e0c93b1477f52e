// src/engine/rules/banned.rs
//! Forbidden-construct checks: no-var, no-console, eqeqeq, no-debugger,
//! quotes.

use tree_sitter::Node;

use crate::config::QuoteStyle;
use crate::types::{Fix, RawMessage};

use super::CheckContext;

/// Checks for banned constructs in one recursive walk.
pub fn check_banned(ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    walk(ctx.root, ctx, out);
}

fn walk(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    match node.kind() {
        "variable_declaration" => check_var(node, ctx, out),
        "member_expression" => check_console(node, ctx, out),
        "binary_expression" => check_loose_equality(node, ctx, out),
        "debugger_statement" => check_debugger(node, ctx, out),
        "string" => check_quotes(node, ctx, out),
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, ctx, out);
    }
}

// `var` declarations parse as variable_declaration; let/const are
// lexical_declaration, so matching the kind is enough.
fn check_var(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.no_var.engine_level() else {
        return;
    };
    let mut message = RawMessage::simple(
        node.start_position().row + 1,
        node.start_position().column + 1,
        level,
        "no-var",
        "Unexpected var, use let or const instead.".to_string(),
    );
    if let Some(keyword) = node.children(&mut node.walk()).find(|c| c.kind() == "var") {
        message = message.with_fix(Fix {
            start_byte: keyword.start_byte(),
            end_byte: keyword.end_byte(),
            replacement: "let".to_string(),
        });
    }
    out.push(message);
}

fn check_console(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.no_console.engine_level() else {
        return;
    };
    let Some(object) = node.child_by_field_name("object") else {
        return;
    };
    if object.kind() != "identifier" {
        return;
    }
    if object.utf8_text(ctx.source.as_bytes()) != Ok("console") {
        return;
    }
    out.push(RawMessage::simple(
        node.start_position().row + 1,
        node.start_position().column + 1,
        level,
        "no-console",
        "Unexpected console statement.".to_string(),
    ));
}

fn check_loose_equality(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.eqeqeq.engine_level() else {
        return;
    };
    let Some(operator) = node.child_by_field_name("operator") else {
        return;
    };
    let Ok(op_text) = operator.utf8_text(ctx.source.as_bytes()) else {
        return;
    };
    let strict = match op_text {
        "==" => "===",
        "!=" => "!==",
        _ => return,
    };
    let message = RawMessage::simple(
        operator.start_position().row + 1,
        operator.start_position().column + 1,
        level,
        "eqeqeq",
        format!("Expected '{strict}' and instead saw '{op_text}'."),
    )
    .with_end(
        operator.end_position().row + 1,
        operator.end_position().column + 1,
    )
    .with_fix(Fix {
        start_byte: operator.start_byte(),
        end_byte: operator.end_byte(),
        replacement: strict.to_string(),
    });
    out.push(message);
}

fn check_debugger(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.no_debugger.engine_level() else {
        return;
    };
    out.push(RawMessage::simple(
        node.start_position().row + 1,
        node.start_position().column + 1,
        level,
        "no-debugger",
        "Unexpected 'debugger' statement.".to_string(),
    ));
}

fn check_quotes(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.quotes.engine_level() else {
        return;
    };
    let Ok(text) = node.utf8_text(ctx.source.as_bytes()) else {
        return;
    };
    let preferred = ctx.config.quote_style.quote_char();
    if text.starts_with(preferred) {
        return;
    }

    let wording = match ctx.config.quote_style {
        QuoteStyle::Single => "singlequote",
        QuoteStyle::Double => "doublequote",
    };
    let mut message = RawMessage::simple(
        node.start_position().row + 1,
        node.start_position().column + 1,
        level,
        "quotes",
        format!("Strings must use {wording}."),
    );

    // Requote only when the inner text is free of quotes and escapes.
    let inner = &text[1..text.len().saturating_sub(1)];
    if !inner.contains('\'') && !inner.contains('"') && !inner.contains('\\') {
        message = message.with_fix(Fix {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            replacement: format!("{preferred}{inner}{preferred}"),
        });
    }
    out.push(message);
}

// src/engine/rules/complexity.rs
//! Per-function threshold checks: complexity, max-depth, max-params,
//! max-statements.

use tree_sitter::Node;

use crate::types::RawMessage;

use super::{function_name, is_function_kind, CheckContext};

/// Checks every function in the file against the complexity thresholds.
pub fn check_metrics(ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    walk(ctx.root, ctx, out);
}

fn walk(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    if is_function_kind(node.kind()) {
        analyze_function(node, ctx, out);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, ctx, out);
    }
}

fn analyze_function(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    check_params(node, ctx, out);
    check_statements(node, ctx, out);
    check_complexity(node, ctx, out);
    check_depth(node, ctx, out);
}

fn check_params(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.max_params.engine_level() else {
        return;
    };
    let count = count_parameters(node);
    if count <= ctx.config.max_function_params {
        return;
    }
    let name = function_name(node, ctx.source);
    out.push(RawMessage::simple(
        node.start_position().row + 1,
        node.start_position().column + 1,
        level,
        "max-params",
        format!(
            "Function '{name}' has too many parameters ({count}). Maximum allowed is {}.",
            ctx.config.max_function_params
        ),
    ));
}

fn count_parameters(node: Node) -> usize {
    node.child_by_field_name("parameters")
        .map_or(0, |params| params.named_child_count())
}

fn check_statements(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.max_statements.engine_level() else {
        return;
    };
    let Some(body) = node.child_by_field_name("body") else {
        return;
    };
    if body.kind() != "statement_block" {
        return;
    }
    let count = count_statements(body);
    if count <= ctx.config.max_function_statements {
        return;
    }
    let name = function_name(node, ctx.source);
    out.push(RawMessage::simple(
        node.start_position().row + 1,
        node.start_position().column + 1,
        level,
        "max-statements",
        format!(
            "Function '{name}' has too many statements ({count}). Maximum allowed is {}.",
            ctx.config.max_function_statements
        ),
    ));
}

// Comments are named nodes inside a statement_block and must not count
// toward the statement total.
fn count_statements(body: Node) -> usize {
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .count()
}

fn check_complexity(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.complexity.engine_level() else {
        return;
    };
    let complexity = 1 + count_branches(node, ctx.source, true);
    if complexity <= ctx.config.max_complexity {
        return;
    }
    let name = function_name(node, ctx.source);
    out.push(RawMessage::simple(
        node.start_position().row + 1,
        node.start_position().column + 1,
        level,
        "complexity",
        format!(
            "Function '{name}' has a complexity of {complexity}. Maximum allowed is {}.",
            ctx.config.max_complexity
        ),
    ));
}

// Decision points inside one function, not crossing into nested functions
// (each nested function is scored on its own when the walk reaches it).
fn count_branches(node: Node, source: &str, is_root: bool) -> usize {
    if !is_root && is_function_kind(node.kind()) {
        return 0;
    }

    let own = match node.kind() {
        "if_statement" | "for_statement" | "for_in_statement" | "while_statement"
        | "do_statement" | "catch_clause" | "ternary_expression" | "switch_case" => 1,
        "binary_expression" => {
            let op = node
                .child_by_field_name("operator")
                .and_then(|o| o.utf8_text(source.as_bytes()).ok());
            usize::from(matches!(op, Some("&&" | "||" | "??")))
        }
        _ => 0,
    };

    let mut total = own;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        total += count_branches(child, source, false);
    }
    total
}

fn check_depth(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.max_depth.engine_level() else {
        return;
    };
    let base_row = node.start_position().row + 1;
    let (depth, deepest_line) = measure_nesting(node, 0, base_row, true);
    if depth <= ctx.config.max_nesting_depth {
        return;
    }
    out.push(RawMessage::simple(
        deepest_line,
        1,
        level,
        "max-depth",
        format!(
            "Blocks are nested too deeply ({depth}). Maximum allowed is {}.",
            ctx.config.max_nesting_depth
        ),
    ));
}

fn measure_nesting(node: Node, current: usize, base_row: usize, is_root: bool) -> (usize, usize) {
    if !is_root && is_function_kind(node.kind()) {
        return (current, base_row);
    }

    let mut max_depth = current;
    let mut deepest_line = base_row;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let child_depth = if is_nesting_node(child.kind()) {
            current + 1
        } else {
            current
        };
        let child_row = child.start_position().row + 1;
        let (sub_depth, sub_line) = measure_nesting(child, child_depth, child_row, false);
        if sub_depth > max_depth {
            max_depth = sub_depth;
            deepest_line = sub_line;
        }
    }

    (max_depth, deepest_line)
}

fn is_nesting_node(kind: &str) -> bool {
    matches!(
        kind,
        "if_statement"
            | "for_statement"
            | "for_in_statement"
            | "while_statement"
            | "do_statement"
            | "switch_statement"
            | "try_statement"
    )
}

// src/engine/rules/declarations.rs
//! Declaration hygiene checks: init-declarations, no-unused-vars,
//! default-case, default-case-last.

use tree_sitter::Node;

use crate::types::RawMessage;

use super::CheckContext;

pub fn check_declarations(ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    walk(ctx.root, ctx, out);
    check_unused_vars(ctx, out);
}

fn walk(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    match node.kind() {
        "variable_declarator" => check_init(node, ctx, out),
        "switch_statement" => check_default_case(node, ctx, out),
        _ => {}
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, ctx, out);
    }
}

fn check_init(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.init_declarations.engine_level() else {
        return;
    };
    if node.child_by_field_name("value").is_some() {
        return;
    }
    // `for (const k in obj)` declarators are initialized by the loop itself.
    if in_for_loop_header(node) {
        return;
    }
    let Some(name) = node.child_by_field_name("name") else {
        return;
    };
    let Ok(text) = name.utf8_text(ctx.source.as_bytes()) else {
        return;
    };
    out.push(RawMessage::simple(
        name.start_position().row + 1,
        name.start_position().column + 1,
        level,
        "init-declarations",
        format!("Variable '{text}' should be initialized on declaration."),
    ));
}

fn in_for_loop_header(node: Node) -> bool {
    let mut current = node.parent();
    while let Some(p) = current {
        match p.kind() {
            "for_statement" | "for_in_statement" => return true,
            "statement_block" | "program" => return false,
            _ => current = p.parent(),
        }
    }
    false
}

fn check_default_case(node: Node, ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(body) = node.child_by_field_name("body") else {
        return;
    };

    let clauses: Vec<Node> = {
        let mut cursor = body.walk();
        body.children(&mut cursor)
            .filter(|c| matches!(c.kind(), "switch_case" | "switch_default"))
            .collect()
    };
    let default_idx = clauses.iter().position(|c| c.kind() == "switch_default");

    match default_idx {
        None => {
            if let Some(level) = ctx.config.default_case.engine_level() {
                out.push(RawMessage::simple(
                    node.start_position().row + 1,
                    node.start_position().column + 1,
                    level,
                    "default-case",
                    "Expected a default case.".to_string(),
                ));
            }
        }
        Some(idx) => {
            if idx + 1 != clauses.len() {
                if let Some(level) = ctx.config.default_case_last.engine_level() {
                    let clause = clauses[idx];
                    out.push(RawMessage::simple(
                        clause.start_position().row + 1,
                        clause.start_position().column + 1,
                        level,
                        "default-case-last",
                        "Default clause should be the last clause.".to_string(),
                    ));
                }
            }
        }
    }
}

fn check_unused_vars(ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.no_unused_vars.engine_level() else {
        return;
    };

    let mut declarations = Vec::new();
    collect_declarations(ctx.root, ctx.source, &mut declarations);

    for (name, node) in declarations {
        if !has_other_reference(ctx.root, ctx.source, &name, node.start_byte()) {
            out.push(RawMessage::simple(
                node.start_position().row + 1,
                node.start_position().column + 1,
                level,
                "no-unused-vars",
                format!("'{name}' is defined but never used."),
            ));
        }
    }
}

fn collect_declarations<'a>(node: Node<'a>, source: &str, out: &mut Vec<(String, Node<'a>)>) {
    let declared = match node.kind() {
        "variable_declarator" | "function_declaration" | "generator_function_declaration" => {
            // Exported declarations are used by consumers of the module.
            if is_exported(node) {
                None
            } else {
                node.child_by_field_name("name")
            }
        }
        _ => None,
    };
    if let Some(name_node) = declared {
        if name_node.kind() == "identifier" {
            if let Ok(text) = name_node.utf8_text(source.as_bytes()) {
                out.push((text.to_string(), name_node));
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_declarations(child, source, out);
    }
}

fn is_exported(node: Node) -> bool {
    let mut current = node.parent();
    while let Some(p) = current {
        match p.kind() {
            "export_statement" => return true,
            "program" | "statement_block" => return false,
            _ => current = p.parent(),
        }
    }
    false
}

fn has_other_reference(node: Node, source: &str, name: &str, declaration_byte: usize) -> bool {
    if matches!(node.kind(), "identifier" | "shorthand_property_identifier")
        && node.start_byte() != declaration_byte
        && node.utf8_text(source.as_bytes()) == Ok(name)
    {
        return true;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if has_other_reference(child, source, name, declaration_byte) {
            return true;
        }
    }
    false
}

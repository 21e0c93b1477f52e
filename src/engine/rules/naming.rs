// src/engine/rules/naming.rs
//! camelcase: declared identifiers must not use snake_case. Identifiers
//! entirely in upper case (constant style) are allowed, as are leading and
//! trailing underscores.

use tree_sitter::Node;

use crate::types::RawMessage;

use super::CheckContext;

pub fn check_naming(ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.camelcase.engine_level() else {
        return;
    };
    walk(ctx.root, ctx, level, out);
}

fn walk(node: Node, ctx: &CheckContext, level: u8, out: &mut Vec<RawMessage>) {
    if is_declaration_site(node) {
        if let Some(name_node) = node.child_by_field_name("name") {
            if name_node.kind() == "identifier" {
                if let Ok(name) = name_node.utf8_text(ctx.source.as_bytes()) {
                    check_identifier(name, name_node, level, out);
                }
            }
        }
    }

    if node.kind() == "formal_parameters" {
        let mut cursor = node.walk();
        for param in node.children(&mut cursor) {
            if param.kind() == "identifier" {
                if let Ok(name) = param.utf8_text(ctx.source.as_bytes()) {
                    check_identifier(name, param, level, out);
                }
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, ctx, level, out);
    }
}

fn is_declaration_site(node: Node) -> bool {
    matches!(
        node.kind(),
        "variable_declarator"
            | "function_declaration"
            | "generator_function_declaration"
            | "class_declaration"
    )
}

fn check_identifier(name: &str, node: Node, level: u8, out: &mut Vec<RawMessage>) {
    if !is_snake_case(name) {
        return;
    }
    out.push(RawMessage::simple(
        node.start_position().row + 1,
        node.start_position().column + 1,
        level,
        "camelcase",
        format!("Identifier '{name}' is not in camel case."),
    ));
}

fn is_snake_case(name: &str) -> bool {
    let trimmed = name.trim_matches('_');
    if !trimmed.contains('_') {
        return false;
    }
    // Constant style (ALL_CAPS) is conventional and exempt.
    trimmed != trimmed.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::is_snake_case;

    #[test]
    fn test_snake_case_detection() {
        assert!(is_snake_case("my_var"));
        assert!(is_snake_case("_private_thing"));
        assert!(!is_snake_case("myVar"));
        assert!(!is_snake_case("MY_CONSTANT"));
        assert!(!is_snake_case("_leading"));
        assert!(!is_snake_case("x"));
    }
}

// src/engine/rules/lines.rs
//! max-len: line-length ceiling with URL, template-literal, and comment
//! exemptions.

use crate::types::RawMessage;

use super::CheckContext;

pub fn check_line_length(ctx: &CheckContext, out: &mut Vec<RawMessage>) {
    let Some(level) = ctx.config.max_len.engine_level() else {
        return;
    };
    let max = ctx.config.max_line_length;

    for (idx, line) in ctx.source.lines().enumerate() {
        let length = line.chars().count();
        if length <= max || is_exempt(line) {
            continue;
        }
        out.push(RawMessage::simple(
            idx + 1,
            max + 1,
            level,
            "max-len",
            format!("This line has a length of {length}. Maximum allowed is {max}."),
        ));
    }
}

fn is_exempt(line: &str) -> bool {
    if line.contains("http://") || line.contains("https://") {
        return true;
    }
    if line.contains('`') {
        return true;
    }
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

#[cfg(test)]
mod tests {
    use super::is_exempt;

    #[test]
    fn test_exemptions() {
        assert!(is_exempt("const u = 'https://example.com/very/long/path';"));
        assert!(is_exempt("  // a very long comment line"));
        assert!(is_exempt("const t = `template`;"));
        assert!(!is_exempt("const x = 1;"));
    }
}

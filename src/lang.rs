use std::path::Path;
use tree_sitter::Language;

/// The closed set of source dialects this tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        Self::from_ext(ext)
    }

    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::JavaScript | Self::Jsx => tree_sitter_javascript::language(),
            Self::TypeScript => tree_sitter_typescript::language_typescript(),
            Self::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_ext() {
        assert_eq!(Lang::from_ext("js"), Some(Lang::JavaScript));
        assert_eq!(Lang::from_ext("tsx"), Some(Lang::Tsx));
        assert_eq!(Lang::from_ext("rs"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            Lang::from_path(&PathBuf::from("src/app.ts")),
            Some(Lang::TypeScript)
        );
        assert_eq!(Lang::from_path(&PathBuf::from("README.md")), None);
        assert_eq!(Lang::from_path(&PathBuf::from("Makefile")), None);
    }
}

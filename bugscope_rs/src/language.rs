//! Map source file extensions to the language names the service expects.

use std::path::Path;

/// Fallback when the extension is unknown.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Language name for `path`, if its extension is recognized.
pub fn detect_language(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let lang = match ext.as_str() {
        "py" | "pyw" => "python",
        "js" | "mjs" | "cjs" | "jsx" => "javascript",
        "ts" | "mts" | "cts" | "tsx" => "typescript",
        "java" => "java",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "c" | "h" => "c",
        "cs" => "csharp",
        "go" => "go",
        "rs" => "rust",
        "rb" => "ruby",
        "php" => "php",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "sh" | "bash" => "bash",
        "sql" => "sql",
        _ => return None,
    };
    Some(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(detect_language(Path::new("main.py")), Some("python"));
        assert_eq!(detect_language(Path::new("src/App.TSX")), Some("typescript"));
        assert_eq!(detect_language(Path::new("lib/util.hpp")), Some("cpp"));
        assert_eq!(detect_language(Path::new("src/lib.rs")), Some("rust"));
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(detect_language(Path::new("Makefile")), None);
        assert_eq!(detect_language(Path::new("notes.xyz")), None);
    }
}

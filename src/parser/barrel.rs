/// Whether a file consists solely of import/export statements and comments.
///
/// Such a file is a transparent barrel: it introduces nothing of its own,
/// so the graph builder excludes it entirely. An empty file counts as pure.
pub fn is_pure_reexport(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .all(|line| {
            line.starts_with("import")
                || line.starts_with("export")
                || line.starts_with("//")
                || line.starts_with("/*")
                || line.starts_with('*')
                || line.ends_with("*/")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexport_only_file_is_pure() {
        let source = "import { A } from './a';\nexport * from './a';\n";
        assert!(is_pure_reexport(source));
    }

    #[test]
    fn test_comments_do_not_break_purity() {
        let source = "// barrel\n/*\n * re-exports\n */\nexport * from './a';\n";
        assert!(is_pure_reexport(source));
    }

    #[test]
    fn test_real_code_is_not_pure() {
        let source = "import { A } from './a';\nconst b = new A();\nexport { b };\n";
        assert!(!is_pure_reexport(source));
    }

    #[test]
    fn test_empty_file_is_pure() {
        assert!(is_pure_reexport(""));
        assert!(is_pure_reexport("\n\n  \n"));
    }
}

//! Regex-based import extraction.
//!
//! This is a heuristic pass, not a parser: import-shaped text inside
//! comments or string literals is reported as a real import. That trade-off
//! keeps the scan trivially fast and tolerant of syntax errors.

use regex::Regex;
use std::sync::LazyLock;

static IMPORT_FROM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import.*from\s['"](.+?)['"]"#).unwrap());

static REQUIRE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"require\(['"](.+?)['"]\)"#).unwrap());

/// Extract every raw import-path string declared in the source text.
/// Matches `import ... from '<path>'` statements and `require('<path>')`
/// calls, in that order.
pub fn extract_import_paths(source: &str) -> Vec<String> {
    let mut paths = Vec::new();

    for pattern in [&IMPORT_FROM, &REQUIRE_CALL] {
        for caps in pattern.captures_iter(source) {
            paths.push(caps[1].to_string());
        }
    }

    paths
}

mod resolve;
mod selector;

pub use resolve::resolve_import;
pub use selector::{SOURCE_EXTENSIONS, should_process_directory, should_process_file};

use crate::config::Config;
use crate::fs::FileSystem;
use crate::model::{DependencyGraph, node_id};
use crate::parser::{extract_import_paths, is_pure_reexport};
use crate::style;
use ignore::WalkBuilder;
use std::path::Path;

/// Walk the project's source tree and accumulate the dependency graph.
///
/// A missing source root is not an error: it yields an empty graph after an
/// informational message. The graph is rebuilt from scratch on every call.
pub fn build_graph(project_root: &Path, config: &Config, fs: &dyn FileSystem) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    let source_path = project_root.join(&config.scan.source_root);

    if !source_path.is_dir() {
        style::status(&format!(
            "No '{}' directory found under {}",
            config.scan.source_root,
            style::path(project_root)
        ));
        return graph;
    }

    let root = project_root.to_path_buf();
    let source_root = config.scan.source_root.clone();
    let walker = WalkBuilder::new(&source_path)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| match entry.file_type() {
            Some(ft) if ft.is_dir() => should_process_directory(entry.path(), &root, &source_root),
            _ => true,
        })
        .build();

    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_process_file(name) {
            continue;
        }

        let display = path.strip_prefix(project_root).unwrap_or(path);
        style::status(&format!("Processing: {}", display.display()));
        process_file(path, project_root, &config.scan.source_root, fs, &mut graph);
    }

    graph
}

/// Fold one eligible file into the graph: barrel gate, read, extract,
/// resolve. Files that collapse to an existing node union their edges.
pub(crate) fn process_file(
    path: &Path,
    project_root: &Path,
    source_root: &str,
    fs: &dyn FileSystem,
    graph: &mut DependencyGraph,
) {
    let node = node_id(path, project_root, source_root);

    // Barrel files that only re-export are transparent. A read failure here
    // fails open: the file stays included.
    if node.eq_ignore_ascii_case("index") {
        if let Ok(content) = fs.read_to_string(path) {
            if is_pure_reexport(&content) {
                return;
            }
        }
    }

    let content = match fs.read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            style::warning(&format!(
                "Skipping file due to encoding issues: {}",
                path.display()
            ));
            return;
        }
    };

    graph.add_node(node.clone());

    for raw in extract_import_paths(&content) {
        if let Some(target) = resolve_import(&raw, path, project_root, source_root) {
            graph.add_edge(&node, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;

    const ROOT: &str = "/p";

    fn process(fs: &MockFs, path: &str, graph: &mut DependencyGraph) {
        process_file(Path::new(path), Path::new(ROOT), "src", fs, graph);
    }

    #[test]
    fn test_file_with_no_imports_still_gets_a_node() {
        let fs = MockFs::with_files([("/p/src/constants.ts", "export const X = 1;\n")]);
        let mut graph = DependencyGraph::new();
        process(&fs, "/p/src/constants.ts", &mut graph);
        assert!(graph.contains("constants"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_relative_imports_become_edges_bare_ones_do_not() {
        let fs = MockFs::with_files([(
            "/p/src/App.tsx",
            "import React from 'react';\nimport { W } from './Widget';\n",
        )]);
        let mut graph = DependencyGraph::new();
        process(&fs, "/p/src/App.tsx", &mut graph);

        let deps = graph.dependencies_of("App").unwrap();
        assert_eq!(deps.iter().collect::<Vec<_>>(), vec!["Widget"]);
    }

    #[test]
    fn test_pure_reexport_index_is_excluded() {
        let fs = MockFs::with_files([(
            "/p/src/utils/index.ts",
            "import { A } from './a';\nexport * from './a';\n",
        )]);
        let mut graph = DependencyGraph::new();
        process(&fs, "/p/src/utils/index.ts", &mut graph);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_index_with_real_code_is_included() {
        let fs = MockFs::with_files([(
            "/p/src/utils/index.ts",
            "import { A } from './a';\nconst cache = new A();\nexport { cache };\n",
        )]);
        let mut graph = DependencyGraph::new();
        process(&fs, "/p/src/utils/index.ts", &mut graph);
        assert!(graph.contains("index"));
    }

    #[test]
    fn test_unreadable_file_contributes_nothing() {
        let fs = MockFs::new();
        let mut graph = DependencyGraph::new();
        process(&fs, "/p/src/ghost.ts", &mut graph);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_colliding_base_names_union_their_edges() {
        let fs = MockFs::with_files([
            ("/p/src/a/Widget.ts", "import { H } from './helpers';\n"),
            ("/p/src/b/Widget.tsx", "import { api } from './api';\n"),
        ]);
        let mut graph = DependencyGraph::new();
        process(&fs, "/p/src/a/Widget.ts", &mut graph);
        process(&fs, "/p/src/b/Widget.tsx", &mut graph);

        assert_eq!(graph.len(), 1);
        let deps = graph.dependencies_of("Widget").unwrap();
        assert_eq!(deps.iter().collect::<Vec<_>>(), vec!["api", "helpers"]);
    }
}

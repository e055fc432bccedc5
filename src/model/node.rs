use std::path::Path;

/// Derive the canonical node identity for a source file.
///
/// The path string is searched for the first occurrence of the source-root
/// marker; the remainder from that point is the relative path, falling back
/// to the path relative to the project root when the marker is absent. The
/// identity is the final component without its extension, so files with the
/// same base name in different directories collapse into one node.
pub fn node_id(path: &Path, project_root: &Path, source_root: &str) -> String {
    let path_str = path.to_string_lossy();
    let relative = match path_str.find(source_root) {
        Some(idx) => path_str[idx..].to_string(),
        None => path
            .strip_prefix(project_root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string(),
    };

    Path::new(&relative)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Presentation tag for a node, derived from its name. Drives diagram
/// coloring only; graph and layout semantics never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    App,
    Page,
    Context,
    Service,
    Type,
    Default,
}

impl FileType {
    pub fn classify(node: &str) -> Self {
        let name = node.to_lowercase();

        if matches!(
            name.as_str(),
            "app" | "app.tsx" | "app.ts" | "app.jsx" | "app.js"
        ) {
            FileType::App
        } else if name.contains("page") {
            FileType::Page
        } else if name.contains("context") {
            FileType::Context
        } else if name.contains("service") || name.contains("api") {
            FileType::Service
        } else if name.contains("type") || name.contains("interface") {
            FileType::Type
        } else {
            FileType::Default
        }
    }

    /// Background color used for the node's rectangle.
    pub fn color(&self) -> &'static str {
        match self {
            FileType::App => "#4CAF50",
            FileType::Page => "#2196F3",
            FileType::Context => "#FF9800",
            FileType::Service => "#9C27B0",
            FileType::Type => "#FF5722",
            FileType::Default => "#FFFFFF",
        }
    }
}

//! Library API for depsketch.
//!
//! The CLI commands print progress and return exit codes; these functions
//! return proper Result types for programmatic use.
//!
//! # Example
//!
//! ```no_run
//! use depsketch::{ScanOptions, scan};
//! use std::path::Path;
//!
//! let sketch = scan(Path::new("."), ScanOptions::default())?;
//! println!("Found {} modules", sketch.graph.len());
//! # Ok::<(), depsketch::DepsketchError>(())
//! ```

use crate::analysis;
use crate::config::{Config, ConfigError};
use crate::fs::default_fs;
use crate::layout::{self, Point};
use crate::model::DependencyGraph;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during depsketch operations.
#[derive(Debug, Error)]
pub enum DepsketchError {
    /// The project root could not be found or resolved.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Configuration file error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error during analysis or emission.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for the `scan` function.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Name of the source directory beneath the project root.
    pub source_root: String,

    /// Node anchored at the top of the layout.
    pub entry: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            source_root: "src".to_string(),
            entry: "App".to_string(),
        }
    }
}

/// A scanned project: the dependency graph plus the computed layout.
pub struct ProjectSketch {
    pub graph: DependencyGraph,
    pub positions: IndexMap<String, Point>,
}

/// Scan a project tree, build its dependency graph, and compute the
/// diagram layout.
pub fn scan(path: &Path, options: ScanOptions) -> Result<ProjectSketch, DepsketchError> {
    let resolved_path = path
        .canonicalize()
        .map_err(|_| DepsketchError::PathNotFound(path.to_path_buf()))?;

    let mut config = Config::load(&resolved_path).unwrap_or_default();
    config.scan.source_root = options.source_root;
    config.diagram.entry = options.entry;

    let graph = analysis::build_graph(&resolved_path, &config, default_fs());
    let positions = layout::compute_layout(graph.nodes(), &config.diagram.entry);

    Ok(ProjectSketch { graph, positions })
}

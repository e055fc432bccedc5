mod graph;
mod node;

pub use graph::DependencyGraph;
pub use node::{FileType, node_id};

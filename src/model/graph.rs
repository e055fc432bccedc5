use indexmap::IndexMap;
use petgraph::Direction;
use petgraph::graph::DiGraph;
use std::collections::{BTreeSet, HashMap};

/// Module-level dependency graph: node identity to the set of node
/// identities it depends on.
///
/// Keys keep insertion order (the file processing order), which the layout
/// relies on for determinism. Edge targets are not required to exist as
/// keys; dangling references are dropped by the emitter, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    modules: IndexMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, keeping its existing edges if already present.
    pub fn add_node(&mut self, node: impl Into<String>) {
        self.modules.entry(node.into()).or_default();
    }

    /// Add a dependency edge. Duplicate edges collapse; self-edges are
    /// permitted.
    pub fn add_edge(&mut self, from: &str, to: impl Into<String>) {
        self.modules
            .entry(from.to_string())
            .or_default()
            .insert(to.into());
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Number of graph nodes (processed files).
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Total number of dependency edges, dangling targets included.
    pub fn edge_count(&self) -> usize {
        self.modules.values().map(BTreeSet::len).sum()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.modules.contains_key(node)
    }

    /// Node identities in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn dependencies_of(&self, node: &str) -> Option<&BTreeSet<String>> {
        self.modules.get(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.modules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Fan-in per node over the edges whose endpoints both exist as keys,
    /// sorted by count descending, then by name for stable output.
    pub fn fan_in_counts(&self) -> Vec<(String, usize)> {
        let mut graph: DiGraph<&str, ()> = DiGraph::new();
        let mut indices = HashMap::new();

        for node in self.modules.keys() {
            indices.insert(node.as_str(), graph.add_node(node.as_str()));
        }

        for (from, deps) in &self.modules {
            for to in deps {
                if let (Some(&a), Some(&b)) =
                    (indices.get(from.as_str()), indices.get(to.as_str()))
                {
                    graph.update_edge(a, b, ());
                }
            }
        }

        let mut counts: Vec<(String, usize)> = graph
            .node_indices()
            .map(|idx| {
                let fan_in = graph.neighbors_directed(idx, Direction::Incoming).count();
                (graph[idx].to_string(), fan_in)
            })
            .collect();

        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}

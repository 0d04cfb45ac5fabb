//! Snippet dependency graph
//!
//! Derived from the store on demand, never persisted. Edges run from a
//! dependency to its dependent, so walking outgoing edges finds everything
//! a delete would cascade to.

use crate::snippet_name::SnippetName;
use crate::store::SnippetStore;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet, VecDeque};

/// A directed graph of snippet dependencies (declared and inferred)
#[derive(Debug)]
pub struct SnippetGraph {
    graph: DiGraph<SnippetName, ()>,
    node_map: HashMap<SnippetName, NodeIndex>,
}

impl SnippetGraph {
    /// Build the graph for every snippet in the store.
    ///
    /// Nodes are added in insertion order, so node indices double as the
    /// store's ordering for stable traversal. Dangling declared dependencies
    /// (left behind by a forced delete) have no node and no edge.
    pub fn from_store(store: &SnippetStore) -> Self {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();
        for snippet in store.snippets() {
            let idx = graph.add_node(snippet.name().clone());
            node_map.insert(snippet.name().clone(), idx);
        }

        let mut dag = Self { graph, node_map };
        for snippet in store.snippets() {
            for dep in store.direct_dependencies(snippet) {
                dag.add_dependency(snippet.name(), dep);
            }
        }
        dag
    }

    /// Add a dependency edge (`from` requires `to`)
    fn add_dependency(&mut self, from: &str, to: &str) {
        if let (Some(&from_idx), Some(&to_idx)) = (self.node_map.get(from), self.node_map.get(to)) {
            self.graph.update_edge(to_idx, from_idx, ());
        }
    }

    /// Direct dependents of a snippet, in insertion order
    pub fn dependents(&self, name: &str) -> Vec<SnippetName> {
        self.neighbors_of(name, Direction::Outgoing)
    }

    /// All transitive dependents, nearest first
    pub fn descendants(&self, name: &str) -> Vec<SnippetName> {
        self.traverse_bfs(name, Direction::Outgoing)
    }

    fn neighbors_of(&self, name: &str, direction: Direction) -> Vec<SnippetName> {
        let Some(&idx) = self.node_map.get(name) else {
            return Vec::new();
        };
        self.sorted_neighbors(idx, direction)
            .into_iter()
            .map(|n| self.graph[n].clone())
            .collect()
    }

    /// Neighbors ordered by node index; petgraph yields edges newest first.
    fn sorted_neighbors(&self, idx: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, direction)
            .map(|edge| match direction {
                Direction::Incoming => edge.source(),
                Direction::Outgoing => edge.target(),
            })
            .collect();
        neighbors.sort();
        neighbors.dedup();
        neighbors
    }

    /// BFS collecting every node reachable from `name` in `direction`
    fn traverse_bfs(&self, name: &str, direction: Direction) -> Vec<SnippetName> {
        let Some(&start) = self.node_map.get(name) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.sorted_neighbors(current, direction) {
                if visited.insert(neighbor) {
                    result.push(self.graph[neighbor].clone());
                    queue.push_back(neighbor);
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

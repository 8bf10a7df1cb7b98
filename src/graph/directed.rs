use crate::graph::traits::{Graph, Node, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed graph implementation using adjacency maps
///
/// The graph is built once and then only read. Every node that appears as an
/// edge target is registered as a node too, so every neighbor resolves.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Node,
    W: Weight,
{
    /// Nodes in the order they were first added
    nodes: Vec<N>,

    /// Outgoing edges for each node: node -> {target -> weight}
    outgoing_edges: HashMap<N, HashMap<N, W>>,
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Node,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> DirectedGraph<N, W>
where
    N: Node,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Builds a graph from an adjacency table such as
    /// `[("A", [("B", 3), ("C", 1)]), ("B", [])]`.
    ///
    /// Table keys keep their declared order; targets that are never keys
    /// follow them. Fails with [`Error::InvalidGraph`] on the first negative weight.
    pub fn from_adjacency<I, E>(table: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, W)>,
    {
        let table: Vec<(N, E)> = table.into_iter().collect();
        let mut graph = DirectedGraph::new();
        for (from, _) in &table {
            graph.add_node(from.clone());
        }
        for (from, edges) in table {
            for (to, weight) in edges {
                graph.add_edge(from.clone(), to, weight)?;
            }
        }
        Ok(graph)
    }

    /// Adds a node if not already present. Returns true if it was new.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.outgoing_edges.insert(node.clone(), HashMap::new());
        self.nodes.push(node);
        true
    }

    /// Adds a directed edge, registering both endpoints.
    /// An existing edge between the same nodes gets the new weight.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        if weight < W::zero() {
            return Err(Error::InvalidGraph(format!(
                "negative weight {:?} on edge {} -> {}",
                weight, from, to
            )));
        }

        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Inserts an edge whose weight is already known to be non-negative
    pub(crate) fn insert_edge(&mut self, from: N, to: N, weight: W) {
        self.add_node(from.clone());
        self.add_node(to.clone());
        if let Some(edges) = self.outgoing_edges.get_mut(&from) {
            edges.insert(to, weight);
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .flat_map(|edges| edges.values())
            .all(|weight| *weight >= W::zero())
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Node,
    W: Weight,
{
    fn neighbors(&self, node: &N) -> Result<&HashMap<N, W>> {
        self.outgoing_edges
            .get(node)
            .ok_or_else(|| Error::unknown_node(node))
    }

    fn nodes(&self) -> &[N] {
        &self.nodes
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn has_node(&self, node: &N) -> bool {
        self.outgoing_edges.contains_key(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn sample() -> DirectedGraph<String, u32> {
        DirectedGraph::from_adjacency(vec![
            ("A".to_string(), vec![("B".to_string(), 3), ("C".to_string(), 1)]),
            ("C".to_string(), vec![("B".to_string(), 1)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_targets_become_nodes() {
        let graph = sample();
        assert_eq!(graph.nodes(), &["A", "C", "B"]);
        assert!(graph.neighbors(&"B".to_string()).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_keys_keep_declared_order() {
        let graph = DirectedGraph::from_adjacency(vec![
            ("A".to_string(), vec![("C".to_string(), 1u32)]),
            ("B".to_string(), vec![]),
            ("C".to_string(), vec![]),
        ])
        .unwrap();
        assert_eq!(graph.nodes(), &["A", "B", "C"]);
    }

    #[test]
    fn test_neighbors_of_unknown_node() {
        let graph = sample();
        let err = graph.neighbors(&"Z".to_string()).unwrap_err();
        assert_eq!(err, Error::UnknownNode("Z".to_string()));
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = sample();
        graph.add_edge("A".to_string(), "B".to_string(), 7).unwrap();
        assert_eq!(graph.edge_weight(&"A".to_string(), &"B".to_string()), Some(7));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = DirectedGraph::from_adjacency(vec![(0usize, vec![(1usize, OrderedFloat(-2.5))])]);
        assert!(matches!(result, Err(Error::InvalidGraph(_))));
    }

    #[test]
    fn test_edges_listed_per_source() {
        let graph = sample();
        let edges = graph.edges();
        assert_eq!(
            edges,
            vec![
                ("A".to_string(), "B".to_string(), 3),
                ("A".to_string(), "C".to_string(), 1),
                ("C".to_string(), "B".to_string(), 1),
            ]
        );
        assert!(graph.validate_non_negative());
    }
}

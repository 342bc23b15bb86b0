/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Graph;

/// A mutable undirected simple [`Graph`] based on a vector of sorted adjacency
/// lists.
///
/// Nodes are the indices `0..n`: adding an edge or a node with a large index
/// implicitly adds all smaller nodes, which are isolated until edges are added
/// to them. Self-loops are discarded, and adding an edge twice has no effect.
///
/// By setting the feature `serde`, this struct can be serialized using
/// [serde](https://crates.io/crates/serde).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of edges in the graph.
    num_edges: usize,
    /// For each node, its sorted list of neighbors.
    adj: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            num_edges: 0,
            adj: vec![],
        }
    }

    /// Creates a new graph with `n` isolated nodes.
    pub fn empty(n: usize) -> Self {
        Self {
            num_edges: 0,
            adj: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds an isolated node to the graph and returns true if it is a new node.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.adj.len();
        self.adj.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an edge to the graph and returns true if it is a new edge.
    ///
    /// Self-loops are discarded (and false is returned).
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        let max = u.max(v);
        if max >= self.adj.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.adj.len(),
            );
        }
        if u == v {
            return false;
        }
        let Err(pos) = self.adj[u].binary_search(&v) else {
            return false;
        };
        self.adj[u].insert(pos, v);
        if let Err(pos) = self.adj[v].binary_search(&u) {
            self.adj[v].insert(pos, u);
        }
        self.num_edges += 1;
        true
    }

    /// Removes an edge from the graph and returns true if it was present.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> bool {
        let max = u.max(v);
        if max >= self.adj.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.adj.len(),
            );
        }
        let Ok(pos) = self.adj[u].binary_search(&v) else {
            return false;
        };
        self.adj[u].remove(pos);
        if let Ok(pos) = self.adj[v].binary_search(&u) {
            self.adj[v].remove(pos);
        }
        self.num_edges -= 1;
        true
    }

    /// Adds edges from an [`IntoIterator`], adding the nodes they mention if
    /// necessary.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) -> &mut Self {
        for (u, v) in edges {
            self.add_node(u.max(v));
            self.add_edge(u, v);
        }
        self
    }

    /// Creates a new graph from an [`IntoIterator`] of edges.
    ///
    /// The number of nodes is one plus the largest node mentioned.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_edges(edges);
        g
    }

    /// Returns the edges of the graph as pairs `(u, v)` with `u < v`, in
    /// lexicographical order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj.iter().enumerate().flat_map(|(u, adj)| {
            adj.iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// Shrinks the capacity of the adjacency lists to fit their content.
    pub fn shrink_to_fit(&mut self) {
        self.adj.shrink_to_fit();
        for adj in self.adj.iter_mut() {
            adj.shrink_to_fit();
        }
    }
}

impl Graph for VecGraph {
    #[inline(always)]
    fn node_bound(&self) -> usize {
        self.adj.len()
    }

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    #[inline(always)]
    fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline(always)]
    fn contains(&self, node: usize) -> bool {
        node < self.adj.len()
    }

    fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.adj.len()
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[node].iter().copied()
    }

    #[inline(always)]
    fn degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj
            .get(u)
            .is_some_and(|adj| adj.binary_search(&v).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric() {
        let mut g = VecGraph::empty(3);
        assert!(g.add_edge(2, 0));
        assert!(!g.add_edge(0, 2));
        assert!(!g.add_edge(1, 1));
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![2]);
        assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![0]);
        assert_eq!(g.num_edges(), 1);
        assert!(g.remove_edge(0, 2));
        assert!(!g.has_edge(2, 0));
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    #[should_panic]
    fn test_missing_node() {
        let mut g = VecGraph::empty(2);
        g.add_edge(0, 2);
    }
}

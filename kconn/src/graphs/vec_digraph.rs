/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Graph;

/// A mutable directed [`Graph`] based on a vector of sorted successor lists.
///
/// Connectivity algorithms reject directed graphs; this type exists so that
/// directed input can be represented and passed to them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecDiGraph {
    num_arcs: usize,
    succ: Vec<Vec<usize>>,
}

impl VecDiGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            num_arcs: 0,
            succ: vec![],
        }
    }

    /// Creates a new graph with `n` nodes and no arcs.
    pub fn empty(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds an isolated node to the graph and returns true if it is a new node.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.succ.len();
        self.succ.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an arc to the graph and returns true if it is a new arc.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn add_arc(&mut self, u: usize, v: usize) -> bool {
        let max = u.max(v);
        if max >= self.succ.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.succ.len(),
            );
        }
        match self.succ[u].binary_search(&v) {
            Ok(_) => false,
            Err(pos) => {
                self.succ[u].insert(pos, v);
                self.num_arcs += 1;
                true
            }
        }
    }

    /// Creates a new graph from an [`IntoIterator`] of arcs.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        for (u, v) in arcs {
            g.add_node(u.max(v));
            g.add_arc(u, v);
        }
        g
    }
}

impl Graph for VecDiGraph {
    fn is_directed(&self) -> bool {
        true
    }

    fn node_bound(&self) -> usize {
        self.succ.len()
    }

    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    fn num_edges(&self) -> usize {
        self.num_arcs
    }

    fn contains(&self, node: usize) -> bool {
        node < self.succ.len()
    }

    fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.succ.len()
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.succ[node].iter().copied()
    }

    fn degree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

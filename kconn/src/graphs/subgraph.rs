/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Graph;
use sux::bits::BitVec;

/// The subgraph of a graph induced by a subset of its nodes.
///
/// This is a read-only view: the graph is borrowed, and the node subset is
/// stored as a bit mask indexed by node identifier, so node identifiers are
/// the same as in the underlying graph. Subgraphs of a subgraph should be
/// built with [`restrict`](Subgraph::restrict), which returns a view over the
/// same underlying graph rather than a view of a view.
///
/// Since the view owns no adjacency data, building one costs a pass over the
/// node subset and a bit mask of [`node_bound`](Graph::node_bound) bits;
/// neighbor lists are filtered on the fly.
#[derive(Clone, Debug)]
pub struct Subgraph<'a, G: Graph> {
    graph: &'a G,
    mask: BitVec,
    num_nodes: usize,
}

impl<'a, G: Graph> Subgraph<'a, G> {
    /// Creates the subgraph of `graph` induced by `nodes`.
    ///
    /// Nodes that are not nodes of `graph` and repeated nodes are ignored.
    pub fn new(graph: &'a G, nodes: impl IntoIterator<Item = usize>) -> Self {
        let mut mask = BitVec::new(graph.node_bound());
        let mut num_nodes = 0;
        for node in nodes {
            if graph.contains(node) && !mask[node] {
                mask.set(node, true);
                num_nodes += 1;
            }
        }
        Self {
            graph,
            mask,
            num_nodes,
        }
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Returns the subgraph of the underlying graph induced by the nodes of
    /// `nodes` that belong to this subgraph.
    pub fn restrict(&self, nodes: impl IntoIterator<Item = usize>) -> Self {
        Self::new(
            self.graph,
            nodes.into_iter().filter(|&node| self.contains(node)),
        )
    }
}

impl<G: Graph> Graph for Subgraph<'_, G> {
    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn node_bound(&self) -> usize {
        self.graph.node_bound()
    }

    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline(always)]
    fn contains(&self, node: usize) -> bool {
        node < self.graph.node_bound() && self.mask[node]
    }

    fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.graph.nodes().filter(move |&node| self.mask[node])
    }

    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        debug_assert!(self.contains(node), "Node {node} is not in the subgraph");
        self.graph
            .neighbors(node)
            .filter(move |&succ| self.mask[succ])
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.contains(u) && self.contains(v) && self.graph.has_edge(u, v)
    }
}

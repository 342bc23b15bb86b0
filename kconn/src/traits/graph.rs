/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The basic trait to access graphs.

Nodes are identified by `usize` indices smaller than
[`node_bound`](Graph::node_bound), but not every index below the bound needs
to be a node: [induced subgraphs](crate::graphs::subgraph::Subgraph) keep the
identifiers of the graph they are extracted from, so node sets computed on a
subgraph can be used directly on the original graph, and auxiliary arrays can
be indexed by node identifier with no remapping.

For undirected graphs [`neighbors`](Graph::neighbors) returns the nodes
adjacent to a node, and adjacency is symmetric. For directed graphs it returns
the successors. The algorithms of this workspace are defined for undirected
graphs only and reject directed input.

*/

/// A graph with random access to neighbors.
pub trait Graph {
    /// Returns whether the graph is directed.
    fn is_directed(&self) -> bool {
        false
    }

    /// Returns an (exclusive) upper bound on node identifiers.
    fn node_bound(&self) -> usize;

    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns whether `node` is a node of the graph.
    fn contains(&self, node: usize) -> bool;

    /// Returns the nodes of the graph in increasing order.
    fn nodes(&self) -> impl Iterator<Item = usize> + '_;

    /// Returns the neighbors of a node (its successors, if the graph is
    /// directed) in increasing order.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `node` is not a node of the graph.
    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_;

    /// Returns the degree (outdegree, if the graph is directed) of a node.
    fn degree(&self, node: usize) -> usize {
        self.neighbors(node).count()
    }

    /// Returns whether `v` is a neighbor of `u`.
    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).any(|w| w == v)
    }

    /// Returns the number of edges (arcs, if the graph is directed).
    fn num_edges(&self) -> usize {
        let degrees = self.nodes().map(|node| self.degree(node)).sum::<usize>();
        if self.is_directed() {
            degrees
        } else {
            degrees / 2
        }
    }

    /// Returns whether every pair of distinct nodes is adjacent.
    ///
    /// Graphs with fewer than two nodes are complete.
    fn is_complete(&self) -> bool {
        let num_nodes = self.num_nodes();
        self.nodes().all(|node| self.degree(node) + 1 == num_nodes)
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    #[inline(always)]
    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    #[inline(always)]
    fn node_bound(&self) -> usize {
        (**self).node_bound()
    }

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn contains(&self, node: usize) -> bool {
        (**self).contains(node)
    }

    #[inline(always)]
    fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        (**self).nodes()
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        (**self).neighbors(node)
    }

    #[inline(always)]
    fn degree(&self, node: usize) -> usize {
        (**self).degree(node)
    }

    #[inline(always)]
    fn has_edge(&self, u: usize, v: usize) -> bool {
        (**self).has_edge(u, v)
    }
}

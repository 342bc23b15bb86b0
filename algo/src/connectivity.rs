/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Exact vertex connectivity.
//!
//! All functions reduce vertex connectivity to maximum flows on the
//! [node-split network](crate::flow) of the graph, computed by a
//! [`MaxFlow`] strategy chosen by the caller.

use itertools::Itertools;
use kconn::components::is_connected;
use kconn::traits::Graph;
use sux::bits::BitVec;

use crate::error::{check_terminals, ensure_undirected};
use crate::flow::{FlowNetwork, MaxFlow};
use crate::{InvalidInput, NodeSet, Result};

/// Returns the local vertex connectivity of two nodes, that is, the maximum
/// number of internally vertex-disjoint paths between them.
///
/// If the nodes are not adjacent, this is the minimum number of nodes whose
/// removal disconnects `target` from `source`. If they are adjacent, the edge
/// between them counts as one path: the result is one plus the local
/// connectivity of the two nodes in the graph without the edge.
///
/// # Errors
///
/// [`Error::NotImplementedForDirectedGraphs`](crate::Error::NotImplementedForDirectedGraphs)
/// if the graph is directed; [`InvalidInput`] if one of the nodes is not in
/// the graph or if they are the same node.
pub fn local_node_connectivity(
    graph: &impl Graph,
    source: usize,
    target: usize,
    flow: &impl MaxFlow,
) -> Result<usize> {
    ensure_undirected(graph)?;
    check_terminals(graph, source, target)?;

    let mut network = FlowNetwork::new(graph);
    let adjacent = graph.has_edge(source, target);
    if adjacent {
        network.remove_edge(source, target);
    }
    Ok(network.solve(flow, source, target, usize::MAX) + usize::from(adjacent))
}

/// Returns the vertex connectivity of a graph.
///
/// This is the minimum number of nodes whose removal disconnects the graph or
/// leaves a single node: it is zero for disconnected graphs and for graphs
/// with fewer than two nodes, and `n` − 1 for complete graphs with `n` nodes.
///
/// The computation follows Even's algorithm: given a node `v` of minimum
/// degree, a minimum node cut either does not contain `v`, and then it
/// separates `v` from a non-neighbor, or it contains `v`, and then it
/// separates two non-adjacent neighbors of `v`. Flow computations are cut off
/// at the best value found so far, starting from the degree of `v`.
///
/// # Errors
///
/// [`Error::NotImplementedForDirectedGraphs`](crate::Error::NotImplementedForDirectedGraphs)
/// if the graph is directed.
pub fn node_connectivity(graph: &impl Graph, flow: &impl MaxFlow) -> Result<usize> {
    ensure_undirected(graph)?;
    Ok(connectivity(graph, flow))
}

/// Returns a minimum set of nodes separating `target` from `source`.
///
/// The cut returned is the one closest to `source`.
///
/// # Errors
///
/// [`Error::NotImplementedForDirectedGraphs`](crate::Error::NotImplementedForDirectedGraphs)
/// if the graph is directed; [`InvalidInput`] if one of the nodes is not in
/// the graph, if they are the same node or if they are adjacent.
pub fn minimum_node_cut(
    graph: &impl Graph,
    source: usize,
    target: usize,
    flow: &impl MaxFlow,
) -> Result<NodeSet> {
    ensure_undirected(graph)?;
    check_terminals(graph, source, target)?;
    if graph.has_edge(source, target) {
        return Err(InvalidInput::AdjacentTerminals {
            u: source,
            v: target,
        }
        .into());
    }

    let mut network = FlowNetwork::new(graph);
    network.solve(flow, source, target, usize::MAX);
    Ok(network.source_side_cut(source).into_iter().collect())
}

/// Returns a minimum set of nodes whose removal disconnects the graph.
///
/// The cut of a disconnected graph is empty.
///
/// # Errors
///
/// [`Error::NotImplementedForDirectedGraphs`](crate::Error::NotImplementedForDirectedGraphs)
/// if the graph is directed; [`InvalidInput::NoNodeCut`] if the graph is
/// complete or has fewer than two nodes.
pub fn minimum_global_node_cut(graph: &impl Graph, flow: &impl MaxFlow) -> Result<NodeSet> {
    ensure_undirected(graph)?;
    if graph.num_nodes() < 2 || graph.is_complete() {
        return Err(InvalidInput::NoNodeCut.into());
    }
    if !is_connected(graph) {
        return Ok(NodeSet::new());
    }

    let (value, witness) = global_minimum(graph, flow);
    let cut: NodeSet = match witness {
        Witness::Neighborhood(node) => graph.neighbors(node).collect(),
        Witness::Pair(source, target) => {
            let mut network = FlowNetwork::new(graph);
            network.solve(flow, source, target, usize::MAX);
            network.source_side_cut(source).into_iter().collect()
        }
    };
    debug_assert_eq!(cut.len(), value);
    Ok(cut)
}

/// Computes the vertex connectivity of an undirected graph.
pub(crate) fn connectivity(graph: &impl Graph, flow: &impl MaxFlow) -> usize {
    let num_nodes = graph.num_nodes();
    if num_nodes < 2 || !is_connected(graph) {
        return 0;
    }
    if graph.is_complete() {
        return num_nodes - 1;
    }
    global_minimum(graph, flow).0
}

/// Where the minimum of Even's algorithm is attained.
enum Witness {
    /// The neighborhood of a node of minimum degree.
    Neighborhood(usize),
    /// A minimum cut between two nodes.
    Pair(usize, usize),
}

/// Runs Even's algorithm on a connected, non-complete undirected graph.
fn global_minimum(graph: &impl Graph, flow: &impl MaxFlow) -> (usize, Witness) {
    let (anchor, degree) = min_degree_node(graph).unwrap_or_default();
    let mut network = FlowNetwork::new(graph);
    let mut best = degree;
    let mut witness = Witness::Neighborhood(anchor);

    for (source, target) in terminal_pairs(graph, anchor) {
        let value = network.solve(flow, source, target, best);
        if value < best {
            best = value;
            witness = Witness::Pair(source, target);
        }
    }

    log::trace!(
        "Connectivity {} on {} nodes (anchor {}, degree {})",
        best,
        graph.num_nodes(),
        anchor,
        degree
    );
    (best, witness)
}

/// Returns the first node of minimum degree and its degree.
pub(crate) fn min_degree_node(graph: &impl Graph) -> Option<(usize, usize)> {
    graph
        .nodes()
        .map(|node| (node, graph.degree(node)))
        .min_by_key(|&(_, degree)| degree)
}

/// Returns the pairs of non-adjacent nodes that must be separated to find
/// every minimum node cut: `anchor` and each of its non-neighbors, and each
/// non-adjacent pair of neighbors of `anchor`.
pub(crate) fn terminal_pairs(graph: &impl Graph, anchor: usize) -> Vec<(usize, usize)> {
    let neighbors = graph.neighbors(anchor).collect::<Vec<_>>();
    let mut adjacent = BitVec::new(graph.node_bound());
    for &node in &neighbors {
        adjacent.set(node, true);
    }

    let mut pairs = graph
        .nodes()
        .filter(|&node| node != anchor && !adjacent[node])
        .map(|node| (anchor, node))
        .collect::<Vec<_>>();
    pairs.extend(
        neighbors
            .iter()
            .copied()
            .tuple_combinations()
            .filter(|&(u, v)| !graph.has_edge(u, v)),
    );
    pairs
}

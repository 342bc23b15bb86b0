/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Partitioning graphs along node cuts.

use kconn::components::connected_components;
use kconn::graphs::subgraph::Subgraph;
use kconn::traits::Graph;
use sux::bits::BitVec;

use crate::NodeSet;
use crate::consolidate::consolidate;

/// Returns the sides of a graph with respect to a node cut.
///
/// There is a side for each connected component of the graph after the
/// removal of `cut`, containing the nodes of the component and the nodes of
/// `cut`. Nodes of `cut` that are not in the graph are ignored. If no node is
/// left after the removal, the only side is the node set of the graph; a graph
/// with no nodes has no side.
///
/// # Examples
///
/// ```
/// use kconn::graphs::generators;
/// use kconn_algo::prelude::*;
///
/// let sides = partition(&generators::path(5), &NodeSet::from([2]));
/// assert_eq!(sides, vec![NodeSet::from([0, 1, 2]), NodeSet::from([2, 3, 4])]);
/// ```
pub fn partition(graph: &impl Graph, cut: &NodeSet) -> Vec<NodeSet> {
    let cut = cut
        .iter()
        .copied()
        .filter(|&node| graph.contains(node))
        .collect::<NodeSet>();
    let rest = Subgraph::new(graph, graph.nodes().filter(|node| !cut.contains(node)));
    if rest.num_nodes() == 0 {
        return if cut.is_empty() { vec![] } else { vec![cut] };
    }

    connected_components(&rest)
        .into_iter()
        .map(|component| {
            let mut side = NodeSet::from_iter(component);
            side.extend(cut.iter().copied());
            side
        })
        .collect()
}

/// Returns the regions of a graph with vertex connectivity `k` that may
/// contain more cohesive subgraphs, given its minimum node cuts.
///
/// All nodes of the cuts and all nodes of degree at most `k`, which cannot
/// belong to a (`k` + 1)-connected subgraph, are removed. Each connected
/// component of what remains, together with the cut nodes adjacent to it,
/// forms a region; regions containing all nodes of the graph are discarded,
/// and the remaining ones are [consolidated](consolidate) with threshold
/// `k` + 1.
pub fn partition_by_cuts(graph: &impl Graph, cuts: &[NodeSet], k: usize) -> Vec<NodeSet> {
    let mut in_cut = BitVec::new(graph.node_bound());
    let mut cut_nodes = vec![];
    for &node in cuts.iter().flatten() {
        if graph.contains(node) && !in_cut[node] {
            in_cut.set(node, true);
            cut_nodes.push(node);
        }
    }

    let kept = Subgraph::new(
        graph,
        graph
            .nodes()
            .filter(|&node| !in_cut[node] && graph.degree(node) > k),
    );

    let mut in_component = BitVec::new(graph.node_bound());
    let mut regions = vec![];
    for component in connected_components(&kept) {
        for &node in &component {
            in_component.set(node, true);
        }
        let mut region = NodeSet::from_iter(component.iter().copied());
        region.extend(
            cut_nodes
                .iter()
                .copied()
                .filter(|&node| graph.neighbors(node).any(|succ| in_component[succ])),
        );
        for &node in &component {
            in_component.set(node, false);
        }
        if region.len() < graph.num_nodes() {
            regions.push(region);
        }
    }

    consolidate(regions, k + 1)
}

/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Enumeration of all minimum node cuts.

Let `a` be a node of minimum degree of a connected, non-complete graph with
vertex connectivity `k`. A minimum node cut either avoids `a`, and then it is a
minimum cut between `a` and some non-neighbor of `a`, or it contains `a`, and
then two neighbors of `a` end up in different components, so it is a minimum
cut between two non-adjacent neighbors of `a`. All minimum cuts are thus found
by enumerating, for each such pair of terminals whose local connectivity is
`k`, all minimum cuts separating the pair.

For a single pair `s`, `t` a maximum flow on the [node-split
network](crate::flow) is decomposed into `k` internally disjoint paths, and
every minimum cut picks exactly one node on each path. The minimum cuts of the
network are the vertex sets containing `s` and not `t` that are closed under
residual reachability; for a node `u` on a path, its *closure* is the set of
vertices reachable from `s` or from the in-copy of `u`. The node `u` belongs to
some minimum cut if and only if its closure contains neither `t` nor the
out-copy of `u`, and a choice of one such node per path is a cut if and only if
no chosen node has its out-copy in the closure of another chosen node: in that
case the union of the closures is closed, and its boundary is exactly the
chosen nodes.

*/

use std::collections::HashSet;

use kconn::components::is_connected;
use kconn::traits::Graph;
use sux::bits::BitVec;

use crate::connectivity::{connectivity, min_degree_node, terminal_pairs};
use crate::error::ensure_undirected;
use crate::flow::{FlowNetwork, MaxFlow};
use crate::{InvalidInput, NodeSet, Result};

/// Returns all minimum node cuts of an undirected graph.
///
/// If `k` is `None`, the vertex connectivity of the graph is computed first;
/// otherwise, `k` must be the vertex connectivity of the graph. Cuts are
/// returned in discovery order, each exactly once, and all have `k` nodes.
/// Complete graphs and graphs with fewer than two nodes have no cut, and the
/// result is empty.
///
/// # Errors
///
/// [`Error::NotImplementedForDirectedGraphs`](crate::Error::NotImplementedForDirectedGraphs)
/// if the graph is directed; [`InvalidInput::Disconnected`] if the graph is
/// disconnected.
///
/// # Examples
///
/// ```
/// use kconn::graphs::generators;
/// use kconn_algo::prelude::*;
///
/// // The minimum cuts of a cycle are its pairs of non-adjacent nodes
/// let cuts = all_node_cuts(&generators::cycle(6), None, &Dinic).unwrap();
/// assert_eq!(cuts.len(), 9);
/// assert!(cuts.iter().all(|cut| cut.len() == 2));
/// ```
pub fn all_node_cuts(
    graph: &impl Graph,
    k: Option<usize>,
    flow: &impl MaxFlow,
) -> Result<Vec<NodeSet>> {
    ensure_undirected(graph)?;
    if graph.num_nodes() < 2 || graph.is_complete() {
        return Ok(vec![]);
    }
    if !is_connected(graph) {
        return Err(InvalidInput::Disconnected.into());
    }
    let k = k.unwrap_or_else(|| connectivity(graph, flow));
    Ok(minimum_cuts(graph, k, flow))
}

/// Enumerates the minimum node cuts of an undirected graph with vertex
/// connectivity `k`.
///
/// Returns no cut if the graph is disconnected, complete, or has fewer than
/// two nodes.
pub(crate) fn minimum_cuts(graph: &impl Graph, k: usize, flow: &impl MaxFlow) -> Vec<NodeSet> {
    if graph.num_nodes() < 2 || graph.is_complete() || !is_connected(graph) {
        return vec![];
    }
    let Some((anchor, _)) = min_degree_node(graph) else {
        return vec![];
    };

    let mut network = FlowNetwork::new(graph);
    let mut seen = HashSet::new();
    let mut cuts = vec![];
    for (source, target) in terminal_pairs(graph, anchor) {
        if network.solve(flow, source, target, k + 1) != k {
            continue;
        }
        for cut in pair_cuts(&network, source, target) {
            debug_assert_eq!(cut.len(), k, "Cut {cut:?} has not {k} nodes");
            if seen.insert(cut.clone()) {
                cuts.push(cut);
            }
        }
    }

    log::trace!(
        "Found {} minimum cuts of size {} on {} nodes",
        cuts.len(),
        k,
        graph.num_nodes()
    );
    cuts
}

/// A node on a flow path that belongs to some minimum cut.
struct Candidate {
    /// The dense index of the node.
    index: usize,
    /// The vertices reachable from the source or from the in-copy of the node.
    closure: BitVec,
}

/// Enumerates the minimum cuts separating two non-adjacent nodes, given a
/// maximum flow between them.
fn pair_cuts(network: &FlowNetwork, source: usize, target: usize) -> Vec<NodeSet> {
    let (Some(s), Some(t)) = (network.dense_index(source), network.dense_index(target)) else {
        return vec![];
    };
    let (s, t) = (network.out_vertex(s), network.in_vertex(t));
    let base = network.reachable([s]);

    let mut candidates = vec![];
    for path in network.flow_paths(s, t) {
        let on_path = path
            .into_iter()
            .filter_map(|index| {
                let mut closure = base.clone();
                network.extend_reachable(&mut closure, network.in_vertex(index));
                (!closure[t] && !closure[network.out_vertex(index)])
                    .then_some(Candidate { index, closure })
            })
            .collect::<Vec<_>>();
        debug_assert!(!on_path.is_empty());
        candidates.push(on_path);
    }

    let mut cuts = vec![];
    choose(network, &candidates, &mut vec![], &mut cuts);
    cuts
}

/// Extends a compatible choice of candidates with one candidate for each
/// remaining path, and collects the resulting cuts.
fn choose<'a>(
    network: &FlowNetwork,
    paths: &'a [Vec<Candidate>],
    chosen: &mut Vec<&'a Candidate>,
    cuts: &mut Vec<NodeSet>,
) {
    let Some((on_path, rest)) = paths.split_first() else {
        cuts.push(chosen.iter().map(|c| network.node(c.index)).collect());
        return;
    };
    for candidate in on_path {
        let compatible = chosen.iter().all(|other| {
            !other.closure[network.out_vertex(candidate.index)]
                && !candidate.closure[network.out_vertex(other.index)]
        });
        if compatible {
            chosen.push(candidate);
            choose(network, rest, chosen, cuts);
            chosen.pop();
        }
    }
}

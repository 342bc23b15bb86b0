/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The structural k-component decomposition.
//!
//! A *k-component* is a maximal set of nodes whose induced subgraph has
//! vertex connectivity at least k. The decomposition follows Moody and White:
//! connected components with more than one node are the 1-components,
//! biconnected components with more than two nodes are the 2-components, and
//! each biconnected component is then explored depth-first. The vertex
//! connectivity of each region is computed, the region is recorded as a
//! candidate if it is more cohesive than the region it was found in, and the
//! region is split along all its minimum node cuts into denser regions (see
//! [`partition_by_cuts`]). Finally, the candidates at each level are
//! consolidated, from the highest level down, into maximal sets.
//!
//! Candidates found along different branches may overlap: two k-connected
//! sets sharing at least k nodes have a k-connected union, so consolidation
//! with threshold k merges them into a larger k-connected set.
//!
//! # Examples
//!
//! ```
//! use dsi_progress_logger::no_logging;
//! use kconn::graphs::generators;
//! use kconn_algo::prelude::*;
//!
//! // Two copies of K5 joined by a path
//! let k5 = generators::complete(5);
//! let mut graph = generators::disjoint_union(&k5, &k5);
//! graph.add_edges([(4, 10), (10, 5)]);
//! let components = k_components(&graph, &Dinic, no_logging![])?;
//!
//! assert_eq!(components.max_k(), Some(4));
//! assert_eq!(components.components(4).len(), 2);
//! assert_eq!(components.components(1), &[NodeSet::from_iter(0..11)]);
//! assert_eq!(components.k_numbers()[&10], 1);
//! # Ok::<(), kconn_algo::Error>(())
//! ```

use std::collections::BTreeMap;

use dsi_progress_logger::{ConcurrentProgressLog, ProgressLog};
use kconn::components::{biconnected_components, connected_components};
use kconn::graphs::subgraph::Subgraph;
use kconn::traits::Graph;
use rayon::prelude::*;

use crate::NodeSet;
use crate::connectivity::connectivity;
use crate::consolidate::consolidate;
use crate::cuts::minimum_cuts;
use crate::error::ensure_undirected;
use crate::flow::MaxFlow;
use crate::partition::partition_by_cuts;
use crate::Result;

/// The k-components of a graph.
///
/// An instance of this structure maps each level k, from 1 to the
/// [maximum level](KComponents::max_k), to the k-components of the graph.
/// Every k-component has more than k nodes, no two k-components share k
/// nodes, and every k-component is contained in a (k − 1)-component. The
/// components of each level are sorted in lexicographic order.
///
/// The structure also stores the nodes of the graph, so that
/// [k-numbers](KComponents::k_numbers) can be assigned to nodes belonging to
/// no component.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KComponents {
    levels: BTreeMap<usize, Vec<NodeSet>>,
    nodes: Box<[usize]>,
}

impl KComponents {
    /// Returns the components, level by level.
    pub fn levels(&self) -> &BTreeMap<usize, Vec<NodeSet>> {
        &self.levels
    }

    /// Returns the k-components for a given k.
    ///
    /// The result is empty if k is zero or larger than the [maximum
    /// level](KComponents::max_k).
    pub fn components(&self, k: usize) -> &[NodeSet] {
        self.levels.get(&k).map_or(&[], |sets| sets.as_slice())
    }

    /// Returns the largest k for which there is a k-component, or `None` if
    /// the graph has no edge.
    pub fn max_k(&self) -> Option<usize> {
        self.levels.keys().next_back().copied()
    }

    /// Returns the nodes of the graph.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Returns an iterator over the levels and their components, in
    /// increasing order of level.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[NodeSet])> + '_ {
        self.levels.iter().map(|(&k, sets)| (k, sets.as_slice()))
    }

    /// Returns the k-number of each node of the graph.
    ///
    /// See [`k_numbers`].
    pub fn k_numbers(&self) -> BTreeMap<usize, usize> {
        k_numbers(self)
    }

    /// Builds the final result from the candidates of each level.
    ///
    /// Levels are processed from the highest down: the candidates at the
    /// highest level are consolidated with threshold equal to the level; a
    /// level with no candidates inherits the sets of the level above; and
    /// otherwise the candidates of the level, together with the sets of the
    /// level above containing a node not covered by the candidates, are
    /// consolidated. If a set of the level above is not contained in a set of
    /// the level, it is added to the candidates and the level is consolidated
    /// again.
    fn reconstruct(mut candidates: BTreeMap<usize, Vec<NodeSet>>, nodes: Box<[usize]>) -> Self {
        let mut levels = BTreeMap::new();
        let Some(max_k) = candidates.keys().next_back().copied() else {
            return Self { levels, nodes };
        };

        let mut above: Vec<NodeSet> = vec![];
        for k in (1..=max_k).rev() {
            let at_k = candidates.remove(&k).unwrap_or_default();
            let mut sets = if k == max_k {
                consolidate(at_k, k)
            } else if at_k.is_empty() {
                consolidate(above.iter().cloned(), k)
            } else {
                let covered = at_k.iter().flatten().copied().collect::<NodeSet>();
                let uncovered = above
                    .iter()
                    .filter(|set| set.iter().any(|node| !covered.contains(node)))
                    .cloned();
                consolidate(at_k.into_iter().chain(uncovered).collect::<Vec<_>>(), k)
            };

            let orphans = above
                .iter()
                .filter(|set| !sets.iter().any(|sup| set.is_subset(sup)))
                .cloned()
                .collect::<Vec<_>>();
            if !orphans.is_empty() {
                log::debug!("Level {}: adding {} sets of level {}", k, orphans.len(), k + 1);
                sets = consolidate(sets.into_iter().chain(orphans), k);
            }

            sets.sort();
            above = sets.clone();
            levels.insert(k, sets);
        }

        Self { levels, nodes }
    }
}

/// Returns the k-number of each node of a graph, given its k-components.
///
/// The k-number of a node is the largest k such that the node belongs to a
/// k-component; nodes belonging to no component (i.e., isolated nodes) have
/// k-number one.
pub fn k_numbers(k_components: &KComponents) -> BTreeMap<usize, usize> {
    let mut k_numbers = k_components
        .nodes
        .iter()
        .map(|&node| (node, 1))
        .collect::<BTreeMap<_, _>>();
    for (k, sets) in k_components.iter() {
        for &node in sets.iter().flatten() {
            let k_number = k_numbers.entry(node).or_insert(k);
            *k_number = (*k_number).max(k);
        }
    }
    k_numbers
}

/// Computes the k-components of an undirected graph.
///
/// Biconnected components are explored one at a time; `pl` is updated once
/// per biconnected component with more than two nodes.
///
/// # Errors
///
/// [`Error::NotImplementedForDirectedGraphs`](crate::Error::NotImplementedForDirectedGraphs)
/// if the graph is directed.
pub fn k_components(
    graph: &impl Graph,
    flow: &impl MaxFlow,
    pl: &mut impl ProgressLog,
) -> Result<KComponents> {
    ensure_undirected(graph)?;
    let (mut candidates, blocks) = base_candidates(graph);

    pl.item_name("block");
    pl.expected_updates(Some(blocks.len()));
    pl.start("Computing k-components...");

    for block in &blocks {
        for (k, set) in explore_block(graph, block, flow) {
            candidates.entry(k).or_default().push(set);
        }
        pl.update();
    }

    pl.done();
    Ok(finish(graph, candidates))
}

/// Computes in parallel the k-components of an undirected graph.
///
/// Biconnected components are explored in parallel using the current
/// [thread pool](rayon::ThreadPool); the result is the same as that of
/// [`k_components`]. `pl` is updated once per biconnected component with more
/// than two nodes.
///
/// # Errors
///
/// [`Error::NotImplementedForDirectedGraphs`](crate::Error::NotImplementedForDirectedGraphs)
/// if the graph is directed.
pub fn par_k_components(
    graph: &(impl Graph + Sync),
    flow: &(impl MaxFlow + Sync),
    pl: &mut impl ConcurrentProgressLog,
) -> Result<KComponents> {
    ensure_undirected(graph)?;
    let (mut candidates, blocks) = base_candidates(graph);

    pl.item_name("block");
    pl.expected_updates(Some(blocks.len()));
    pl.start("Computing k-components in parallel...");

    let found = blocks
        .par_iter()
        .map_with(pl.clone(), |pl, block| {
            let found = explore_block(graph, block, flow);
            pl.update();
            found
        })
        .collect::<Vec<_>>();

    pl.done();
    for (k, set) in found.into_iter().flatten() {
        candidates.entry(k).or_default().push(set);
    }
    Ok(finish(graph, candidates))
}

/// Returns the candidates of levels one and two, and the biconnected
/// components with more than two nodes.
fn base_candidates(graph: &impl Graph) -> (BTreeMap<usize, Vec<NodeSet>>, Vec<Vec<usize>>) {
    let mut candidates = BTreeMap::<usize, Vec<NodeSet>>::new();

    for component in connected_components(graph) {
        if component.len() > 1 {
            candidates
                .entry(1)
                .or_default()
                .push(NodeSet::from_iter(component));
        }
    }

    let blocks = biconnected_components(graph)
        .into_iter()
        .filter(|block| block.len() > 2)
        .collect::<Vec<_>>();
    for block in &blocks {
        candidates
            .entry(2)
            .or_default()
            .push(NodeSet::from_iter(block.iter().copied()));
    }

    log::info!(
        "{} nodes, {} connected components, {} biconnected components",
        graph.num_nodes(),
        candidates.get(&1).map_or(0, Vec::len),
        blocks.len()
    );
    (candidates, blocks)
}

fn finish(graph: &impl Graph, candidates: BTreeMap<usize, Vec<NodeSet>>) -> KComponents {
    let result = KComponents::reconstruct(candidates, graph.nodes().collect());
    log::info!(
        "Maximum connectivity level: {}",
        result.max_k().unwrap_or(0)
    );
    result
}

/// Explores a biconnected component depth-first and returns the candidates
/// found, with their connectivity.
///
/// Every region is a view over `graph` itself, so no views of views are
/// built.
fn explore_block<G: Graph>(graph: &G, block: &[usize], flow: &impl MaxFlow) -> Vec<(usize, NodeSet)> {
    let mut found = vec![];
    let block = Subgraph::new(graph, block.iter().copied());
    let k = connectivity(&block, flow);
    if k > 2 {
        found.push((k, block.nodes().collect()));
    }
    let cuts = minimum_cuts(&block, k, flow);
    log::debug!(
        "Biconnected component of {} nodes: connectivity {}, {} minimum cuts",
        block.num_nodes(),
        k,
        cuts.len()
    );

    // Pending regions, together with the connectivity of the region in which
    // they were found
    let mut stack = vec![(k, partition_by_cuts(&block, &cuts, k).into_iter())];
    while let Some((parent_k, regions)) = stack.last_mut() {
        let parent_k = *parent_k;
        let Some(region) = regions.next() else {
            stack.pop();
            continue;
        };

        let subgraph = Subgraph::new(graph, region.iter().copied());
        let this_k = connectivity(&subgraph, flow);
        if this_k > parent_k && this_k > 2 {
            found.push((this_k, region));
        }
        let cuts = minimum_cuts(&subgraph, this_k, flow);
        if !cuts.is_empty() {
            stack.push((this_k, partition_by_cuts(&subgraph, &cuts, this_k).into_iter()));
        }
    }

    found
}

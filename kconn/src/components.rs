/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Connected and biconnected components of undirected graphs.
//!
//! Components are returned as sorted vectors of node identifiers.

use std::collections::VecDeque;

use crate::traits::Graph;
use sux::bits::BitVec;

/// Returns the connected components of an undirected graph.
///
/// Components are listed in increasing order of their smallest node, and
/// isolated nodes form components of size one.
pub fn connected_components(graph: &impl Graph) -> Vec<Vec<usize>> {
    let mut seen = BitVec::new(graph.node_bound());
    let mut queue = VecDeque::new();
    let mut components = vec![];

    for root in graph.nodes() {
        if seen[root] {
            continue;
        }
        seen.set(root, true);
        queue.push_back(root);
        let mut component = vec![];
        while let Some(node) = queue.pop_front() {
            component.push(node);
            for succ in graph.neighbors(node) {
                if !seen[succ] {
                    seen.set(succ, true);
                    queue.push_back(succ);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    components
}

/// Returns whether an undirected graph is connected.
///
/// A graph with no nodes is not connected.
pub fn is_connected(graph: &impl Graph) -> bool {
    let Some(root) = graph.nodes().next() else {
        return false;
    };
    let mut seen = BitVec::new(graph.node_bound());
    let mut stack = vec![root];
    seen.set(root, true);
    let mut reached = 1;
    while let Some(node) = stack.pop() {
        for succ in graph.neighbors(node) {
            if !seen[succ] {
                seen.set(succ, true);
                reached += 1;
                stack.push(succ);
            }
        }
    }
    reached == graph.num_nodes()
}

/// Returns the biconnected components (blocks) of an undirected graph.
///
/// Every edge belongs to exactly one block; bridges give rise to blocks with
/// two nodes, and isolated nodes belong to no block. Blocks are listed in the
/// order in which a depth-first visit completes them.
///
/// The visit is iterative, so arbitrarily deep graphs can be processed without
/// exhausting the stack.
pub fn biconnected_components(graph: &impl Graph) -> Vec<Vec<usize>> {
    let n = graph.node_bound();
    // Discovery times; usize::MAX means unvisited
    let mut disc = vec![usize::MAX; n];
    let mut low = vec![usize::MAX; n];
    let mut time = 0;
    let mut blocks = vec![];
    // Nodes of the blocks that are not yet complete
    let mut node_stack = vec![];

    for root in graph.nodes() {
        if disc[root] != usize::MAX {
            continue;
        }
        disc[root] = time;
        low[root] = time;
        time += 1;
        node_stack.push(root);
        let mut stack = vec![(root, usize::MAX, graph.neighbors(root))];

        while let Some(top) = stack.last_mut() {
            let (node, parent) = (top.0, top.1);
            match top.2.next() {
                Some(succ) if succ == parent => {}
                Some(succ) => {
                    if disc[succ] == usize::MAX {
                        disc[succ] = time;
                        low[succ] = time;
                        time += 1;
                        node_stack.push(succ);
                        stack.push((succ, node, graph.neighbors(succ)));
                    } else {
                        low[node] = low[node].min(disc[succ]);
                    }
                }
                None => {
                    stack.pop();
                    if parent == usize::MAX {
                        continue;
                    }
                    low[parent] = low[parent].min(low[node]);
                    if low[node] >= disc[parent] {
                        // parent separates the subtree of node: emit a block
                        let mut block = vec![parent];
                        while let Some(member) = node_stack.pop() {
                            block.push(member);
                            if member == node {
                                break;
                            }
                        }
                        block.sort_unstable();
                        blocks.push(block);
                    }
                }
            }
        }

        // Only the root is left
        node_stack.clear();
    }

    log::debug!(
        "{} biconnected components on {} nodes",
        blocks.len(),
        graph.num_nodes()
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::vec_graph::VecGraph;

    #[test]
    fn test_bowtie() {
        // Two triangles sharing node 2, plus a pendant edge and an isolated node
        let mut g = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2), (4, 5)]);
        g.add_node(6);
        let mut blocks = biconnected_components(&g);
        blocks.sort();
        assert_eq!(blocks, vec![vec![0, 1, 2], vec![2, 3, 4], vec![4, 5]]);
        assert_eq!(
            connected_components(&g),
            vec![vec![0, 1, 2, 3, 4, 5], vec![6]]
        );
        assert!(!is_connected(&g));
    }
}

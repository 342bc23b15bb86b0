/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::VecDeque;

use super::{FlowNetwork, MaxFlow};

/// Dinic's maximum-flow strategy.
///
/// Each phase computes the level graph of the residual network with a
/// breadth-first visit, and then a blocking flow on the level graph with
/// iterative depth-first visits that keep a current-arc pointer per vertex.
/// On unit-capacity vertex networks the number of phases is O(√*n*).
#[derive(Debug, Clone, Copy, Default)]
pub struct Dinic;

impl MaxFlow for Dinic {
    fn max_flow(
        &self,
        network: &mut FlowNetwork,
        source: usize,
        sink: usize,
        cutoff: usize,
    ) -> usize {
        let num_vertices = network.num_vertices();
        let mut level = vec![usize::MAX; num_vertices];
        let mut current = vec![0; num_vertices];
        let mut queue = VecDeque::new();
        // The arcs of the path being explored
        let mut path = vec![];
        let mut value = 0;

        while value < cutoff {
            level.fill(usize::MAX);
            level[source] = 0;
            queue.push_back(source);
            while let Some(v) = queue.pop_front() {
                for arc in network.arcs(v) {
                    let w = network.head[arc];
                    if network.residual[arc] > 0 && level[w] == usize::MAX {
                        level[w] = level[v] + 1;
                        queue.push_back(w);
                    }
                }
            }
            if level[sink] == usize::MAX {
                break;
            }

            for (v, current) in current.iter_mut().enumerate() {
                *current = network.offsets[v];
            }

            // Blocking flow
            loop {
                path.clear();
                let mut v = source;
                while v != sink {
                    let end = network.offsets[v + 1];
                    while current[v] < end {
                        let arc = current[v];
                        if network.residual[arc] > 0
                            && level[network.head[arc]] == level[v] + 1
                        {
                            break;
                        }
                        current[v] += 1;
                    }
                    if current[v] < end {
                        let arc = current[v];
                        path.push(arc);
                        v = network.head[arc];
                    } else {
                        // Dead end: prune the vertex and retreat
                        level[v] = usize::MAX;
                        let Some(arc) = path.pop() else {
                            break;
                        };
                        v = network.tail(arc);
                        current[v] += 1;
                    }
                }
                if v != sink {
                    break;
                }

                let bottleneck = path
                    .iter()
                    .map(|&arc| network.residual[arc])
                    .min()
                    .unwrap_or(0)
                    .min(cutoff - value);
                for &arc in &path {
                    network.push(arc, bottleneck);
                }
                value += bottleneck;
                if value >= cutoff {
                    return value;
                }
            }
        }

        value
    }
}

/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::VecDeque;

use super::{FlowNetwork, MaxFlow};

/// The Edmonds–Karp maximum-flow strategy.
///
/// Augments along shortest residual paths, found by breadth-first visits.
/// On the auxiliary network of a graph with `n` nodes and `m` edges every
/// augmentation adds one unit of flow and costs O(*n* + *m*).
#[derive(Debug, Clone, Copy, Default)]
pub struct EdmondsKarp;

impl MaxFlow for EdmondsKarp {
    fn max_flow(
        &self,
        network: &mut FlowNetwork,
        source: usize,
        sink: usize,
        cutoff: usize,
    ) -> usize {
        let num_vertices = network.num_vertices();
        // The arc through which each vertex was reached, or usize::MAX
        let mut pred = vec![usize::MAX; num_vertices];
        let mut queue = VecDeque::new();
        let mut value = 0;

        while value < cutoff {
            pred.fill(usize::MAX);
            queue.clear();
            queue.push_back(source);

            'visit: while let Some(v) = queue.pop_front() {
                for arc in network.arcs(v) {
                    let w = network.head[arc];
                    if network.residual[arc] > 0 && w != source && pred[w] == usize::MAX {
                        pred[w] = arc;
                        if w == sink {
                            break 'visit;
                        }
                        queue.push_back(w);
                    }
                }
            }

            if pred[sink] == usize::MAX {
                break;
            }

            let mut bottleneck = cutoff - value;
            let mut v = sink;
            while v != source {
                let arc = pred[v];
                bottleneck = bottleneck.min(network.residual[arc]);
                v = network.tail(arc);
            }

            let mut v = sink;
            while v != source {
                let arc = pred[v];
                network.push(arc, bottleneck);
                v = network.tail(arc);
            }
            value += bottleneck;
        }

        value
    }
}

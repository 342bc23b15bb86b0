/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::graphs::vec_graph::VecGraph;

/// Provides an implementation of undirected Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model G(n, p) is a simple model for generating
/// random graphs. It is parameterized by the number of nodes `n` and the
/// probability `p` of an edge between any two nodes. Loops are never
/// included.
///
/// The time required to generate the graph is quadratic in `n`. The same seed
/// always generates the same graph.
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an edge between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Returns the edges `(u, v)`, `u < v`, of the graph in lexicographical
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (n, p) = (self.n, self.p);
        (0..n)
            .flat_map(move |u| (u + 1..n).map(move |v| (u, v)))
            .filter(move |_| rng.random_bool(p))
    }

    /// Materializes the graph.
    pub fn graph(&self) -> VecGraph {
        let mut g = VecGraph::empty(self.n);
        for (u, v) in self.edges() {
            g.add_edge(u, v);
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Graph;

    #[test]
    fn test_deterministic() {
        let g = ErdosRenyi::new(50, 0.1, 0).graph();
        assert_eq!(g, ErdosRenyi::new(50, 0.1, 0).graph());
        assert_eq!(g.num_nodes(), 50);
        assert_eq!(ErdosRenyi::new(10, 1.0, 0).graph().num_edges(), 45);
        assert_eq!(ErdosRenyi::new(10, 0.0, 0).graph().num_edges(), 0);
    }
}

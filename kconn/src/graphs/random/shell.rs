/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::graphs::vec_graph::VecGraph;

/// Provides an implementation of undirected random shell graphs.
///
/// A shell graph is a sequence of shells, each described by a triple
/// `(n, m, d)`: the shell has `n` nodes and `m` edges, of which a fraction `d`
/// joins two nodes of the shell, placed uniformly at random as in the G(n, m)
/// model, and the rest joins a node of the shell to a node of the next shell,
/// both chosen uniformly at random. The edges towards the next shell of the
/// last shell are not generated.
///
/// Nodes are numbered consecutively, shell by shell. The same seed always
/// generates the same graph.
#[derive(Debug, Clone)]
pub struct RandomShell {
    shells: Vec<(usize, usize, f64)>,
    seed: u64,
}

impl RandomShell {
    /// Creates a new random shell graph, given the triples `(n, m, d)`
    /// describing its shells and a seed for the [pseudorandom number
    /// generator](SmallRng).
    ///
    /// # Panics
    ///
    /// This method will panic if some `d` is not in [0..1], if the edges
    /// inside a shell do not fit in the shell, or if the edges towards the
    /// next shell do not fit between the two shells.
    pub fn new(shells: impl IntoIterator<Item = (usize, usize, f64)>, seed: u64) -> Self {
        let shells = shells.into_iter().collect::<Vec<_>>();
        for (i, &(n, m, d)) in shells.iter().enumerate() {
            assert!((0.0..=1.0).contains(&d), "d must be in [0..1]");
            let intra = (m as f64 * d) as usize;
            assert!(
                intra <= n * n.saturating_sub(1) / 2,
                "Shell {i} cannot contain {intra} edges"
            );
            if let Some(&(next_n, _, _)) = shells.get(i + 1) {
                assert!(
                    m - intra <= n * next_n,
                    "Shells {} and {} cannot be joined by {} edges",
                    i,
                    i + 1,
                    m - intra
                );
            }
        }
        Self { shells, seed }
    }

    /// Materializes the graph.
    pub fn graph(&self) -> VecGraph {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let num_nodes = self.shells.iter().map(|&(n, _, _)| n).sum();
        let mut g = VecGraph::empty(num_nodes);

        // First node of each shell
        let mut first = 0;
        let mut ranges = vec![];
        for &(n, m, d) in &self.shells {
            let intra = (m as f64 * d) as usize;
            let mut added = 0;
            while added < intra {
                let u = first + rng.random_range(0..n);
                let v = first + rng.random_range(0..n);
                if g.add_edge(u, v) {
                    added += 1;
                }
            }
            ranges.push((first..first + n, m - intra));
            first += n;
        }

        for pair in ranges.windows(2) {
            let ((shell, inter), (next, _)) = (&pair[0], &pair[1]);
            let mut added = 0;
            while added < *inter {
                let u = rng.random_range(shell.clone());
                let v = rng.random_range(next.clone());
                if g.add_edge(u, v) {
                    added += 1;
                }
            }
        }
        g
    }
}

/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::graphs::vec_graph::VecGraph;

/// Provides an implementation of the configuration model for undirected
/// graphs with a given degree sequence.
///
/// Each node `v` receives `degrees[v]` half-edges, which are matched
/// uniformly at random. Loops and repeated edges are discarded, so the
/// degrees of the resulting simple graph are at most the requested ones.
///
/// The same seed always generates the same graph.
#[derive(Debug, Clone)]
pub struct ConfigurationModel {
    degrees: Vec<usize>,
    seed: u64,
}

impl ConfigurationModel {
    /// Creates a new configuration model, given a degree sequence and a seed
    /// for the [pseudorandom number generator](SmallRng).
    ///
    /// # Panics
    ///
    /// This method will panic if the sum of the degrees is odd.
    pub fn new(degrees: impl IntoIterator<Item = usize>, seed: u64) -> Self {
        let degrees = degrees.into_iter().collect::<Vec<_>>();
        assert!(
            degrees.iter().sum::<usize>() % 2 == 0,
            "The sum of the degrees must be even"
        );
        Self { degrees, seed }
    }

    /// Creates a configuration model whose degree sequence is that of a
    /// uniformly random labeled tree on `n` nodes, drawn through its Prüfer
    /// sequence.
    pub fn random_tree(n: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut degrees = vec![1; n];
        if n < 2 {
            degrees.fill(0);
        }
        for _ in 0..n.saturating_sub(2) {
            degrees[rng.random_range(0..n)] += 1;
        }
        Self::new(degrees, seed)
    }

    /// Returns the degree sequence.
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Materializes the graph.
    pub fn graph(&self) -> VecGraph {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut stubs = self
            .degrees
            .iter()
            .enumerate()
            .flat_map(|(node, &degree)| std::iter::repeat_n(node, degree))
            .collect::<Vec<_>>();
        stubs.shuffle(&mut rng);

        let mut g = VecGraph::empty(self.degrees.len());
        for pair in stubs.chunks_exact(2) {
            g.add_edge(pair[0], pair[1]);
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Graph;

    #[test]
    fn test_degrees() {
        let model = ConfigurationModel::random_tree(100, 3);
        assert_eq!(model.degrees().iter().sum::<usize>(), 2 * 99);
        let g = model.graph();
        assert_eq!(g, model.graph());
        assert_eq!(g.num_nodes(), 100);
        assert!(g.num_edges() <= 99);
        assert!(g.nodes().all(|node| g.degree(node) <= model.degrees()[node]));

        let regular = ConfigurationModel::new([2; 6], 0).graph();
        assert!(regular.nodes().all(|node| regular.degree(node) <= 2));
    }
}

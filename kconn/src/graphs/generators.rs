/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Generators for classical graphs.
//!
//! All generators return a [`VecGraph`] whose nodes are `0..n`.

use crate::graphs::vec_graph::VecGraph;
use crate::traits::Graph;

/// Returns the complete graph on `n` nodes.
pub fn complete(n: usize) -> VecGraph {
    let mut g = VecGraph::empty(n);
    for u in 0..n {
        for v in u + 1..n {
            g.add_edge(u, v);
        }
    }
    g
}

/// Returns the cycle on `n` nodes.
///
/// For `n` < 3 the result is a path.
pub fn cycle(n: usize) -> VecGraph {
    let mut g = path(n);
    if n > 2 {
        g.add_edge(n - 1, 0);
    }
    g
}

/// Returns the path on `n` nodes.
pub fn path(n: usize) -> VecGraph {
    let mut g = VecGraph::empty(n);
    for u in 1..n {
        g.add_edge(u - 1, u);
    }
    g
}

/// Returns the two-dimensional grid with `rows` rows and `cols` columns.
///
/// The node in row `i` and column `j` is `i * cols + j`.
pub fn grid_2d(rows: usize, cols: usize) -> VecGraph {
    let mut g = VecGraph::empty(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            if i + 1 < rows {
                g.add_edge(i * cols + j, (i + 1) * cols + j);
            }
            if j + 1 < cols {
                g.add_edge(i * cols + j, i * cols + j + 1);
            }
        }
    }
    g
}

/// Returns the Petersen graph.
///
/// Nodes `0..5` form the outer cycle, nodes `5..10` the inner pentagram, and
/// node `i` is adjacent to node `i + 5`.
pub fn petersen() -> VecGraph {
    let mut g = VecGraph::empty(10);
    for i in 0..5 {
        g.add_edge(i, (i + 1) % 5);
        g.add_edge(i, i + 5);
        g.add_edge(i + 5, (i + 2) % 5 + 5);
    }
    g
}

#[rustfmt::skip]
const KARATE_CLUB: [(usize, usize); 78] = [
    (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8),
    (0, 10), (0, 11), (0, 12), (0, 13), (0, 17), (0, 19), (0, 21), (0, 31),
    (1, 2), (1, 3), (1, 7), (1, 13), (1, 17), (1, 19), (1, 21), (1, 30),
    (2, 3), (2, 7), (2, 8), (2, 9), (2, 13), (2, 27), (2, 28), (2, 32),
    (3, 7), (3, 12), (3, 13),
    (4, 6), (4, 10),
    (5, 6), (5, 10), (5, 16),
    (6, 16),
    (8, 30), (8, 32), (8, 33),
    (9, 33),
    (13, 33),
    (14, 32), (14, 33),
    (15, 32), (15, 33),
    (18, 32), (18, 33),
    (19, 33),
    (20, 32), (20, 33),
    (22, 32), (22, 33),
    (23, 25), (23, 27), (23, 29), (23, 32), (23, 33),
    (24, 25), (24, 27), (24, 31),
    (25, 31),
    (26, 29), (26, 33),
    (27, 33),
    (28, 31), (28, 33),
    (29, 32), (29, 33),
    (30, 32), (30, 33),
    (31, 32), (31, 33),
    (32, 33),
];

/// Returns Zachary's karate club network (34 nodes, 78 edges).
pub fn karate_club() -> VecGraph {
    let mut g = VecGraph::empty(34);
    for (u, v) in KARATE_CLUB {
        g.add_edge(u, v);
    }
    g
}

/// The labels of the nodes of [`davis_southern_women`]: the eighteen women,
/// followed by the fourteen events.
pub const DAVIS_SOUTHERN_WOMEN_LABELS: [&str; 32] = [
    "Evelyn Jefferson",
    "Laura Mandeville",
    "Theresa Anderson",
    "Brenda Rogers",
    "Charlotte McDowd",
    "Frances Anderson",
    "Eleanor Nye",
    "Pearl Oglethorpe",
    "Ruth DeSand",
    "Verne Sanderson",
    "Myra Liddel",
    "Katherina Rogers",
    "Sylvia Avondale",
    "Nora Fayette",
    "Helen Lloyd",
    "Dorothy Murchison",
    "Olivia Carleton",
    "Flora Price",
    "E1",
    "E2",
    "E3",
    "E4",
    "E5",
    "E6",
    "E7",
    "E8",
    "E9",
    "E10",
    "E11",
    "E12",
    "E13",
    "E14",
];

/// The events attended by each woman, numbered from one.
#[rustfmt::skip]
const DAVIS_ATTENDANCE: [&[usize]; 18] = [
    &[1, 2, 3, 4, 5, 6, 8, 9],
    &[1, 2, 3, 5, 6, 7, 8],
    &[2, 3, 4, 5, 6, 7, 8, 9],
    &[1, 3, 4, 5, 6, 7, 8],
    &[3, 4, 5, 7],
    &[3, 5, 6, 8],
    &[5, 6, 7, 8],
    &[6, 8, 9],
    &[5, 7, 8, 9],
    &[7, 8, 9, 12],
    &[8, 9, 10, 12],
    &[8, 9, 10, 12, 13, 14],
    &[7, 8, 9, 10, 12, 13, 14],
    &[6, 7, 9, 10, 11, 12, 13, 14],
    &[7, 8, 10, 11, 12],
    &[8, 9],
    &[9, 11],
    &[9, 11],
];

/// Returns the Davis Southern Women network (32 nodes, 89 edges).
///
/// The graph is bipartite: nodes `0..18` are women, nodes `18..32` are the
/// social events they attended, and each edge joins a woman to an event. The
/// labels of the nodes are [`DAVIS_SOUTHERN_WOMEN_LABELS`].
pub fn davis_southern_women() -> VecGraph {
    let mut g = VecGraph::empty(DAVIS_SOUTHERN_WOMEN_LABELS.len());
    for (woman, events) in DAVIS_ATTENDANCE.iter().enumerate() {
        for &event in events.iter() {
            g.add_edge(woman, DAVIS_ATTENDANCE.len() + event - 1);
        }
    }
    g
}

/// Returns the disjoint union of two graphs.
///
/// The nodes of `g0` are renumbered `0..g0.num_nodes()` in increasing order,
/// and the nodes of `g1` follow them, again in increasing order.
pub fn disjoint_union(g0: &impl Graph, g1: &impl Graph) -> VecGraph {
    let mut g = VecGraph::empty(g0.num_nodes() + g1.num_nodes());
    let offset = copy_renumbered(&mut g, g0, 0);
    copy_renumbered(&mut g, g1, offset);
    g
}

/// Copies the edges of `src` into `dst`, renumbering the nodes of `src`
/// densely from `offset`, and returns the first unused identifier.
fn copy_renumbered(dst: &mut VecGraph, src: &impl Graph, offset: usize) -> usize {
    let mut index = vec![usize::MAX; src.node_bound()];
    for (i, node) in src.nodes().enumerate() {
        index[node] = offset + i;
    }
    for node in src.nodes() {
        for succ in src.neighbors(node) {
            dst.add_edge(index[node], index[succ]);
        }
    }
    offset + src.num_nodes()
}

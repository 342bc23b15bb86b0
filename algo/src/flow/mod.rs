/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Node-split flow networks and maximum-flow strategies.

Vertex connectivity between two nodes of an undirected graph is reduced to a
maximum flow on an auxiliary directed network: every node `v` is split into an
*in-copy* and an *out-copy* joined by an arc of unit capacity, and every edge
`{u, v}` becomes the two arcs from the out-copy of `u` to the in-copy of `v`
and from the out-copy of `v` to the in-copy of `u`, with a capacity larger than
any possible flow value. The value of a maximum flow from the out-copy of `s`
to the in-copy of `t` is the minimum number of nodes separating `s` from `t`,
and the saturated unit arcs crossing a minimum cut of the network are a minimum
node cut.

The network is built once for a graph by [`FlowNetwork::new`], and can be
reused for any number of flow computations between different pairs of nodes.
Maximum flows are computed by a [`MaxFlow`] strategy:

- [`EdmondsKarp`] augments along shortest paths found by breadth-first visits;
- [`Dinic`] computes blocking flows on level graphs.

*/

use std::collections::VecDeque;
use std::ops::Range;

use kconn::traits::Graph;
use sux::bits::BitVec;

mod dinic;
pub use dinic::Dinic;

mod edmonds_karp;
pub use edmonds_karp::EdmondsKarp;

/// A maximum-flow strategy on a [`FlowNetwork`].
pub trait MaxFlow {
    /// Augments the current flow of `network` from vertex `source` to vertex
    /// `sink` until it is maximum or its value reaches `cutoff`, and returns
    /// the value of the flow added.
    ///
    /// The returned value is never larger than `cutoff`; use `usize::MAX` to
    /// compute a maximum flow. Vertices are vertices of the auxiliary network
    /// (see [`FlowNetwork::in_vertex`] and [`FlowNetwork::out_vertex`]).
    fn max_flow(&self, network: &mut FlowNetwork, source: usize, sink: usize, cutoff: usize)
    -> usize;
}

impl<F: MaxFlow + ?Sized> MaxFlow for &F {
    fn max_flow(
        &self,
        network: &mut FlowNetwork,
        source: usize,
        sink: usize,
        cutoff: usize,
    ) -> usize {
        (**self).max_flow(network, source, sink, cutoff)
    }
}

/// The node-split auxiliary network of an undirected graph, with its current
/// residual capacities.
///
/// Nodes of the graph are numbered densely in increasing order; the node with
/// dense index `i` has in-copy `2i` and out-copy `2i + 1`. Arcs are stored in
/// compressed sparse row form, and each arc is paired with its reverse arc,
/// whose capacity is zero.
#[derive(Clone, Debug)]
pub struct FlowNetwork {
    /// The nodes of the graph, by dense index.
    nodes: Box<[usize]>,
    /// The dense index of each node, or `usize::MAX`.
    index: Box<[usize]>,
    /// The arcs leaving vertex `v` are `offsets[v]..offsets[v + 1]`.
    offsets: Box<[usize]>,
    head: Box<[usize]>,
    rev: Box<[usize]>,
    capacity: Box<[usize]>,
    residual: Box<[usize]>,
}

impl FlowNetwork {
    /// Builds the auxiliary network of an undirected graph.
    ///
    /// The network is returned with zero flow.
    pub fn new(graph: &impl Graph) -> Self {
        let nodes: Box<[usize]> = graph.nodes().collect();
        let n = nodes.len();
        let mut index = vec![usize::MAX; graph.node_bound()].into_boxed_slice();
        for (i, &node) in nodes.iter().enumerate() {
            index[node] = i;
        }

        // Each copy has one arc (or reverse arc) per neighbor, plus the unit
        // arc between the copies
        let mut offsets = Vec::with_capacity(2 * n + 1);
        offsets.push(0);
        for &node in nodes.iter() {
            let arcs = graph.degree(node) + 1;
            offsets.push(offsets[offsets.len() - 1] + arcs);
            offsets.push(offsets[offsets.len() - 1] + arcs);
        }
        let num_arcs = offsets[2 * n];

        let mut head = vec![0; num_arcs].into_boxed_slice();
        let mut rev = vec![0; num_arcs].into_boxed_slice();
        let mut capacity = vec![0; num_arcs].into_boxed_slice();
        let mut next = offsets[..2 * n].to_vec();
        let mut link = |u: usize, v: usize, cap: usize| {
            let (a, b) = (next[u], next[v]);
            next[u] += 1;
            next[v] += 1;
            head[a] = v;
            head[b] = u;
            rev[a] = b;
            rev[b] = a;
            capacity[a] = cap;
        };

        let infinity = n + 1;
        for (i, &node) in nodes.iter().enumerate() {
            link(2 * i, 2 * i + 1, 1);
            for succ in graph.neighbors(node) {
                link(2 * i + 1, 2 * index[succ], infinity);
            }
        }

        let residual = capacity.clone();
        Self {
            nodes,
            index,
            offsets: offsets.into_boxed_slice(),
            head,
            rev,
            capacity,
            residual,
        }
    }

    /// Returns the number of nodes of the graph.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of vertices of the network (twice the number of
    /// nodes of the graph).
    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        2 * self.nodes.len()
    }

    /// Returns the dense index of a node, if it is a node of the graph.
    #[inline(always)]
    pub fn dense_index(&self, node: usize) -> Option<usize> {
        self.index.get(node).copied().filter(|&i| i != usize::MAX)
    }

    /// Returns the node with a given dense index.
    #[inline(always)]
    pub fn node(&self, i: usize) -> usize {
        self.nodes[i]
    }

    /// Returns the in-copy of the node with dense index `i`.
    #[inline(always)]
    pub fn in_vertex(&self, i: usize) -> usize {
        2 * i
    }

    /// Returns the out-copy of the node with dense index `i`.
    #[inline(always)]
    pub fn out_vertex(&self, i: usize) -> usize {
        2 * i + 1
    }

    #[inline(always)]
    fn arcs(&self, v: usize) -> Range<usize> {
        self.offsets[v]..self.offsets[v + 1]
    }

    #[inline(always)]
    fn tail(&self, arc: usize) -> usize {
        self.head[self.rev[arc]]
    }

    /// Pushes `amount` units of flow along an arc.
    #[inline(always)]
    fn push(&mut self, arc: usize, amount: usize) {
        self.residual[arc] -= amount;
        self.residual[self.rev[arc]] += amount;
    }

    /// Removes all flow.
    pub fn reset(&mut self) {
        self.residual.copy_from_slice(&self.capacity);
    }

    /// Sets to zero the capacity of the arcs corresponding to the edge
    /// `{u, v}`, if present, and removes all flow.
    ///
    /// # Panics
    ///
    /// This method will panic if `u` or `v` is not a node of the graph.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        let (i, j) = (self.index[u], self.index[v]);
        let arcs = [
            (self.out_vertex(i), self.in_vertex(j)),
            (self.out_vertex(j), self.in_vertex(i)),
        ];
        for (from, to) in arcs {
            for arc in self.arcs(from) {
                if self.head[arc] == to && self.capacity[arc] > 0 {
                    self.capacity[arc] = 0;
                }
            }
        }
        self.reset();
    }

    /// Removes all flow and computes the local vertex connectivity between two
    /// nodes using the given strategy, stopping as soon as the value reaches
    /// `cutoff`.
    ///
    /// The nodes must not be adjacent (unless the edge between them has been
    /// [removed](FlowNetwork::remove_edge)).
    ///
    /// # Panics
    ///
    /// This method will panic if `source` or `target` is not a node of the
    /// graph.
    pub fn solve(
        &mut self,
        flow: &impl MaxFlow,
        source: usize,
        target: usize,
        cutoff: usize,
    ) -> usize {
        self.reset();
        let s = self.out_vertex(self.index[source]);
        let t = self.in_vertex(self.index[target]);
        let value = flow.max_flow(self, s, t, cutoff);
        debug_assert!(value <= self.num_nodes());
        value
    }

    /// Returns the vertices reachable in the residual network from the given
    /// roots.
    pub fn reachable(&self, roots: impl IntoIterator<Item = usize>) -> BitVec {
        let mut seen = BitVec::new(self.num_vertices());
        for root in roots {
            self.extend_reachable(&mut seen, root);
        }
        seen
    }

    /// Adds to `seen` the vertices reachable in the residual network from
    /// `root` without passing through vertices already in `seen`.
    pub fn extend_reachable(&self, seen: &mut BitVec, root: usize) {
        if seen[root] {
            return;
        }
        seen.set(root, true);
        let mut queue = VecDeque::from([root]);
        while let Some(v) = queue.pop_front() {
            for arc in self.arcs(v) {
                let w = self.head[arc];
                if self.residual[arc] > 0 && !seen[w] {
                    seen.set(w, true);
                    queue.push_back(w);
                }
            }
        }
    }

    /// Returns the nodes of the minimum node cut defined by a set of vertices
    /// closed under residual reachability: the nodes whose in-copy is in the
    /// set and whose out-copy is not.
    pub fn boundary(&self, closed: &BitVec) -> Vec<usize> {
        (0..self.num_nodes())
            .filter(|&i| closed[self.in_vertex(i)] && !closed[self.out_vertex(i)])
            .map(|i| self.nodes[i])
            .collect()
    }

    /// Returns the nodes of the minimum node cut closest to `source` for the
    /// current (maximum) flow: the nodes whose in-copy is reachable in the
    /// residual network from the out-copy of `source` and whose out-copy is
    /// not.
    ///
    /// # Panics
    ///
    /// This method will panic if `source` is not a node of the graph.
    pub fn source_side_cut(&self, source: usize) -> Vec<usize> {
        let closed = self.reachable([self.out_vertex(self.index[source])]);
        self.boundary(&closed)
    }

    /// Decomposes the current flow from `source` to `sink` into paths, and
    /// returns, for each path, the dense indices of the nodes it crosses
    /// (excluding the terminals).
    ///
    /// Since unit arcs have capacity one, the paths are internally
    /// vertex-disjoint, and their number is the flow value. Circulations, if
    /// any, are discarded.
    pub fn flow_paths(&self, source: usize, sink: usize) -> Vec<Vec<usize>> {
        let mut remaining: Vec<usize> = self
            .capacity
            .iter()
            .zip(self.residual.iter())
            .map(|(&cap, &res)| cap.saturating_sub(res))
            .collect();
        // Position of each vertex in the current walk, or usize::MAX
        let mut position = vec![usize::MAX; self.num_vertices()];
        let mut paths = vec![];
        loop {
            let mut walk = vec![source];
            position[source] = 0;
            let mut v = source;
            while v != sink {
                let Some(arc) = self.arcs(v).find(|&arc| remaining[arc] > 0) else {
                    debug_assert_eq!(v, source, "Flow conservation violated at vertex {v}");
                    return paths;
                };
                remaining[arc] -= 1;
                v = self.head[arc];
                if position[v] == usize::MAX {
                    position[v] = walk.len();
                    walk.push(v);
                } else {
                    // Cut the loop
                    for &w in &walk[position[v] + 1..] {
                        position[w] = usize::MAX;
                    }
                    walk.truncate(position[v] + 1);
                }
            }
            for &w in &walk {
                position[w] = usize::MAX;
            }
            paths.push(
                walk.windows(2)
                    .filter(|pair| pair[0] % 2 == 0 && pair[1] == pair[0] + 1)
                    .map(|pair| pair[0] / 2)
                    .collect(),
            );
        }
    }
}

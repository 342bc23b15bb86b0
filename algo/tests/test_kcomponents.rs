/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::BTreeMap;

use anyhow::Result;
use dsi_progress_logger::no_logging;
use kconn::graphs::generators;
use kconn::prelude::*;
use kconn_algo::prelude::*;
use kconn_algo::thread_pool;

const KARATE_K_NUMBERS: [(usize, usize); 34] = [
    (0, 4),
    (1, 4),
    (2, 4),
    (3, 4),
    (4, 3),
    (5, 3),
    (6, 3),
    (7, 4),
    (8, 4),
    (9, 2),
    (10, 3),
    (11, 1),
    (12, 2),
    (13, 4),
    (14, 2),
    (15, 2),
    (16, 2),
    (17, 2),
    (18, 2),
    (19, 3),
    (20, 2),
    (21, 2),
    (22, 2),
    (23, 3),
    (24, 3),
    (25, 3),
    (26, 2),
    (27, 3),
    (28, 3),
    (29, 3),
    (30, 4),
    (31, 3),
    (32, 4),
    (33, 4),
];

/// The benchmark graph of Torrents and Ferraro: a 5×5 grid with four
/// gadgets, each made of a Petersen graph linked to the grid by two edges and
/// to a pair of overlapping K5s by three edges.
fn torrents_ferraro() -> VecGraph {
    let mut graph = generators::grid_2d(5, 5);
    let petersen = generators::petersen();
    let grid = |(i, j): (usize, usize)| i * 5 + j;

    // The grid nodes the gadget is attached to, and the number of nodes
    // shared by the two K5s
    let gadgets = [
        ((0, 4), (1, 4), 1),
        ((3, 4), (4, 4), 1),
        ((0, 0), (1, 0), 2),
        ((3, 0), (4, 0), 2),
    ];

    for (a, b, shared) in gadgets {
        let base = graph.num_nodes();
        let p = |i: usize| base + i;
        graph.add_edges(petersen.edges().map(|(u, v)| (p(u), p(v))));
        graph.add_edges([(p(2), grid(a)), (p(1), grid(b))]);

        // The second K5, and the nodes of the first one that it does not
        // share
        let second = (base + 10..base + 15).collect::<Vec<_>>();
        let private = (base + 15..base + 20 - shared).collect::<Vec<_>>();
        let mut first = private.clone();
        first.extend(&second[3..3 + shared]);
        for clique in [&second, &first] {
            for (i, &u) in clique.iter().enumerate() {
                graph.add_edges(clique[i + 1..].iter().map(|&v| (u, v)));
            }
        }

        // Three edges between the Petersen graph and the first K5
        let attached = &private[private.len() - 3..];
        graph.add_edges([(p(3), attached[0]), (p(4), attached[1]), (p(5), attached[2])]);
        if shared == 1 {
            // Makes the graph biconnected
            graph.add_edge(second[2], p(9));
        }
    }
    graph
}

/// Checks that every k-component has more than k nodes and vertex
/// connectivity at least k, that it is contained in a (k − 1)-component, and
/// that no two k-components share k nodes.
fn check_components(graph: &impl Graph, components: &KComponents) -> Result<()> {
    for (k, sets) in components.iter() {
        for (i, set) in sets.iter().enumerate() {
            assert!(set.len() > k, "{k}-component {set:?} is too small");
            let subgraph = Subgraph::new(graph, set.iter().copied());
            assert!(node_connectivity(&subgraph, &Dinic)? >= k, "{set:?} is not {k}-connected");
            if k > 1 {
                assert!(
                    components
                        .components(k - 1)
                        .iter()
                        .any(|sup| set.is_subset(sup)),
                    "{k}-component {set:?} is not contained in a {}-component",
                    k - 1
                );
            }
            for other in &sets[i + 1..] {
                assert!(set.intersection(other).count() < k);
            }
        }
    }
    if let Some(max_k) = components.max_k() {
        assert_eq!(components.levels().len(), max_k);
    }
    Ok(())
}

/// Returns the nodes of the Davis Southern Women network with given labels.
fn davis_nodes(labels: &[&str]) -> NodeSet {
    labels
        .iter()
        .map(|label| {
            generators::DAVIS_SOUTHERN_WOMEN_LABELS
                .iter()
                .position(|other| other == label)
                .unwrap()
        })
        .collect()
}

/// The 4-component of the Davis Southern Women network.
const DAVIS_FOUR: [&str; 23] = [
    "Nora Fayette",
    "E10",
    "Verne Sanderson",
    "E12",
    "Frances Anderson",
    "Evelyn Jefferson",
    "Ruth DeSand",
    "Helen Lloyd",
    "Eleanor Nye",
    "E9",
    "E8",
    "E5",
    "E4",
    "E7",
    "E6",
    "Myra Liddel",
    "E3",
    "Theresa Anderson",
    "Katherina Rogers",
    "Brenda Rogers",
    "Charlotte McDowd",
    "Sylvia Avondale",
    "Laura Mandeville",
];

/// The nodes of the 3-component of the Davis Southern Women network that are
/// not in its 4-component.
const DAVIS_THREE_ONLY: [&str; 5] = ["E1", "E2", "E13", "E14", "Pearl Oglethorpe"];

macro_rules! test_strategy {
    ($flow:expr, $name:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn test_karate() -> Result<()> {
                let graph = generators::karate_club();
                let components = k_components(&graph, &$flow, no_logging![])?;
                check_components(&graph, &components)?;
                assert_eq!(components.max_k(), Some(4));
                assert_eq!(components.k_numbers(), BTreeMap::from(KARATE_K_NUMBERS));
                Ok(())
            }

            #[test]
            fn test_torrents_ferraro() -> Result<()> {
                let graph = torrents_ferraro();
                let components = k_components(&graph, &$flow, no_logging![])?;
                check_components(&graph, &components)?;

                let threes = components.components(3);
                assert_eq!(threes.len(), 8);
                assert_eq!(threes.iter().filter(|set| set.len() == 15).count(), 4);
                assert_eq!(threes.iter().filter(|set| set.len() == 5).count(), 4);
                let fours = components.components(4);
                assert_eq!(fours.len(), 8);
                assert!(fours.iter().all(|set| set.len() == 5));
                assert_eq!(components.max_k(), Some(4));
                Ok(())
            }

            #[test]
            fn test_davis_southern_women() -> Result<()> {
                let graph = generators::davis_southern_women();
                let components = k_components(&graph, &$flow, no_logging![])?;
                check_components(&graph, &components)?;

                let four = davis_nodes(&DAVIS_FOUR);
                let mut three = four.clone();
                three.extend(davis_nodes(&DAVIS_THREE_ONLY));
                assert_eq!(three.len(), 28);
                assert_eq!(components.max_k(), Some(4));
                assert_eq!(components.components(3), &[three]);
                assert_eq!(components.components(4), &[four]);
                Ok(())
            }

            #[test]
            fn test_shell() -> Result<()> {
                for seed in 0..2 {
                    let graph = RandomShell::new([(20, 80, 0.8), (80, 180, 0.6)], seed).graph();
                    let components = k_components(&graph, &$flow, no_logging![])?;
                    check_components(&graph, &components)?;
                }
                Ok(())
            }

            #[test]
            fn test_configuration() -> Result<()> {
                for seed in 0..5 {
                    let graph = ConfigurationModel::random_tree(100, seed).graph();
                    let components = k_components(&graph, &$flow, no_logging![])?;
                    check_components(&graph, &components)?;
                }
                Ok(())
            }

            #[test]
            fn test_random() -> Result<()> {
                for seed in 0..5 {
                    let graph = ErdosRenyi::new(50, 0.2, seed).graph();
                    let components = k_components(&graph, &$flow, no_logging![])?;
                    check_components(&graph, &components)?;
                }
                Ok(())
            }

            #[test]
            fn test_planted_clique() -> Result<()> {
                for seed in 0..5 {
                    let mut graph = ErdosRenyi::new(40, 0.08, seed).graph();
                    for u in 0..6 {
                        graph.add_edges((u + 1..6).map(|v| (u, v)));
                    }
                    let components = k_components(&graph, &$flow, no_logging![])?;
                    check_components(&graph, &components)?;
                    let k_numbers = components.k_numbers();
                    assert!((0..6).all(|node| k_numbers[&node] >= 5));
                }
                Ok(())
            }
        }
    };
}

test_strategy!(EdmondsKarp, edmonds_karp);
test_strategy!(Dinic, dinic);

#[test]
fn test_parallel() -> Result<()> {
    let graphs = [
        generators::karate_club(),
        torrents_ferraro(),
        ErdosRenyi::new(60, 0.15, 0).graph(),
    ];
    for graph in &graphs {
        let sequential = k_components(graph, &Dinic, no_logging![])?;
        for num_threads in [1, 3] {
            let parallel = thread_pool![num_threads]
                .install(|| par_k_components(graph, &Dinic, no_logging![]))?;
            assert_eq!(parallel, sequential);
        }
    }
    Ok(())
}

#[test]
fn test_degenerate() -> Result<()> {
    let empty = k_components(&VecGraph::new(), &Dinic, no_logging![])?;
    assert_eq!(empty.max_k(), None);
    assert!(empty.k_numbers().is_empty());

    let isolated = k_components(&VecGraph::empty(3), &Dinic, no_logging![])?;
    assert_eq!(isolated.max_k(), None);
    assert_eq!(isolated.k_numbers(), BTreeMap::from([(0, 1), (1, 1), (2, 1)]));

    let mut edge = VecGraph::from_edges([(0, 1)]);
    edge.add_node(2);
    let components = k_components(&edge, &Dinic, no_logging![])?;
    assert_eq!(components.max_k(), Some(1));
    assert_eq!(components.components(1), &[NodeSet::from([0, 1])]);
    assert!(components.components(2).is_empty());
    assert_eq!(components.k_numbers(), BTreeMap::from([(0, 1), (1, 1), (2, 1)]));
    Ok(())
}

#[test]
fn test_classical() -> Result<()> {
    let k5 = k_components(&generators::complete(5), &Dinic, no_logging![])?;
    assert_eq!(k5.max_k(), Some(4));
    for k in 1..=4 {
        assert_eq!(k5.components(k), &[NodeSet::from_iter(0..5)]);
    }

    let petersen = k_components(&generators::petersen(), &Dinic, no_logging![])?;
    assert_eq!(petersen.max_k(), Some(3));
    assert_eq!(petersen.components(3), &[NodeSet::from_iter(0..10)]);

    // Two triangles and a bridge
    let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]);
    let components = k_components(&graph, &Dinic, no_logging![])?;
    assert_eq!(components.max_k(), Some(2));
    assert_eq!(
        components.components(2),
        &[NodeSet::from([0, 1, 2]), NodeSet::from([3, 4, 5])]
    );
    Ok(())
}

#[test]
fn test_directed() {
    for graph in [VecDiGraph::new(), VecDiGraph::from_arcs([(0, 1), (1, 2), (2, 0)])] {
        assert_eq!(
            k_components(&graph, &Dinic, no_logging![]),
            Err(Error::NotImplementedForDirectedGraphs)
        );
        assert_eq!(
            par_k_components(&graph, &Dinic, no_logging![]),
            Err(Error::NotImplementedForDirectedGraphs)
        );
        assert_eq!(
            node_connectivity(&graph, &Dinic),
            Err(Error::NotImplementedForDirectedGraphs)
        );
        assert_eq!(
            all_node_cuts(&graph, None, &Dinic),
            Err(Error::NotImplementedForDirectedGraphs)
        );
        assert_eq!(
            minimum_global_node_cut(&graph, &Dinic),
            Err(Error::NotImplementedForDirectedGraphs)
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> Result<()> {
    let graph = generators::karate_club();
    let components = k_components(&graph, &Dinic, no_logging![])?;
    let json = serde_json::to_string(&components)?;
    let back: KComponents = serde_json::from_str(&json)?;
    assert_eq!(back, components);
    assert_eq!(back.k_numbers(), BTreeMap::from(KARATE_K_NUMBERS));
    Ok(())
}

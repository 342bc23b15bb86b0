/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::BTreeSet;

use anyhow::Result;
use itertools::Itertools;
use kconn::components::is_connected;
use kconn::graphs::generators;
use kconn::prelude::*;
use kconn_algo::prelude::*;

/// All node sets of size `k` whose removal disconnects the graph.
fn brute_force_cuts(graph: &impl Graph, k: usize) -> BTreeSet<NodeSet> {
    graph
        .nodes()
        .combinations(k)
        .filter(|cut| {
            let rest = Subgraph::new(graph, graph.nodes().filter(|node| !cut.contains(node)));
            rest.num_nodes() > 0 && !is_connected(&rest)
        })
        .map(NodeSet::from_iter)
        .collect()
}

fn check_against_brute_force(graph: &impl Graph, flow: &impl MaxFlow) -> Result<()> {
    let k = node_connectivity(graph, flow)?;
    let cuts = all_node_cuts(graph, None, flow)?;
    let distinct = cuts.iter().cloned().collect::<BTreeSet<_>>();
    assert_eq!(distinct.len(), cuts.len(), "duplicate cuts in {cuts:?}");
    assert!(cuts.iter().all(|cut| cut.len() == k));
    assert_eq!(distinct, brute_force_cuts(graph, k));
    assert_eq!(all_node_cuts(graph, Some(k), flow)?, cuts);
    Ok(())
}

macro_rules! test_strategy {
    ($flow:expr, $name:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn test_cycles() -> Result<()> {
                for n in 5..=8 {
                    let cuts = all_node_cuts(&generators::cycle(n), None, &$flow)?;
                    assert_eq!(cuts.len(), n * (n - 3) / 2);
                }
                Ok(())
            }

            #[test]
            fn test_path() -> Result<()> {
                let mut cuts = all_node_cuts(&generators::path(6), None, &$flow)?;
                cuts.sort();
                assert_eq!(
                    cuts,
                    (1..5).map(|node| NodeSet::from([node])).collect::<Vec<_>>()
                );
                Ok(())
            }

            #[test]
            fn test_no_cuts() -> Result<()> {
                assert!(all_node_cuts(&generators::complete(5), None, &$flow)?.is_empty());
                assert!(all_node_cuts(&VecGraph::empty(1), None, &$flow)?.is_empty());
                assert!(all_node_cuts(&VecGraph::new(), None, &$flow)?.is_empty());
                Ok(())
            }

            #[test]
            fn test_petersen() -> Result<()> {
                // The only minimum cuts are the neighborhoods
                let petersen = generators::petersen();
                let cuts = all_node_cuts(&petersen, None, &$flow)?
                    .into_iter()
                    .collect::<BTreeSet<_>>();
                let neighborhoods = petersen
                    .nodes()
                    .map(|node| petersen.neighbors(node).collect::<NodeSet>())
                    .collect::<BTreeSet<_>>();
                assert_eq!(cuts, neighborhoods);
                check_against_brute_force(&petersen, &$flow)
            }

            #[test]
            fn test_grids() -> Result<()> {
                check_against_brute_force(&generators::grid_2d(3, 3), &$flow)?;
                check_against_brute_force(&generators::grid_2d(3, 4), &$flow)?;
                check_against_brute_force(&generators::grid_2d(4, 4), &$flow)
            }

            #[test]
            fn test_random() -> Result<()> {
                let mut checked = 0;
                for seed in 0..40 {
                    let graph = ErdosRenyi::new(10, 0.4, seed).graph();
                    if !is_connected(&graph) || graph.is_complete() {
                        continue;
                    }
                    check_against_brute_force(&graph, &$flow)?;
                    checked += 1;
                }
                assert!(checked > 5);
                Ok(())
            }

            #[test]
            fn test_subgraph() -> Result<()> {
                // The rim of a wheel, without its hub, is a cycle
                let mut wheel = generators::cycle(8);
                wheel.add_edges((0..8).map(|node| (node, 8)));
                let rim = Subgraph::new(&wheel, 0..8);
                assert_eq!(all_node_cuts(&rim, None, &$flow)?.len(), 20);
                check_against_brute_force(&rim, &$flow)
            }
        }
    };
}

test_strategy!(EdmondsKarp, edmonds_karp);
test_strategy!(Dinic, dinic);

#[test]
fn test_errors() {
    let two_triangles =
        generators::disjoint_union(&generators::complete(3), &generators::complete(3));
    assert_eq!(
        all_node_cuts(&two_triangles, None, &Dinic),
        Err(InvalidInput::Disconnected.into())
    );
    let directed = VecDiGraph::from_arcs([(0, 1), (1, 2)]);
    assert_eq!(
        all_node_cuts(&directed, None, &Dinic),
        Err(Error::NotImplementedForDirectedGraphs)
    );
}

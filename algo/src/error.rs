/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use kconn::traits::Graph;
use thiserror::Error;

/// The reasons why the input of a connectivity function is invalid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Node {node} is not in the graph")]
    NodeNotFound { node: usize },
    #[error("Source and target are the same node ({node})")]
    IdenticalTerminals { node: usize },
    #[error("Nodes {u} and {v} are adjacent, so no node cut separates them")]
    AdjacentTerminals { u: usize, v: usize },
    #[error("The graph is disconnected")]
    Disconnected,
    #[error("The graph is complete or has fewer than two nodes, so it has no node cut")]
    NoNodeCut,
}

/// The errors returned by the functions of this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("Not implemented for directed graphs")]
    NotImplementedForDirectedGraphs,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fails if the graph is directed.
pub(crate) fn ensure_undirected(graph: &impl Graph) -> Result<()> {
    if graph.is_directed() {
        return Err(Error::NotImplementedForDirectedGraphs);
    }
    Ok(())
}

/// Fails if `source` or `target` is not a node of the graph, or if they are
/// the same node.
pub(crate) fn check_terminals(graph: &impl Graph, source: usize, target: usize) -> Result<()> {
    for node in [source, target] {
        if !graph.contains(node) {
            return Err(InvalidInput::NodeNotFound { node }.into());
        }
    }
    if source == target {
        return Err(InvalidInput::IdenticalTerminals { node: source }.into());
    }
    Ok(())
}

/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of graphs.

pub mod generators;
pub mod random;
pub mod subgraph;
pub mod vec_digraph;
pub mod vec_graph;

pub mod prelude {
    pub use super::random::{ConfigurationModel, ErdosRenyi, RandomShell};
    pub use super::subgraph::Subgraph;
    pub use super::vec_digraph::VecDiGraph;
    pub use super::vec_graph::VecGraph;
}

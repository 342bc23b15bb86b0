/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

use std::collections::BTreeSet;

mod error;
pub use error::{Error, InvalidInput, Result};

pub mod consolidate;
pub mod connectivity;
pub mod cuts;
pub mod flow;
pub mod kcomponents;
pub mod partition;

mod union_find;

/// A set of nodes, ordered by identifier.
pub type NodeSet = BTreeSet<usize>;

pub mod prelude {
    pub use crate::NodeSet;
    pub use crate::connectivity::{
        local_node_connectivity, minimum_global_node_cut, minimum_node_cut, node_connectivity,
    };
    pub use crate::consolidate::consolidate;
    pub use crate::cuts::all_node_cuts;
    pub use crate::flow::{Dinic, EdmondsKarp, FlowNetwork, MaxFlow};
    pub use crate::kcomponents::{KComponents, k_components, k_numbers, par_k_components};
    pub use crate::partition::{partition, partition_by_cuts};
    pub use crate::{Error, InvalidInput, Result};
}

/// Utility macro to create [`thread_pools`](`rayon::ThreadPool`).
///
/// There are two forms of this macro:
/// * Create a [`ThreadPool`](rayon::ThreadPool) with the default settings:
/// ```
/// # use kconn_algo::thread_pool;
/// let t: rayon::ThreadPool = thread_pool![];
/// ```
/// * Create a [`ThreadPool`](rayon::ThreadPool) with a given number of threads:
/// ```
/// # use kconn_algo::thread_pool;
/// let t: rayon::ThreadPool = thread_pool![7];
/// assert_eq!(t.current_num_threads(), 7);
/// ```
#[macro_export]
macro_rules! thread_pool {
    () => {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Cannot build a ThreadPool with default parameters")
    };
    ($num_threads:expr) => {
        rayon::ThreadPoolBuilder::new()
            .num_threads($num_threads)
            .build()
            .unwrap_or_else(|_| {
                panic!(
                    "Cannot build a ThreadPool with default parameters and {} threads",
                    $num_threads,
                )
            })
    };
}

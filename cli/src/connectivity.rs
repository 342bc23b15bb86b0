/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{GlobalArgs, IoArgs};
use anyhow::{Context, Result};
use clap::Parser;
use kconn::traits::Graph;
use kconn_algo::prelude::{
    InvalidInput, local_node_connectivity, minimum_global_node_cut, minimum_node_cut,
    node_connectivity,
};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    about = "Computes the vertex connectivity of a graph, or the local vertex connectivity of two nodes.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub io: IoArgs,

    #[arg(short, long, requires = "target")]
    /// The first node of the pair.
    pub source: Option<String>,

    #[arg(short, long, requires = "source")]
    /// The second node of the pair.
    pub target: Option<String>,

    #[arg(long)]
    /// Print also a minimum node cut on a second line.
    pub cut: bool,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let input = args.io.read_graph(&global_args)?;
    let graph = &input.graph;
    let flow = global_args.flow;
    let mut writer = args.io.writer()?;

    if let (Some(source), Some(target)) = (&args.source, &args.target) {
        let (s, t) = (input.node(source)?, input.node(target)?);
        let k = local_node_connectivity(graph, s, t, &flow).with_context(|| {
            format!("Could not compute the local connectivity of {source} and {target}")
        })?;
        log::info!("Local vertex connectivity of {} and {}: {}", source, target, k);
        writeln!(writer, "{k}")?;

        if args.cut {
            if graph.has_edge(s, t) {
                log::warn!("Nodes {} and {} are adjacent: no node cut separates them", source, target);
            } else {
                let cut = minimum_node_cut(graph, s, t, &flow)?;
                writeln!(writer, "{}", input.format(cut))?;
            }
        }
    } else {
        let k = node_connectivity(graph, &flow)?;
        log::info!("Vertex connectivity: {}", k);
        writeln!(writer, "{k}")?;

        if args.cut {
            match minimum_global_node_cut(graph, &flow) {
                Ok(cut) => writeln!(writer, "{}", input.format(cut))?,
                Err(kconn_algo::Error::InvalidInput(InvalidInput::NoNodeCut)) => {
                    log::warn!("The graph is complete or has fewer than two nodes: it has no node cut")
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    writer.flush()?;
    Ok(())
}

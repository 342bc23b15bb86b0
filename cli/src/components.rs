/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{GlobalArgs, InputGraph, IoArgs, NumThreadsArg, OutputFormat, get_thread_pool};
use anyhow::Result;
use clap::{Args, Parser};
use dsi_progress_logger::prelude::*;
use kconn_algo::prelude::{KComponents, k_components, par_k_components};
use std::io::Write;

/// Shared CLI arguments for commands computing k-components.
#[derive(Args, Debug)]
pub struct DecompositionArgs {
    #[arg(long)]
    /// Explore biconnected components in parallel.
    pub par: bool,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    /// The output format.
    pub fmt: OutputFormat,
}

#[derive(Parser, Debug)]
#[command(
    about = "Computes the k-components of a graph. In text format, prints one component per line, preceded by its level and a tab; in JSON format, prints an object mapping each level to its components.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub io: IoArgs,

    #[clap(flatten)]
    pub decomposition: DecompositionArgs,
}

/// Computes the k-components of the input graph, sequentially or in
/// parallel.
pub fn decompose(
    global_args: &GlobalArgs,
    args: &DecompositionArgs,
    input: &InputGraph,
) -> Result<KComponents> {
    let components = if args.par {
        let mut pl = concurrent_progress_logger![];
        if let Some(log_interval) = global_args.log_interval {
            pl.log_interval(log_interval);
        }
        let thread_pool = get_thread_pool(args.num_threads.num_threads)?;
        thread_pool.install(|| par_k_components(&input.graph, &global_args.flow, &mut pl))?
    } else {
        let mut pl = progress_logger![];
        if let Some(log_interval) = global_args.log_interval {
            pl.log_interval(log_interval);
        }
        k_components(&input.graph, &global_args.flow, &mut pl)?
    };

    for (k, sets) in components.iter() {
        log::info!(
            "Level {}: {} components, the largest with {} nodes",
            k,
            sets.len(),
            sets.iter().map(|set| set.len()).max().unwrap_or(0)
        );
    }
    Ok(components)
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let input = args.io.read_graph(&global_args)?;
    let components = decompose(&global_args, &args.decomposition, &input)?;

    let mut writer = args.io.writer()?;
    match args.decomposition.fmt {
        OutputFormat::Text => {
            for (k, sets) in components.iter() {
                for set in sets {
                    writeln!(writer, "{}\t{}", k, input.format(set.iter().copied()))?;
                }
            }
        }
        OutputFormat::Json => {
            let levels = components
                .iter()
                .map(|(k, sets)| {
                    let sets = sets
                        .iter()
                        .map(|set| {
                            serde_json::Value::Array(
                                set.iter().map(|&node| input.json(node)).collect(),
                            )
                        })
                        .collect();
                    (k.to_string(), serde_json::Value::Array(sets))
                })
                .collect::<serde_json::Map<_, _>>();
            serde_json::to_writer_pretty(&mut writer, &levels)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

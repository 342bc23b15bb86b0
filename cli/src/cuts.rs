/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{GlobalArgs, IoArgs};
use anyhow::{Context, Result};
use clap::Parser;
use kconn_algo::prelude::all_node_cuts;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    about = "Prints all minimum node cuts of a connected graph, one per line.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub io: IoArgs,

    #[arg(short, long)]
    /// The vertex connectivity of the graph, if known; it is computed
    /// otherwise.
    pub k: Option<usize>,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let input = args.io.read_graph(&global_args)?;
    let cuts = all_node_cuts(&input.graph, args.k, &global_args.flow)
        .context("Could not enumerate the minimum node cuts")?;
    log::info!(
        "Found {} minimum node cuts of size {}",
        cuts.len(),
        cuts.first().map_or(0, |cut| cut.len())
    );

    let mut writer = args.io.writer()?;
    for cut in cuts {
        writeln!(writer, "{}", input.format(cut))?;
    }
    writer.flush()?;
    Ok(())
}

/*
 * SPDX-FileCopyrightText: 2026 The kconn developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::components::{DecompositionArgs, decompose};
use crate::{GlobalArgs, IoArgs, OutputFormat};
use anyhow::Result;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    about = "Computes the k-number of each node of a graph, that is, the largest k such that the node belongs to a k-component. In text format, prints one node per line followed by a tab and its k-number; in JSON format, prints an object mapping nodes to k-numbers.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub io: IoArgs,

    #[clap(flatten)]
    pub decomposition: DecompositionArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let input = args.io.read_graph(&global_args)?;
    let k_numbers = decompose(&global_args, &args.decomposition, &input)?.k_numbers();

    let mut writer = args.io.writer()?;
    match args.decomposition.fmt {
        OutputFormat::Text => {
            for (node, k) in k_numbers {
                writeln!(writer, "{}\t{}", input.label(node), k)?;
            }
        }
        OutputFormat::Json => {
            let map = k_numbers
                .into_iter()
                .map(|(node, k)| (input.label(node), serde_json::Value::from(k)))
                .collect::<serde_json::Map<_, _>>();
            serde_json::to_writer_pretty(&mut writer, &map)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

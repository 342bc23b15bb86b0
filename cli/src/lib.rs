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

use anyhow::{Context, Result, anyhow, bail, ensure};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dsi_progress_logger::prelude::*;
use itertools::Itertools;
use kconn::prelude::*;
use kconn_algo::flow::{Dinic, EdmondsKarp, FlowNetwork, MaxFlow};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::time::SystemTime;

#[derive(Args, Debug, Clone)]
/// Shared CLI arguments for reading files containing arcs.
pub struct ArcsArgs {
    #[arg(long, default_value_t = '#')]
    /// Ignore lines that start with this symbol.
    pub line_comment_symbol: char,

    #[arg(long, default_value_t = 0)]
    /// How many lines to skip at the beginning of the input; comment lines
    /// count as lines.
    pub lines_to_skip: usize,

    #[arg(long)]
    /// How many arcs to parse, after skipping the first lines_to_skip and
    /// ignoring comment lines.
    pub max_arcs: Option<usize>,

    #[arg(long, default_value_t = '\t')]
    /// The column separator.
    pub separator: char,

    #[arg(long, default_value_t = 0)]
    /// The index of the column containing the source node of an arc.
    pub source_column: usize,

    #[arg(long, default_value_t = 1)]
    /// The index of the column containing the target node of an arc.
    pub target_column: usize,

    #[arg(long, default_value_t = false)]
    /// Sources and targets are not node identifiers starting from 0, but
    /// labels; identifiers are assigned to labels in order of appearance.
    pub labels: bool,
}

impl Default for ArcsArgs {
    fn default() -> Self {
        Self {
            line_comment_symbol: '#',
            lines_to_skip: 0,
            max_arcs: None,
            separator: '\t',
            source_column: 0,
            target_column: 1,
            labels: false,
        }
    }
}

/// Shared CLI arguments for commands reading a graph and writing results.
#[derive(Args, Debug)]
pub struct IoArgs {
    /// The file containing the arcs of the graph, one per line (standard
    /// input if missing). Arcs are read as undirected edges.
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    /// Where to write the results (standard output if missing).
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub arcs_args: ArcsArgs,
}

impl IoArgs {
    /// Reads the input graph.
    pub fn read_graph(&self, global_args: &GlobalArgs) -> Result<InputGraph> {
        match &self.input {
            Some(path) => {
                log::info!("Reading arcs from {}", path.display());
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Could not open {}", path.display()))?;
                InputGraph::from_reader(
                    BufReader::new(file),
                    &self.arcs_args,
                    global_args.log_interval,
                )
            }
            None => {
                log::info!("Reading arcs from stdin...");
                let stdin = std::io::stdin().lock();
                InputGraph::from_reader(stdin, &self.arcs_args, global_args.log_interval)
            }
        }
    }

    /// Returns a buffered writer to the output file, or to standard output.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => {
                create_parent_dir(path)?;
                let file = std::fs::File::create(path)
                    .with_context(|| format!("Could not create {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// An undirected graph read from a list of arcs, together with the labels of
/// its nodes.
#[derive(Debug, Clone)]
pub struct InputGraph {
    pub graph: VecGraph,
    /// The label of each node, if nodes were specified by labels.
    labels: Option<Vec<String>>,
    /// The inverse of `labels`.
    ids: HashMap<String, usize>,
}

impl InputGraph {
    /// Parses a list of arcs.
    ///
    /// Self-loops are discarded, and an arc and its reverse define the same
    /// edge.
    pub fn from_reader(
        reader: impl BufRead,
        args: &ArcsArgs,
        log_interval: Option<Duration>,
    ) -> Result<Self> {
        let mut pl = ProgressLogger::default();
        pl.item_name("line").expected_updates(args.max_arcs);
        if let Some(log_interval) = log_interval {
            pl.log_interval(log_interval);
        }
        pl.start("Reading arcs...");

        let mut graph = VecGraph::new();
        let mut ids = HashMap::new();
        let mut labels = vec![];
        let biggest_idx = args.source_column.max(args.target_column);
        let mut num_arcs = 0;

        let mut parse = |value: &str, line_num: usize| -> Result<usize> {
            if args.labels {
                let next_id = labels.len();
                Ok(*ids.entry(value.to_string()).or_insert_with(|| {
                    labels.push(value.to_string());
                    next_id
                }))
            } else {
                value.trim().parse::<usize>().with_context(|| {
                    format!(
                        "Error parsing node {:?} at line {} as an integer (use --labels for arbitrary labels)",
                        value, line_num
                    )
                })
            }
        };

        for (line_num, line) in reader.lines().enumerate().skip(args.lines_to_skip) {
            if args.max_arcs.is_some_and(|max_arcs| num_arcs >= max_arcs) {
                break;
            }
            let line = line.with_context(|| format!("Error reading line {}", line_num + 1))?;
            if line.trim().is_empty() || line.trim().starts_with(args.line_comment_symbol) {
                continue;
            }

            let vals = line.split(args.separator).collect::<Vec<_>>();
            if vals.get(biggest_idx).is_none() {
                log::warn!(
                    "Line {}: {:?} does not have enough columns: got {} columns but expected at least {} columns separated by {:?} (you can change the separator using the --separator option)",
                    line_num + 1,
                    line,
                    vals.len(),
                    biggest_idx + 1,
                    args.separator,
                );
                continue;
            }

            let source = parse(vals[args.source_column], line_num + 1)?;
            let target = parse(vals[args.target_column], line_num + 1)?;
            graph.add_edges([(source, target)]);
            num_arcs += 1;
            pl.light_update();
        }
        pl.done();

        if num_arcs == 0 {
            log::warn!(
                "No arcs read! Check that the --separator={:?} value is correct and that the --source-column={:?} and --target-column={:?} values are correct.",
                args.separator,
                args.source_column,
                args.target_column
            );
        }
        graph.shrink_to_fit();
        log::info!(
            "Arcs read: {} Nodes: {} Edges: {}",
            num_arcs,
            graph.num_nodes(),
            graph.num_edges()
        );

        Ok(Self {
            graph,
            labels: args.labels.then_some(labels),
            ids,
        })
    }

    /// Returns the node with a given label (or identifier, if nodes were not
    /// specified by labels).
    pub fn node(&self, label: &str) -> Result<usize> {
        let node = match &self.labels {
            Some(_) => self
                .ids
                .get(label)
                .copied()
                .ok_or_else(|| anyhow!("Unknown node label {:?}", label))?,
            None => label
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Error parsing node {:?} as an integer", label))?,
        };
        ensure!(
            self.graph.contains(node),
            "Node {} is not in the graph",
            label
        );
        Ok(node)
    }

    /// Returns the label of a node.
    pub fn label(&self, node: usize) -> String {
        match &self.labels {
            Some(labels) => labels[node].clone(),
            None => node.to_string(),
        }
    }

    /// Returns the labels of some nodes, separated by spaces.
    pub fn format(&self, nodes: impl IntoIterator<Item = usize>) -> String {
        nodes.into_iter().map(|node| self.label(node)).join(" ")
    }

    /// Returns a JSON value for a node: its label if nodes were specified by
    /// labels, its identifier otherwise.
    pub fn json(&self, node: usize) -> serde_json::Value {
        match &self.labels {
            Some(labels) => serde_json::Value::from(labels[node].as_str()),
            None => serde_json::Value::from(node),
        }
    }
}

/// Parses the number of threads from a string.
///
/// This function is meant to be used with `#[arg(...,  value_parser =
/// num_threads_parser)]`.
pub fn num_threads_parser(arg: &str) -> Result<usize> {
    let num_threads = arg.parse::<usize>()?;
    ensure!(num_threads > 0, "Number of threads must be greater than 0");
    Ok(num_threads)
}

/// Shared CLI arguments for commands that specify a number of threads.
#[derive(Args, Debug)]
pub struct NumThreadsArg {
    #[arg(short = 'j', long, default_value_t = rayon::current_num_threads().max(1), value_parser = num_threads_parser)]
    /// The number of threads to use.
    pub num_threads: usize,
}

/// Creates a thread pool with the given number of threads.
pub fn get_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to create thread pool")?;
    log::info!("Using {} threads", thread_pool.current_num_threads());
    Ok(thread_pool)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
/// The maximum-flow algorithms available for connectivity computations.
pub enum FlowAlgorithm {
    /// Shortest augmenting paths.
    EdmondsKarp,
    /// Blocking flows on level graphs.
    #[default]
    Dinic,
}

impl MaxFlow for FlowAlgorithm {
    fn max_flow(
        &self,
        network: &mut FlowNetwork,
        source: usize,
        sink: usize,
        cutoff: usize,
    ) -> usize {
        match self {
            FlowAlgorithm::EdmondsKarp => EdmondsKarp.max_flow(network, source, sink, cutoff),
            FlowAlgorithm::Dinic => Dinic.max_flow(network, source, sink, cutoff),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
/// Formats for printing results.
pub enum OutputFormat {
    /// Tab-separated text, one item per line.
    Text,
    /// A JSON object.
    Json,
}

/// Creates all parent directories of the given file path.
pub fn create_parent_dir(file_path: impl AsRef<Path>) -> Result<()> {
    // ensure that the dst directory exists
    if let Some(parent_dir) = file_path.as_ref().parent() {
        std::fs::create_dir_all(parent_dir).with_context(|| {
            format!(
                "Failed to create the directory {:?}",
                parent_dir.to_string_lossy()
            )
        })?;
    }
    Ok(())
}

/// Parses a duration from a string.
/// For compatibility with Java, if no suffix is given, it is assumed to be in milliseconds.
/// You can use suffixes, the available ones are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` this is parsed as: 1 day, 2 hours, 3 minutes, 4 seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

/// Initializes the `env_logger` logger with a custom format including
/// timestamps with elapsed time since initialization.
pub fn init_env_logger() -> Result<()> {
    use jiff::SpanRound;
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span_round = SpanRound::new()
        .largest(jiff::Unit::Day)
        .smallest(jiff::Unit::Millisecond)
        .days_are_24_hours();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        let span = jiff::Span::new()
            .seconds(elapsed.as_secs() as i64)
            .milliseconds(elapsed.subsec_millis() as i64);
        let span = span.round(span_round).map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes "s"
    /// for seconds, "m" for minutes, "h" for hours, and "d" for days. If no
    /// suffix is provided it is assumed to be in milliseconds.
    /// Example: "1d2h3m4s567" is parsed as 1 day + 2 hours + 3 minutes + 4
    /// seconds + 567 milliseconds = 93784567 milliseconds.
    pub log_interval: Option<Duration>,

    #[arg(long, value_enum, global = true, default_value_t = FlowAlgorithm::Dinic, display_order = 1001)]
    /// The maximum-flow algorithm used to compute vertex connectivity.
    pub flow: FlowAlgorithm,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    Connectivity(connectivity::CliArgs),
    Cuts(cuts::CliArgs),
    Components(components::CliArgs),
    #[command(name = "knumbers")]
    KNumbers(knumbers::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "kconn", version)]
/// Tools to analyze the structural cohesion of undirected graphs.
///
/// Graphs are read as lists of arcs, one per line. Noteworthy environment
/// variables:
///
/// - RUST_LOG: configuration for env_logger
///   <https://docs.rs/env_logger/latest/env_logger/>
///
/// - RUST_MIN_STACK: minimum thread stack size (in bytes)
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

pub mod components;
pub mod connectivity;
pub mod cuts;
pub mod knumbers;

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::Connectivity(args) => {
            connectivity::main(cli.args, args)?;
        }
        SubCommands::Cuts(args) => {
            cuts::main(cli.args, args)?;
        }
        SubCommands::Components(args) => {
            components::main(cli.args, args)?;
        }
        SubCommands::KNumbers(args) => {
            knumbers::main(cli.args, args)?;
        }
    }

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty-prints seconds in a human-readable format.
fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let weeks = elapsed_seconds / (60 * 60 * 24 * 7);
    elapsed_seconds %= 60 * 60 * 24 * 7;
    let days = elapsed_seconds / (60 * 60 * 24);
    elapsed_seconds %= 60 * 60 * 24;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match weeks {
        0 => {}
        1 => result.push_str("1 week "),
        _ => result.push_str(&format!("{} weeks ", weeks)),
    }
    match days {
        0 => {}
        1 => result.push_str("1 day "),
        _ => result.push_str(&format!("{} days ", days)),
    }
    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_duration() -> Result<()> {
        assert_eq!(parse_duration("1d2h3m4s567")?, Duration::from_millis(93784567));
        assert_eq!(parse_duration("10s")?, Duration::from_secs(10));
        assert_eq!(parse_duration("250")?, Duration::from_millis(250));
        assert!(parse_duration("").is_err());
        assert!(parse_duration("3w").is_err());
        Ok(())
    }

    #[test]
    fn test_pretty_print_elapsed() {
        assert_eq!(pretty_print_elapsed(1.5), "1.500 seconds (1.5s)");
        assert_eq!(
            pretty_print_elapsed(3723.0),
            "1 hour 2 minutes 3.000 seconds (3723s)"
        );
    }

    #[test]
    fn test_read_ids() -> Result<()> {
        let text = "# a triangle\n0\t1\n1\t2\n\n2\t0\n2\t2\n5\n";
        let input = InputGraph::from_reader(Cursor::new(text), &ArcsArgs::default(), None)?;
        assert_eq!(input.graph.num_nodes(), 3);
        assert_eq!(input.graph.num_edges(), 3);
        assert_eq!(input.node("2")?, 2);
        assert!(input.node("7").is_err());
        assert_eq!(input.format([0, 2]), "0 2");
        assert!(InputGraph::from_reader(Cursor::new("a\tb\n"), &ArcsArgs::default(), None).is_err());
        Ok(())
    }

    #[test]
    fn test_read_labels() -> Result<()> {
        let text = "header\nsource,target\nalice,bob\nbob,carol\ncarol,alice\ncarol,dave\n";
        let args = ArcsArgs {
            separator: ',',
            lines_to_skip: 2,
            max_arcs: Some(3),
            labels: true,
            ..Default::default()
        };
        let input = InputGraph::from_reader(Cursor::new(text), &args, None)?;
        assert_eq!(input.graph.num_nodes(), 3);
        assert_eq!(input.node("carol")?, 2);
        assert!(input.node("dave").is_err());
        assert_eq!(input.label(1), "bob");
        assert_eq!(input.json(0), serde_json::json!("alice"));
        Ok(())
    }

    #[test]
    fn test_skip_comment_lines() -> Result<()> {
        let text = "# two skipped lines\n5\t6\n0\t1\n# a comment\n1\t2\n";
        let args = ArcsArgs {
            lines_to_skip: 2,
            ..Default::default()
        };
        let input = InputGraph::from_reader(Cursor::new(text), &args, None)?;
        assert_eq!(input.graph.num_edges(), 2);
        assert_eq!(input.graph.num_nodes(), 3);
        assert!(input.node("5").is_err());
        Ok(())
    }

    #[test]
    fn test_flow_algorithm() {
        let graph = kconn::graphs::generators::petersen();
        for flow in [FlowAlgorithm::EdmondsKarp, FlowAlgorithm::Dinic] {
            let mut network = FlowNetwork::new(&graph);
            assert_eq!(network.solve(&flow, 0, 7, usize::MAX), 3);
        }
    }
}

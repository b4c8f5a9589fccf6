use crate::domain::traits::CycleDetector;
use crate::infrastructure::cycle_sweep::SweepCycleDetector;
use crate::infrastructure::edge_tokens::read_edge_tokens;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::report::{render_json, render_text};
use crate::infrastructure::scc_kosaraju::KosarajuCycleDetector;
use crate::usecase::analyze::{analyze_graph, load_graph, AnalysisReport};
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalysisStats;
use anyhow::{anyhow, bail, Context, Result};
use std::env;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const PROMPT: &str = "Please enter valid source and destination vertices >> ";

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let mut stdin = BufReader::new(tokio::io::stdin());
    let rendered = run_with_input(args, &mut stdin).await?;
    print!("{rendered}");
    Ok(())
}

/// Runs a command, reading interactive answers from `input`, and returns the
/// rendered report.
pub async fn run_with_input<R>(args: &[String], input: &mut R) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Analyze {
            input: path,
            query,
            cycle_strategy,
            format,
            emit_events,
        } => {
            let tokens = read_edge_tokens(&path)
                .await
                .with_context(|| format!("reading edge list: {path}"))?;

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let outcome =
                analyze_tokens(&tokens, &path, query, cycle_strategy, Some(tx), input).await;
            let (report, stats) = finish_events(printer, outcome).await?;

            eprintln!(
                "summary: vertices={} edges={} distinct_edges={} discovered={} path_len={} new_edges={} has_cycle={}",
                stats.vertices,
                stats.edges,
                stats.distinct_edges,
                stats.discovered,
                stats.path_len,
                stats.new_edges,
                stats.has_cycle
            );

            match format {
                ReportFormat::Text => Ok(render_text(&report)),
                ReportFormat::Json => Ok(format!("{}\n", render_json(&report)?)),
            }
        }
    }
}

/// Builds the graph and runs the analysis. `sink` is owned so the event
/// channel closes on every exit path.
async fn analyze_tokens<R>(
    tokens: &[String],
    path: &str,
    query: Option<(i64, i64)>,
    cycle_strategy: CycleStrategy,
    sink: Option<mpsc::Sender<AppEvent>>,
    input: &mut R,
) -> Result<(AnalysisReport, AnalysisStats)>
where
    R: AsyncBufRead + Unpin,
{
    let graph = load_graph(tokens, &sink)
        .await
        .with_context(|| format!("building graph from: {path}"))?;

    let (src, dest) = match query {
        Some(q) => q,
        None => prompt_source_dest(input).await?,
    };

    let detector: &dyn CycleDetector = match cycle_strategy {
        CycleStrategy::Sweep => &SweepCycleDetector,
        CycleStrategy::Scc => &KosarajuCycleDetector,
    };

    analyze_graph(graph, src, dest, detector, sink).await
}

/// Waits for the event printer to flush before handing back `outcome`,
/// failed or not.
async fn finish_events<T>(printer: Option<JoinHandle<()>>, outcome: Result<T>) -> Result<T> {
    if let Some(handle) = printer {
        handle.await.ok();
    }
    outcome
}

/// Asks for a source and destination until a line holds two integers.
async fn prompt_source_dest<R>(input: &mut R) -> Result<(i64, i64)>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    loop {
        eprint!("{PROMPT}");
        line.clear();
        let read = input
            .read_line(&mut line)
            .await
            .context("reading source and destination vertices")?;
        if read == 0 {
            bail!("no source and destination vertices given");
        }

        let mut parts = line.split_whitespace().map(str::parse::<i64>);
        if let (Some(Ok(src)), Some(Ok(dest))) = (parts.next(), parts.next()) {
            return Ok((src, dest));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleStrategy {
    Sweep,
    Scc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug)]
enum Cli {
    Analyze {
        input: String,
        query: Option<(i64, i64)>,
        cycle_strategy: CycleStrategy,
        format: ReportFormat,
        emit_events: bool,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> analyze --in/--input <edges.txt> [--src <id> --dest <id>]
        //       [--cycle-strategy sweep|scc] [--format text|json] [--emit-events]
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "analyze" => Self::parse_analyze(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_analyze(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut src: Option<i64> = None;
        let mut dest: Option<i64> = None;
        let mut cycle_strategy = CycleStrategy::Sweep;
        let mut format = ReportFormat::Text;
        let mut emit_events = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--src" | "--source" => {
                    i += 1;
                    src = Some(parse_vertex_arg("--src", args.get(i))?);
                }
                "--dest" | "--destination" => {
                    i += 1;
                    dest = Some(parse_vertex_arg("--dest", args.get(i))?);
                }
                "--cycle-strategy" => {
                    i += 1;
                    cycle_strategy = match args.get(i).map(String::as_str) {
                        Some("sweep") => CycleStrategy::Sweep,
                        Some("scc") => CycleStrategy::Scc,
                        other => {
                            return Err(anyhow!(format!(
                                "invalid --cycle-strategy: {}\n\n{}",
                                other.unwrap_or("<missing>"),
                                usage()
                            )))
                        }
                    };
                }
                "--format" => {
                    i += 1;
                    format = match args.get(i).map(String::as_str) {
                        Some("text") => ReportFormat::Text,
                        Some("json") => ReportFormat::Json,
                        other => {
                            return Err(anyhow!(format!(
                                "invalid --format: {}\n\n{}",
                                other.unwrap_or("<missing>"),
                                usage()
                            )))
                        }
                    };
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;
        let query = match (src, dest) {
            (Some(s), Some(d)) => Some((s, d)),
            (None, None) => None,
            _ => {
                return Err(anyhow!(format!(
                    "--src and --dest must be given together\n\n{}",
                    usage()
                )))
            }
        };

        Ok(Cli::Analyze {
            input,
            query,
            cycle_strategy,
            format,
            emit_events,
        })
    }
}

fn parse_vertex_arg(flag: &str, value: Option<&String>) -> Result<i64> {
    let value = value.ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))?;
    value
        .parse::<i64>()
        .map_err(|_| anyhow!(format!("invalid {flag} vertex: {value}\n\n{}", usage())))
}

fn usage() -> &'static str {
    "Usage:\n  analyze --in/--input <edges.txt> [--src <id> --dest <id>] [--cycle-strategy sweep|scc] [--format text|json] [--emit-events]\n\nInput:\n  Whitespace-separated source/destination vertex pairs; vertex ids are the dense integers 0..N-1.\n  Without --src/--dest the vertices are asked for on stdin.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr."
}

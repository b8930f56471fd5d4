//! Graph ADT CLI: drive any storage strategy from a shell or a script

mod command;
mod session;

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use graph_adt::{GraphConfig, Strategy};
use serde::Serialize;
use session::{EdgeRow, Output, Session};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graph-adt-cli", version, about = "Graph ADT storage strategy CLI")]
struct Cli {
    /// Storage strategy (edge_list, adjacency_list, adjacency_map, adjacency_matrix)
    #[arg(long, global = true, env = "GRAPH_ADT_STRATEGY")]
    strategy: Option<String>,

    /// Build a directed graph
    #[arg(long, global = true)]
    directed: bool,

    /// JSON graph configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive REPL
    Shell,
    /// Execute a command script
    Run {
        /// Script file, one command per line
        script: PathBuf,
    },
    /// Execute a script against every strategy and compare the results
    Compare {
        /// Script file, one command per line
        script: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = resolve_config(&cli).and_then(|config| match &cli.command {
        Commands::Shell => run_shell(&config, cli.format),
        Commands::Run { script } => run_script(&config, script, cli.format),
        Commands::Compare { script } => run_compare(&config, script, cli.format),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Config file first, then command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<GraphConfig> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::default(),
    };
    if let Some(name) = &cli.strategy {
        config = config.with_strategy_name(name)?;
    }
    if cli.directed {
        config = config.with_directed(true);
    }
    info!("Using {} graph, directed={}", config.strategy, config.directed);
    Ok(config)
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read script {:?}", path))
}

fn run_script(config: &GraphConfig, path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let script = read_script(path)?;
    let mut session = Session::new(config);
    let mut failed = None;
    session
        .run_script(&script, |output| {
            if let Err(e) = print_output(&output, format) {
                failed.get_or_insert(e);
            }
        })
        .with_context(|| format!("{:?}", path))?;
    match failed {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[derive(Serialize)]
struct Comparison {
    strategy: Strategy,
    directed: bool,
    vertex_count: Option<usize>,
    edge_count: Option<usize>,
    error: Option<String>,
}

fn run_compare(config: &GraphConfig, path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let script = read_script(path)?;

    let rows: Vec<Comparison> = Strategy::ALL
        .iter()
        .map(|&strategy| {
            let mut session = Session::new(&GraphConfig::new(strategy, config.directed));
            match session.run_script(&script, |_| {}) {
                Ok(_) => {
                    let stats = session.statistics();
                    Comparison {
                        strategy,
                        directed: stats.directed,
                        vertex_count: Some(stats.vertex_count),
                        edge_count: Some(stats.edge_count),
                        error: None,
                    }
                }
                Err(e) => {
                    warn!("{} failed at {}", strategy, e);
                    Comparison {
                        strategy,
                        directed: config.directed,
                        vertex_count: None,
                        edge_count: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            let mut table = new_table(&["strategy", "directed", "vertices", "edges", "status"]);
            for row in &rows {
                table.add_row(vec![
                    row.strategy.to_string(),
                    row.directed.to_string(),
                    optional(row.vertex_count),
                    optional(row.edge_count),
                    row.error.clone().unwrap_or_else(|| "ok".to_string()),
                ]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn run_shell(config: &GraphConfig, format: OutputFormat) -> anyhow::Result<()> {
    println!("Graph ADT Interactive Shell ({})", config.strategy);
    println!("Type commands, or :help for commands. :quit to exit.\n");

    let mut session = Session::new(config);
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        eprint!("graph> ");

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "" => continue,
            ":quit" | ":exit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                for (usage, about) in command::HELP {
                    println!("  {:<26} {}", usage, about);
                }
                println!("  {:<26} {}", ":quit", "Exit shell");
            }
            input => match session.execute_line(input) {
                Ok(Some(output)) => print_output(&output, format)?,
                Ok(None) => {}
                Err(e) => {
                    warn!("Command failed: {:?}", e);
                    eprintln!("Error: {}", e);
                }
            },
        }
    }

    println!("Bye!");
    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn optional(value: Option<usize>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn edge_table(rows: &[EdgeRow]) -> Table {
    let mut table = new_table(&["id", "from", "to", "weight"]);
    for row in rows {
        table.add_row(vec![
            row.id.to_string(),
            row.from.clone(),
            row.to.clone(),
            row.weight.clone().unwrap_or_default(),
        ]);
    }
    table
}

fn print_output(output: &Output, format: OutputFormat) -> anyhow::Result<()> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string(output)?);
        return Ok(());
    }

    match output {
        Output::Done(message) => println!("{}", message),
        Output::Degree {
            vertex,
            direction,
            degree,
        } => println!("{} ({}): {}", vertex, direction, degree),
        Output::Vertices(rows) => {
            let mut table = new_table(&["id", "name"]);
            for row in rows {
                table.add_row(vec![row.id.to_string(), row.name.clone()]);
            }
            println!("{}", table);
            println!("{} vertex(es)", rows.len());
        }
        Output::Edges(rows) if rows.is_empty() => println!("(no edges)"),
        Output::Edges(rows) => {
            println!("{}", edge_table(rows));
            println!("{} edge(s)", rows.len());
        }
        Output::Stats(stats) => {
            println!("Strategy: {}", stats.strategy);
            println!("Directed: {}", stats.directed);
            println!("Vertices: {}", stats.vertex_count);
            println!("Edges:    {}", stats.edge_count);
        }
    }
    Ok(())
}

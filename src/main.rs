//! Command line front end: loads a graph description, runs the search and prints
//! the report (or a DOT drawing, `dfs_classify graph.txt 0 --format dot | dot -Tsvg > dfs.svg`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dfs_classify::{GraphLoadError, input, output, run_search};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Tree, paths and edge classes as plain text
    Report,
    /// Classified graph in DOT format
    Dot,
}

/// Depth-first search with edge classification.
#[derive(Parser, Debug)]
#[command(name = "dfs_classify")]
#[command(about = "Classifies the edges of a directed graph by depth-first search")]
struct Args {
    /// Graph description: vertex count followed by `start end weight` triples.
    file: PathBuf,

    /// Source vertex of the search.
    #[arg(default_value_t = 0)]
    source: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Report)]
    format: Format,

    /// Write the output to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let graph = match input::from_file(&args.file) {
        Ok(graph) => graph,
        Err(GraphLoadError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            eprintln!("File {} not found.", args.file.display());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("failed to load {}: {}", args.file.display(), e);
            eprintln!("Could not load {}: {}", args.file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "loaded {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.edge_count()
    );

    let rendered = run_search(&graph, args.source).and_then(|dfs| match args.format {
        Format::Report => output::render_report(&dfs),
        Format::Dot => output::draw_search(&dfs),
    });
    let rendered = match rendered {
        Ok(rendered) => rendered,
        Err(e) => {
            error!("search from {} failed: {}", args.source, e);
            eprintln!("Search from vertex {} failed: {}", args.source, e);
            return ExitCode::FAILURE;
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = output::to_file(&rendered, path) {
                eprintln!("Could not write {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            info!("wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }
    ExitCode::SUCCESS
}

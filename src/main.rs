#![allow(clippy::needless_pass_by_value)]

use std::{
    io::{stdout, BufWriter, Write},
    process,
};

use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use sketchmer::{
    cli::{Args, OutputFormat},
    ingest, query, Sketch,
};

/// Initialize the tracing subscriber with environment filter.
///
/// Set `RUST_LOG=sketchmer=debug` to see debug output.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

/// Per-window counts for one query, used for JSON serialization.
#[derive(Serialize)]
struct QueryCounts {
    query: String,
    counts: Vec<i64>,
}

fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let args = Args::parse();

    if !args.quiet {
        eprintln!(
            "{}: {}",
            "k-length".bold(),
            args.k.to_string().blue().bold()
        );
        eprintln!(
            "{}: {}",
            "width".bold(),
            args.width.to_string().blue().bold()
        );
        eprintln!(
            "{}: {}",
            "depth".bold(),
            args.depth.to_string().blue().bold()
        );
        if let Some(seed) = args.seed {
            eprintln!("{}: {}", "seed".bold(), seed.to_string().blue().bold());
        }
        eprintln!(
            "{}: {} bases",
            "reference".bold(),
            args.reference.len().to_string().blue().bold()
        );
        eprintln!(
            "{}: {}",
            "queries".bold(),
            args.queries.len().to_string().blue().bold()
        );
        eprintln!();
    }

    let mut sketch = match args.seed {
        Some(seed) => Sketch::with_seed(args.width, args.depth, seed),
        None => Sketch::new(args.width, args.depth),
    }
    .unwrap_or_else(|e| {
        eprintln!(
            "{}\n {}",
            "Problem with arguments:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    });

    let added = ingest(&mut sketch, args.k, args.reference.as_bytes()).unwrap_or_else(|e| {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    });

    if !args.quiet {
        eprintln!(
            "{}: {} k-mers",
            "ingested".bold(),
            added.to_string().green().bold()
        );
    }

    let results = run_queries(&sketch, &args);

    if let Err(e) = output_results(&results, args.format) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}

fn run_queries(sketch: &Sketch, args: &Args) -> Vec<QueryCounts> {
    args.queries
        .iter()
        .map(|q| {
            let windows = (q.len() + 1).saturating_sub(args.k);
            let mut counts = vec![0i64; windows];
            // k was validated at the argument boundary, and the buffer is
            // sized to the window count.
            let written = query(sketch, args.k, q.as_bytes(), &mut counts).unwrap_or_else(|e| {
                eprintln!(
                    "{}\n {}",
                    "Application error:".blue().bold(),
                    e.to_string().blue()
                );
                process::exit(1);
            });
            counts.truncate(written);
            QueryCounts {
                query: q.clone(),
                counts,
            }
        })
        .collect()
}

fn output_results(results: &[QueryCounts], format: OutputFormat) -> std::io::Result<()> {
    let mut buf = BufWriter::new(stdout());
    match format {
        OutputFormat::Tsv => {
            for result in results {
                writeln!(buf, "# {}", result.query)?;
                for (i, count) in result.counts.iter().enumerate() {
                    writeln!(buf, "{i}\t{count}")?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut buf, results)?;
            writeln!(buf)?;
        }
    }
    buf.flush()
}

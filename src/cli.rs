//! Command-line interface definition.

use clap::{Parser, ValueEnum};

use crate::stream::KmerLength;

/// Approximate k-mer frequencies with a log-counter count-min sketch.
///
/// Ingests every canonical k-mer of the reference sequence, then reports an
/// estimated count for every k-mer window of each query sequence. Windows
/// containing a non-ACGT base are reported as -1.
///
/// # Examples
///
/// ```bash
/// # Build a 1024x10 sketch over a reference and query one sequence
/// sketchmer 4 1024 10 ACGTACG ACGT
///
/// # Reproducible run with a fixed seed, JSON output
/// sketchmer 21 65536 8 --seed 777 --format json $(cat ref.txt) $(cat q.txt)
/// ```
#[derive(Parser, Debug)]
#[command(name = "sketchmer")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// K-mer length (1-127)
    #[arg(value_parser = parse_k)]
    pub k: usize,

    /// Sketch width: counter columns per row
    #[arg(value_parser = parse_nonzero)]
    pub width: usize,

    /// Sketch depth: number of independently hashed rows
    #[arg(value_parser = parse_nonzero)]
    pub depth: usize,

    /// Reference sequence whose k-mers populate the sketch
    pub reference: String,

    /// Query sequences to look up against the sketch
    pub queries: Vec<String>,

    /// Output format for query counts
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: OutputFormat,

    /// Master seed for row hashing and counter randomness
    /// (seeded from OS entropy if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress informational output (only output query counts)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for per-window query counts.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Tab-separated values (window_index\tcount), one block per query
    #[default]
    Tsv,
    /// JSON array with one object per query
    Json,
}

fn parse_k(s: &str) -> Result<usize, String> {
    let k: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    KmerLength::new(k).map_err(|e| e.to_string())?;
    Ok(k)
}

fn parse_nonzero(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if value == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_arguments() {
        let args = Args::parse_from(["sketchmer", "4", "1024", "10", "ACGTACG", "ACGT", "CGTA"]);
        assert_eq!(args.k, 4);
        assert_eq!(args.width, 1024);
        assert_eq!(args.depth, 10);
        assert_eq!(args.reference, "ACGTACG");
        assert_eq!(args.queries, vec!["ACGT", "CGTA"]);
        assert!(args.seed.is_none());
    }

    #[test]
    fn rejects_out_of_range_k() {
        assert!(Args::try_parse_from(["sketchmer", "0", "1024", "10", "ACGT"]).is_err());
        assert!(Args::try_parse_from(["sketchmer", "128", "1024", "10", "ACGT"]).is_err());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Args::try_parse_from(["sketchmer", "4", "0", "10", "ACGT"]).is_err());
        assert!(Args::try_parse_from(["sketchmer", "4", "1024", "0", "ACGT"]).is_err());
    }

    #[test]
    fn accepts_seed_flag() {
        let args = Args::parse_from(["sketchmer", "4", "40", "40", "ACGTACG", "--seed", "777"]);
        assert_eq!(args.seed, Some(777));
    }
}

//! Minimax versus alpha-beta comparison CLI.
//!
//! Searches random positions (or one setup file) with both algorithms,
//! fails if they ever disagree, and writes node counts as JSONL.
//!
//! Usage:
//!   cargo run --release --bin compare -- [OPTIONS]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use stake_raid::analysis::{self, CompareConfig, Comparison, Summary};
use stake_raid::board::MAX_SIZE;
use stake_raid::engine::Engine;

#[derive(Parser, Debug)]
#[command(name = "compare", about = "Compare minimax and alpha-beta node counts")]
struct Cli {
    /// Number of random positions to compare.
    #[arg(long, default_value_t = 20)]
    positions: usize,

    /// Board side.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=MAX_SIZE as i64))]
    size: u8,

    /// Search depth.
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Fraction of cells occupied before searching.
    #[arg(long, default_value_t = 0.25, value_parser = parse_fill)]
    fill: f64,

    /// Largest cell weight.
    #[arg(long, default_value_t = 9)]
    max_weight: i32,

    /// Number of worker threads.
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Random seed, 0 for entropy.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Compare a single setup file instead of random positions.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file path (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress the summary on stderr.
    #[arg(short, long, default_value = "false")]
    quiet: bool,
}

fn parse_fill(s: &str) -> Result<f64, String> {
    let fill: f64 = s.parse().map_err(|_| format!("invalid fill '{}'", s))?;
    if !(0.0..=1.0).contains(&fill) {
        return Err(format!("fill {} must be between 0 and 1", fill));
    }
    Ok(fill)
}

fn collect(cli: &Cli) -> Result<Vec<Comparison>, String> {
    if let Some(path) = &cli.input {
        let engine = Engine::load(path).map_err(|e| e.to_string())?;
        let record = analysis::compare_setup(engine.setup()).map_err(|e| e.to_string())?;
        return Ok(vec![record]);
    }

    let config = CompareConfig {
        positions: cli.positions,
        size: cli.size as usize,
        depth: cli.depth,
        fill: cli.fill,
        max_weight: cli.max_weight,
        threads: cli.threads,
        seed: cli.seed,
    };
    if !cli.quiet {
        eprintln!(
            "Compare: {} positions, {}x{}, depth {}, fill {:.2}, {} threads",
            config.positions, config.size, config.size, config.depth, config.fill, config.threads
        );
    }
    analysis::run_comparisons(&config).map_err(|e| e.to_string())
}

fn write_records(records: &[Comparison], output: Option<&PathBuf>) -> io::Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            analysis::write_jsonl(records, &mut writer)
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            analysis::write_jsonl(records, &mut writer)?;
            writer.flush()
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let start = Instant::now();
    let records = match collect(&cli) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    if let Err(e) = write_records(&records, cli.output.as_ref()) {
        eprintln!("error: failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    if !cli.quiet {
        let summary = Summary::from_records(&records);
        eprintln!(
            "Compared {} positions in {:.2}s: minimax {} nodes, alpha-beta {} nodes ({:.1}% saved, {} cutoffs)",
            summary.positions,
            elapsed.as_secs_f64(),
            summary.minimax_nodes,
            summary.alphabeta_nodes,
            summary.savings() * 100.0,
            summary.cutoffs
        );
    }
    ExitCode::SUCCESS
}

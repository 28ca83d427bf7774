//! stake-raid -- finds the best Stake and Raid move for a setup file.
//!
//! Reads the setup (board size, algorithm, maximizing player, depth,
//! weights and initial board), runs one search, writes the chosen move and
//! resulting board to the output file and echoes it to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use stake_raid::engine::{Engine, EngineError};
use stake_raid::protocol::OutputFormat;
use stake_raid::search::Algorithm;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Minimax,
    Alphabeta,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Minimax => Algorithm::Minimax,
            AlgorithmArg::Alphabeta => Algorithm::AlphaBeta,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "stake-raid", version, about = "Minimax / alpha-beta move finder for Stake and Raid")]
struct Cli {
    /// Setup file; a `.json` extension selects the JSON form.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Where to write the chosen move and board.
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Override the algorithm named in the setup file.
    #[arg(long, value_enum)]
    algorithm: Option<AlgorithmArg>,

    /// Override the depth limit named in the setup file.
    #[arg(long)]
    depth: Option<u32>,

    /// Write a JSON report instead of the text form.
    #[arg(long, default_value = "false")]
    json: bool,

    /// Do not echo the result to stdout.
    #[arg(short, long, default_value = "false")]
    quiet: bool,
}

fn run(cli: &Cli) -> Result<(), EngineError> {
    let mut engine = Engine::load(&cli.input)?;
    if let Some(algorithm) = cli.algorithm {
        engine.set_algorithm(algorithm.into());
    }
    if let Some(depth) = cli.depth {
        engine.set_depth(depth);
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let rendered = engine.run_to_file(&cli.output, format)?;
    if !cli.quiet {
        println!("{}", rendered.trim_end());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

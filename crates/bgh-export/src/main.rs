//! Backgammon Hub exporter.
//!
//! Reads an analysed match (or a hint position) as JSON and writes it in
//! the hub's line format.

mod config;

use anyhow::Context;
use bg_analysis::{HintRequest, MatchRecord};
use bgh::Exporter;
use clap::{Parser, Subcommand};
use config::ExportConfig;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Destination meaning standard output.
const STDOUT: &str = "-";

#[derive(Parser)]
#[command(name = "bgh-export")]
#[command(about = "Export analysed backgammon matches for Backgammon Hub")]
struct Cli {
    /// Configuration file (defaults to bghub.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export every game of an analysed match
    ExportMatch {
        /// Analysed match (JSON)
        input: PathBuf,
        /// Destination file, `-` for standard output
        output: Option<String>,
    },
    /// Export the hint for a pending decision
    ExportHint {
        /// Hint position (JSON)
        input: PathBuf,
        /// Destination file, `-` for standard output
        output: Option<String>,
    },
    /// Export a single record of an analysed match
    ExportMove {
        /// Analysed match (JSON)
        input: PathBuf,
        /// Game number, starting at 1
        #[arg(short, long, default_value = "1")]
        game: usize,
        /// Record index within the game, starting at 0
        #[arg(short, long)]
        record: usize,
        /// Destination file, `-` for standard output
        output: Option<String>,
    },
}

impl Commands {
    fn output(&self) -> Option<&str> {
        match self {
            Commands::ExportMatch { output, .. }
            | Commands::ExportHint { output, .. }
            | Commands::ExportMove { output, .. } => output.as_deref().filter(|o| !o.is_empty()),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let Some(destination) = cli.command.output() else {
        eprintln!("You must specify a file to export to.");
        return Ok(ExitCode::FAILURE);
    };

    let config = ExportConfig::load(cli.config.as_deref())?;
    tracing::debug!("Configuration: {:?}", config);
    let exporter = Exporter::new(config.analysis, config.output);

    let result = run(&exporter, &cli.command, destination);
    if result.is_err() && destination != STDOUT {
        // An interrupted export is not valid output.
        if let Err(e) = std::fs::remove_file(destination) {
            tracing::warn!("Failed to remove partial export {}: {}", destination, e);
        }
    }
    result?;
    Ok(ExitCode::SUCCESS)
}

fn run(exporter: &Exporter, command: &Commands, destination: &str) -> anyhow::Result<()> {
    let mut out = open_destination(destination)?;
    match command {
        Commands::ExportMatch { input, .. } => {
            let record: MatchRecord = read_json(input)?;
            tracing::info!("Exporting {} games to {}", record.games.len(), destination);
            exporter.export_match(&record, &mut out)?;
        }
        Commands::ExportHint { input, .. } => {
            let hint: HintRequest = read_json(input)?;
            exporter.export_hint(&hint, &mut out)?;
        }
        Commands::ExportMove {
            input, game, record, ..
        } => {
            let record_set: MatchRecord = read_json(input)?;
            let selected = game
                .checked_sub(1)
                .and_then(|index| record_set.games.get(index))
                .with_context(|| format!("No game {} in {}", game, input.display()))?;
            exporter.export_move(selected, *record, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn open_destination(destination: &str) -> anyhow::Result<Box<dyn Write>> {
    if destination == STDOUT {
        Ok(Box::new(std::io::stdout().lock()))
    } else {
        let file = File::create(destination)
            .with_context(|| format!("Failed to create {}", destination))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

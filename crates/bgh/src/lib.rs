//! Backgammon Hub line protocol.
//!
//! This crate renders analysed backgammon matches in the colon-delimited
//! text format read by the hub client.
//!
//! # Records
//!
//! - Game header: `<game>:<score0>:<score1>:<variant>:<length>:<cube>:<crawford>:<jacoby>`
//! - Move intro: `~<B|W>:<dice>` or `~<B|W>:Resign:<points>`
//! - Move analysis: luck and skill fields, then one line per candidate move
//! - Cube analysis: annotation, three ranked cube actions and the verdict
//! - Game summary: `>CP`, `>CB`, `>OV`, `>LK` and `>FB` lines, players 1 then 0
//!
//! Unavailable values are written as `na` (or `0` for the absolute rating)
//! so every record type has a fixed number of fields.

mod export;
mod options;
mod token;
pub mod writer;

pub use export::Exporter;
pub use options::OutputOptions;
pub use token::Token;

use bg_analysis::AnalysisError;
use thiserror::Error;

/// Errors that can occur while exporting.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A record could not be analysed.
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
    /// The requested record does not exist in the game.
    #[error("Record {index} out of range ({count} records)")]
    NoSuchRecord {
        /// Requested record index.
        index: usize,
        /// Number of records in the game.
        count: usize,
    },
    /// Writing to the destination failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Output options of the exporter.

use bg_core::EquityFormat;
use serde::{Deserialize, Serialize};

/// What the exporter includes and how numbers are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Decimal places of equities.
    pub digits: usize,
    /// Show match play equities as match-winning chances.
    pub mwc: bool,
    /// Show match-winning chances as percentages.
    pub match_percent: bool,
    /// Emit move and cube analysis.
    pub include_analysis: bool,
    /// Emit record annotations.
    pub include_annotations: bool,
    /// Candidate moves shown per roll; the played move is always shown.
    pub moves_shown: usize,
    /// Append win/gammon/backgammon percentages to evaluated moves.
    pub move_probabilities: bool,
    /// Prefix cube analyses with the position's percentages.
    pub cube_probabilities: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            digits: 3,
            mwc: true,
            match_percent: true,
            include_analysis: true,
            include_annotations: true,
            moves_shown: 5,
            move_probabilities: true,
            cube_probabilities: true,
        }
    }
}

impl OutputOptions {
    /// Equity text format for these options.
    pub fn equity_format(&self) -> EquityFormat {
        EquityFormat {
            digits: self.digits,
            mwc: self.mwc,
            match_percent: self.match_percent,
        }
    }
}

//! Core types for backgammon analysis.
//!
//! This crate provides the fundamental types shared by the analysis and
//! export crates:
//! - [`Player`] for the two sides of a game
//! - [`Board`] for checker distribution
//! - [`Dice`] for the rolled dice
//! - [`CubeContext`] and [`MatchEquity`] for the cube and score situation
//! - Equity to match-winning-chance conversion and equity text formatting

mod board;
mod cube;
mod dice;
mod equity;
mod player;

pub use board::{Board, BoardError, BAR, CHECKERS, POINTS};
pub use cube::{CrawfordState, CubeContext, MatchEquity};
pub use dice::Dice;
pub use equity::{
    equity_diff, equity_to_mwc, format_equity, format_equity_diff, mwc_to_equity, EquityFormat,
    EquityUnit,
};
pub use player::Player;

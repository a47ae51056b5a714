//! Game and match statistics.
//!
//! A [`GameStatistics`] accumulates raw error and luck totals while a game
//! is analysed. Totals of several games are folded into a
//! [`MatchStatistics`]. Rates are only ever derived from raw totals by
//! [`GameStatistics::finalize`], never summed.

use std::ops::AddAssign;

use crate::config::AnalysisConfig;
use crate::rating::{LuckRating, Rating};
use bg_core::Player;
use serde::{Deserialize, Serialize};

/// An error or luck amount, normalized to a cube of one and in
/// match-winning chance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorTotal {
    /// Normalized equity.
    pub normalized: f32,
    /// Match-winning chance (cube-scaled equity in money play).
    pub unnormalized: f32,
}

impl ErrorTotal {
    pub fn new(normalized: f32, unnormalized: f32) -> Self {
        Self {
            normalized,
            unnormalized,
        }
    }
}

impl AddAssign for ErrorTotal {
    fn add_assign(&mut self, rhs: Self) {
        self.normalized += rhs.normalized;
        self.unnormalized += rhs.unnormalized;
    }
}

/// Raw totals of one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerTotals {
    /// Checker plays made, forced ones included.
    pub total_moves: u32,
    /// Checker plays with more than one legal move.
    pub unforced_moves: u32,
    /// Close, missed or actual cube decisions.
    pub close_cube: u32,
    /// Sum of checker play errors (non-positive).
    pub chequer_error: ErrorTotal,
    /// Sum of cube errors (non-positive).
    pub cube_error: ErrorTotal,
    /// Sum of the luck of analysed rolls.
    pub luck: ErrorTotal,
    /// Rolls with an analysed luck value.
    pub luck_moves: u32,
}

impl PlayerTotals {
    fn combined_error(&self) -> ErrorTotal {
        let mut total = self.chequer_error;
        total += self.cube_error;
        total
    }
}

impl AddAssign<&PlayerTotals> for PlayerTotals {
    fn add_assign(&mut self, rhs: &PlayerTotals) {
        self.total_moves += rhs.total_moves;
        self.unforced_moves += rhs.unforced_moves;
        self.close_cube += rhs.close_cube;
        self.chequer_error += rhs.chequer_error;
        self.cube_error += rhs.cube_error;
        self.luck += rhs.luck;
        self.luck_moves += rhs.luck_moves;
    }
}

/// Statistics accumulated over one game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStatistics {
    players: [PlayerTotals; 2],
}

impl GameStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw totals of one player.
    pub fn player(&self, player: Player) -> &PlayerTotals {
        &self.players[player.index()]
    }

    /// Records a checker play. Errors of forced moves are not counted.
    pub fn add_move(
        &mut self,
        player: Player,
        normalized_error: f32,
        unnormalized_error: f32,
        is_unforced: bool,
    ) {
        let totals = &mut self.players[player.index()];
        totals.total_moves += 1;
        if is_unforced {
            totals.unforced_moves += 1;
            totals.chequer_error += ErrorTotal::new(normalized_error, unnormalized_error);
        }
    }

    /// Records a cube decision.
    pub fn add_cube_decision(
        &mut self,
        player: Player,
        normalized_error: f32,
        unnormalized_error: f32,
        is_close: bool,
    ) {
        let totals = &mut self.players[player.index()];
        if is_close {
            totals.close_cube += 1;
        }
        totals.cube_error += ErrorTotal::new(normalized_error, unnormalized_error);
    }

    /// Records the luck of a roll.
    pub fn add_luck(&mut self, player: Player, normalized_luck: f32, unnormalized_luck: f32) {
        let totals = &mut self.players[player.index()];
        totals.luck += ErrorTotal::new(normalized_luck, unnormalized_luck);
        totals.luck_moves += 1;
    }

    /// Adds the raw totals of another game.
    pub fn merge(&mut self, other: &GameStatistics) {
        for (mine, theirs) in self.players.iter_mut().zip(&other.players) {
            *mine += theirs;
        }
    }

    /// Derives the summary of both players.
    ///
    /// `match_length` is 0 for money play.
    pub fn finalize(&self, match_length: u32, config: &AnalysisConfig) -> DerivedStats {
        let all_moves = self.players[0].total_moves + self.players[1].total_moves;
        let players = Player::ALL.map(|player| {
            summarize(self.player(player), all_moves, match_length, config)
        });
        DerivedStats { players }
    }
}

fn summarize(
    totals: &PlayerTotals,
    all_moves: u32,
    match_length: u32,
    config: &AnalysisConfig,
) -> PlayerSummary {
    let rated = totals.unforced_moves > 0;
    let snowie_moves = if totals.total_moves > 0 { all_moves } else { 0 };
    let summary = |total: ErrorTotal, decisions: u32| {
        ErrorSummary::new(total, decisions, snowie_moves, rated)
    };

    let chequer = summary(totals.chequer_error, totals.unforced_moves);
    let cube = summary(totals.cube_error, totals.close_cube);
    let overall = summary(
        totals.combined_error(),
        totals.unforced_moves + totals.close_cube,
    );

    let absolute_rating = (totals.unforced_moves + totals.close_cube > 0).then(|| {
        absolute_rating(
            per_move(totals.chequer_error.normalized, totals.unforced_moves).unwrap_or(0.0),
            per_move(totals.cube_error.normalized, totals.close_cube).unwrap_or(0.0),
            match_length,
            config.rating_offset,
        )
    });

    PlayerSummary {
        chequer,
        cube,
        overall,
        luck: LuckSummary::new(totals.luck, totals.luck_moves),
        absolute_rating,
    }
}

fn per_move(total: f32, moves: u32) -> Option<f32> {
    (moves > 0).then(|| total / moves as f32)
}

/// FIBS-style rating from per-move normalized chequer and cube error rates.
///
/// `match_length` 0 (money play) drops the match-length terms.
pub fn absolute_rating(chequer_rate: f32, cube_rate: f32, match_length: u32, offset: f32) -> f32 {
    let (chequer_weight, cube_weight) = if match_length == 0 {
        (8798.0, 863.0)
    } else {
        let n = match_length as f32;
        (8798.0 + 25526.0 / n, 863.0 - 519.0 / n)
    };
    offset + chequer_rate * chequer_weight + cube_rate * cube_weight
}

/// Error summary of one category.
///
/// Values keep the sign of the raw totals (non-positive); rates are
/// scaled by 1000 (normalized) and 100 (percent).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub total_normalized: f32,
    pub total_percent: f32,
    pub rate_normalized: Option<f32>,
    pub rate_percent: Option<f32>,
    /// Total error over the moves of both players, scaled by 1000.
    pub snowie: Option<f32>,
    pub rating: Rating,
}

impl ErrorSummary {
    fn new(total: ErrorTotal, decisions: u32, snowie_moves: u32, rated: bool) -> Self {
        let rate = per_move(total.normalized, decisions);
        let rating = if rated {
            Rating::from_error(rate.unwrap_or(0.0))
        } else {
            Rating::NotApplicable
        };
        Self {
            total_normalized: total.normalized,
            total_percent: total.unnormalized * 100.0,
            rate_normalized: rate.map(|r| r * 1000.0),
            rate_percent: per_move(total.unnormalized, decisions).map(|r| r * 100.0),
            snowie: per_move(total.normalized, snowie_moves).map(|r| r * 1000.0),
            rating,
        }
    }
}

/// Luck summary of one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LuckSummary {
    pub total_normalized: f32,
    pub total_percent: f32,
    pub rate_normalized: Option<f32>,
    pub rate_percent: Option<f32>,
    pub rating: Option<LuckRating>,
}

impl LuckSummary {
    fn new(total: ErrorTotal, moves: u32) -> Self {
        let rate = per_move(total.normalized, moves);
        Self {
            total_normalized: total.normalized,
            total_percent: total.unnormalized * 100.0,
            rate_normalized: rate.map(|r| r * 1000.0),
            rate_percent: per_move(total.unnormalized, moves).map(|r| r * 100.0),
            rating: rate.map(LuckRating::from_average),
        }
    }
}

/// Derived statistics of one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub chequer: ErrorSummary,
    pub cube: ErrorSummary,
    pub overall: ErrorSummary,
    pub luck: LuckSummary,
    /// Absent for players without unforced moves or close cube decisions.
    pub absolute_rating: Option<f32>,
}

/// Derived statistics of both players.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    players: [PlayerSummary; 2],
}

impl DerivedStats {
    pub fn player(&self, player: Player) -> &PlayerSummary {
        &self.players[player.index()]
    }
}

/// Running totals over the games of a match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStatistics {
    total: GameStatistics,
    games: u32,
}

impl MatchStatistics {
    /// Empty accumulator for the start of a match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds the totals of a finished game in.
    pub fn fold_in(&mut self, game: &GameStatistics) {
        self.total.merge(game);
        self.games += 1;
    }

    /// Number of games folded in so far.
    pub fn games(&self) -> u32 {
        self.games
    }

    /// Raw totals over all games folded in.
    pub fn totals(&self) -> &GameStatistics {
        &self.total
    }

    /// Derives the match summary.
    pub fn finish(self, match_length: u32, config: &AnalysisConfig) -> DerivedStats {
        self.total.finalize(match_length, config)
    }
}

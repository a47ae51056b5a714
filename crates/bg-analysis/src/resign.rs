//! Resignation value determination.
//!
//! A resignation is only recommended when the value proposed by a cheap
//! evaluation matches the points the position would actually score: the
//! hub always resigns at face value, so overstating or understating the
//! value must be suppressed.

use crate::AnalysisError;
use bg_core::{Board, CubeContext, Player, CHECKERS};
use serde::{Deserialize, Serialize};

/// Points of a resignation, before cube multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResignValue {
    Single = 1,
    Gammon = 2,
    Backgammon = 3,
}

impl ResignValue {
    /// Points before cube multiplication.
    pub const fn points(self) -> u32 {
        self as u32
    }

    /// Points scored at the given cube value, saturating on overflow.
    pub const fn points_at(self, cube_value: u32) -> u32 {
        self.points().saturating_mul(cube_value)
    }
}

/// Position class as reported by the external classifier, simplest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionClass {
    /// The game is over.
    Over,
    /// Both sides are bearing off.
    Bearoff,
    /// No further contact is possible.
    Race,
    /// Contact position with a crashed board.
    Crashed,
    Contact,
}

impl PositionClass {
    /// Returns `true` for races and simpler positions.
    pub fn is_race_or_simpler(self) -> bool {
        self <= PositionClass::Race
    }
}

/// First index, from the resigning player's perspective, of the
/// opponent's home board. The bar lies beyond it.
const OPPONENT_HOME: usize = 18;

/// External evaluator providing what resignation needs.
pub trait ResignationEvaluator {
    /// Classifies the position.
    fn classify(&self, board: &Board) -> Result<PositionClass, AnalysisError>;

    /// Value the player could resign at according to a zero-ply
    /// evaluation, or `None` if resigning is not indicated.
    fn proposed_resignation(
        &self,
        board: &Board,
        ctx: &CubeContext,
        player: Player,
    ) -> Result<Option<ResignValue>, AnalysisError>;
}

/// Points the player would lose if the game were played out now.
///
/// Scanning from the bar inward, the first occupied point decides: inside
/// the opponent's home board (or on the bar) it is a backgammon. Otherwise
/// a player with no checker borne off loses a gammon, anyone else a single
/// game.
pub fn actual_resignation_value(board: &Board, player: Player) -> ResignValue {
    match board.farthest_point(player) {
        Some(point) if point >= OPPONENT_HOME => ResignValue::Backgammon,
        _ if board.on_board(player) == CHECKERS => ResignValue::Gammon,
        _ => ResignValue::Single,
    }
}

/// Value `player` should resign at, if any.
pub fn resignation_value<E: ResignationEvaluator + ?Sized>(
    evaluator: &E,
    board: &Board,
    ctx: &CubeContext,
    player: Player,
) -> Result<Option<ResignValue>, AnalysisError> {
    if !evaluator.classify(board)?.is_race_or_simpler() {
        return Ok(None);
    }
    let Some(proposed) = evaluator.proposed_resignation(board, ctx, player)? else {
        return Ok(None);
    };
    let actual = actual_resignation_value(board, player);
    Ok((proposed == actual).then_some(actual))
}

/// Decides whether `player` should resign.
pub fn should_resign<E: ResignationEvaluator + ?Sized>(
    evaluator: &E,
    board: &Board,
    ctx: &CubeContext,
    player: Player,
) -> Result<bool, AnalysisError> {
    Ok(resignation_value(evaluator, board, ctx, player)?.is_some())
}

/// Evaluator answering from precomputed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecomputedResignation {
    pub class: PositionClass,
    #[serde(default)]
    pub proposed: Option<ResignValue>,
}

impl ResignationEvaluator for PrecomputedResignation {
    fn classify(&self, _board: &Board) -> Result<PositionClass, AnalysisError> {
        Ok(self.class)
    }

    fn proposed_resignation(
        &self,
        _board: &Board,
        _ctx: &CubeContext,
        _player: Player,
    ) -> Result<Option<ResignValue>, AnalysisError> {
        Ok(self.proposed)
    }
}

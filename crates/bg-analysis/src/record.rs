//! Analysed match records.
//!
//! These types describe the evaluator's output for a match as it is read
//! by the exporter. They are plain data: the analysis never modifies them.

use crate::evaluation::{CubeAnalysis, EvalKind, Probabilities};
use crate::resign::{PrecomputedResignation, ResignValue};
use crate::AnalysisError;
use bg_core::{Board, CrawfordState, CubeContext, Dice, Player};
use serde::{Deserialize, Serialize};

/// A whole match (or money session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub games: Vec<GameRecord>,
}

impl MatchRecord {
    /// Match length of the session, 0 for money play.
    pub fn match_length(&self) -> u32 {
        self.games.first().map_or(0, |game| game.info.match_length)
    }
}

/// One game of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub info: GameInfo,
    #[serde(default)]
    pub records: Vec<MoveRecord>,
}

/// Situation at the start of a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Number of the game within the match, starting at 1.
    pub game_number: u32,
    /// Score before the game, indexed by player.
    #[serde(default)]
    pub score: [u32; 2],
    /// Backgammon variant code.
    #[serde(default)]
    pub variant: u8,
    /// Match length, 0 for money play.
    #[serde(default)]
    pub match_length: u32,
    #[serde(default = "default_true")]
    pub cube_use: bool,
    #[serde(default)]
    pub crawford: CrawfordState,
    #[serde(default)]
    pub jacoby: bool,
}

fn default_true() -> bool {
    true
}

/// One recorded decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Player making the decision.
    pub player: Player,
    /// Cube situation of the player on roll. For takes and drops this is
    /// the doubler's context, since the cube analysis is seen from the
    /// doubler.
    pub ctx: CubeContext,
    /// Resignation on the table when the decision was made.
    #[serde(default)]
    pub resigned: Option<ResignValue>,
    /// Free text annotation.
    #[serde(default)]
    pub comment: Option<String>,
    pub action: RecordAction,
}

/// What was played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordAction {
    /// A roll and checker play, with the cube decision before the roll.
    Normal(CheckerPlay),
    Double { cube: CubeAnalysis },
    Take { cube: CubeAnalysis },
    Drop { cube: CubeAnalysis },
}

/// A roll with its candidate moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerPlay {
    pub dice: Dice,
    /// Candidate moves, best first.
    #[serde(default)]
    pub moves: Vec<CandidateMove>,
    /// Index of the move played in `moves`.
    #[serde(default)]
    pub chosen: Option<usize>,
    /// Normalized luck of the roll, if analysed.
    #[serde(default)]
    pub luck: Option<f32>,
    /// Cube analysis before the roll.
    #[serde(default)]
    pub cube: Option<CubeAnalysis>,
}

impl CheckerPlay {
    /// The move that was played, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidRecord`] if the chosen index is out
    /// of range.
    pub fn chosen_move(&self) -> Result<Option<&CandidateMove>, AnalysisError> {
        match self.chosen {
            Some(index) => self.moves.get(index).map(Some).ok_or_else(|| {
                AnalysisError::InvalidRecord(format!(
                    "chosen move {index} of {} candidates",
                    self.moves.len()
                ))
            }),
            None => Ok(None),
        }
    }

    /// Checks that the chosen index names one of the candidates.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        self.chosen_move().map(|_| ())
    }
}

/// A legal move and its evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMove {
    /// Move in standard notation, e.g. `13/7 8/7`.
    pub notation: String,
    /// Cubeful equity after the move.
    pub equity: f32,
    #[serde(default)]
    pub eval: EvalKind,
    #[serde(default)]
    pub probabilities: Option<Probabilities>,
}

/// The position a hint is requested for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintRequest {
    pub player: Player,
    pub ctx: CubeContext,
    /// Board from the perspective of each player. Needed for the
    /// resignation check.
    #[serde(default)]
    pub board: Option<Board>,
    /// Resignation estimate of the evaluator.
    #[serde(default)]
    pub resignation: Option<PrecomputedResignation>,
    pub decision: HintDecision,
}

/// Decision pending in a hint position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HintDecision {
    /// Double or no double before rolling.
    Cube { cube: CubeAnalysis },
    /// Take or pass an offered double.
    Take { cube: CubeAnalysis },
    /// Checker play after the roll.
    Move(CheckerPlay),
}

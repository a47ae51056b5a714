//! Decision-by-decision analysis of recorded games.
//!
//! The [`GameAnalyzer`] classifies every recorded decision, rates the
//! player's choice and feeds the game statistics.

use bg_core::{equity_to_mwc, BoardError, CubeContext, Player};
use thiserror::Error;

use crate::config::AnalysisConfig;
use crate::cube::{best_action, classify, decision_order, CubeVerdict};
use crate::detector::{
    annotate, cube_error, cube_error_mwc, is_close, is_missed_double, ActualCubeAction,
    CubeAnnotation,
};
use crate::evaluation::{CubeAction, CubeAnalysis};
use crate::rating::{LuckRating, SkillRating};
use crate::record::{CheckerPlay, GameRecord, MoveRecord, RecordAction};
use crate::stats::GameStatistics;

/// Errors that can occur during analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A record contradicts itself.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    /// The external evaluator failed or was interrupted.
    #[error("Evaluator error: {0}")]
    Evaluator(String),
    #[error("Invalid board: {0}")]
    Board(#[from] BoardError),
}

/// Luck of a roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuckAnalysis {
    pub rating: LuckRating,
    /// Normalized luck.
    pub value: f32,
    /// Luck in match-winning chance.
    pub mwc: f32,
}

/// Rating of a checker play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChequerAnalysis {
    pub skill: SkillRating,
    /// Normalized equity lost against the best candidate (non-positive).
    pub error: f32,
    /// Match-winning chance lost against the best candidate.
    pub error_mwc: f32,
    /// More than one legal move was available.
    pub unforced: bool,
}

/// A classified cube decision and how the player handled it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeDecision {
    pub action: ActualCubeAction,
    pub verdict: CubeVerdict,
    /// Cube actions by descending match-winning chance.
    pub order: [CubeAction; 3],
    pub best: CubeAction,
    pub close: bool,
    pub missed: bool,
    pub skill: SkillRating,
    pub error: f32,
    pub error_mwc: f32,
    pub annotation: Option<CubeAnnotation>,
    pub confidence: Option<f32>,
}

impl CubeDecision {
    /// Counts towards the close cube decisions of the statistics.
    pub fn counts_as_close(&self) -> bool {
        self.action.doubled() || self.close || self.missed
    }
}

/// Analysis of one recorded decision.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionAnalysis {
    pub player: Player,
    pub luck: Option<LuckAnalysis>,
    /// Present when candidate moves were evaluated.
    pub chequer: Option<ChequerAnalysis>,
    /// `None` when the cube decision was not evaluated.
    pub cube: Option<CubeDecision>,
}

/// Analysis of a whole game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameAnalysis {
    /// One entry per record, in order.
    pub decisions: Vec<DecisionAnalysis>,
    pub statistics: GameStatistics,
}

/// Classifies the decisions of recorded games.
#[derive(Debug, Clone, Default)]
pub struct GameAnalyzer {
    config: AnalysisConfig,
}

impl GameAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyses every record of a game and accumulates its statistics.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid record; nothing of the game is returned.
    pub fn analyze_game(&self, game: &GameRecord) -> Result<GameAnalysis, AnalysisError> {
        let mut statistics = GameStatistics::new();
        let decisions = game
            .records
            .iter()
            .map(|record| {
                let analysis = self.analyze_record(record)?;
                record_statistics(&mut statistics, record, &analysis);
                Ok(analysis)
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;
        Ok(GameAnalysis {
            decisions,
            statistics,
        })
    }

    /// Analyses a single record.
    pub fn analyze_record(&self, record: &MoveRecord) -> Result<DecisionAnalysis, AnalysisError> {
        let ctx = &record.ctx;
        let analysis = match &record.action {
            RecordAction::Normal(play) => DecisionAnalysis {
                player: record.player,
                luck: play.luck.map(|luck| self.luck(luck, ctx)),
                chequer: self.chequer(play, ctx)?,
                cube: play
                    .cube
                    .as_ref()
                    .and_then(|cube| self.cube(cube, ctx, ActualCubeAction::NoDouble)),
            },
            RecordAction::Double { cube } => {
                self.cube_only(record.player, cube, ctx, ActualCubeAction::Double)
            }
            RecordAction::Take { cube } => {
                self.cube_only(record.player, cube, ctx, ActualCubeAction::Take)
            }
            RecordAction::Drop { cube } => {
                self.cube_only(record.player, cube, ctx, ActualCubeAction::Pass)
            }
        };
        Ok(analysis)
    }

    /// Rates the luck of a roll.
    pub fn luck(&self, value: f32, ctx: &CubeContext) -> LuckAnalysis {
        LuckAnalysis {
            rating: LuckRating::for_roll(value, &self.config.luck),
            value,
            mwc: equity_to_mwc(value, ctx) - equity_to_mwc(0.0, ctx),
        }
    }

    /// Rates the chosen move against the best candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidRecord`] if the chosen index is out
    /// of range.
    pub fn chequer(
        &self,
        play: &CheckerPlay,
        ctx: &CubeContext,
    ) -> Result<Option<ChequerAnalysis>, AnalysisError> {
        let Some(best) = play
            .moves
            .iter()
            .map(|candidate| candidate.equity)
            .reduce(f32::max)
        else {
            return Ok(None);
        };
        let chosen = play.chosen_move()?;
        let (error, error_mwc) = chosen.map_or((0.0, 0.0), |candidate| {
            (
                candidate.equity - best,
                equity_to_mwc(candidate.equity, ctx) - equity_to_mwc(best, ctx),
            )
        });
        Ok(Some(ChequerAnalysis {
            skill: SkillRating::from_error(error, &self.config.skill),
            error,
            error_mwc,
            unforced: chosen.is_some() && play.moves.len() > 1,
        }))
    }

    /// Classifies a cube decision, or `None` if it was not evaluated.
    pub fn cube(
        &self,
        cube: &CubeAnalysis,
        ctx: &CubeContext,
        action: ActualCubeAction,
    ) -> Option<CubeDecision> {
        if !cube.eval.is_evaluated() {
            return None;
        }
        let equities = &cube.equities;
        let verdict = classify(equities, ctx, &self.config);
        let available = verdict != CubeVerdict::NotAvailable;
        let (error, error_mwc) = if available {
            (
                cube_error(equities, action),
                cube_error_mwc(equities, action, ctx),
            )
        } else {
            (0.0, 0.0)
        };
        let skill = SkillRating::from_error(error, &self.config.skill);
        let missed = available && is_missed_double(equities, ctx, action.doubled(), &self.config);
        let annotation = if available {
            annotate(equities, ctx, action, skill, skill, &self.config)
        } else {
            None
        };

        Some(CubeDecision {
            action,
            verdict,
            order: decision_order(equities, ctx),
            best: best_action(equities),
            close: is_close(equities, ctx, &self.config),
            missed,
            skill,
            error,
            error_mwc,
            annotation,
            confidence: verdict.confidence(equities),
        })
    }

    fn cube_only(
        &self,
        player: Player,
        cube: &CubeAnalysis,
        ctx: &CubeContext,
        action: ActualCubeAction,
    ) -> DecisionAnalysis {
        DecisionAnalysis {
            player,
            luck: None,
            chequer: None,
            cube: self.cube(cube, ctx, action),
        }
    }
}

fn record_statistics(stats: &mut GameStatistics, record: &MoveRecord, analysis: &DecisionAnalysis) {
    let player = record.player;

    if let Some(cube) = &analysis.cube {
        if cube.verdict != CubeVerdict::NotAvailable {
            stats.add_cube_decision(player, cube.error, cube.error_mwc, cube.counts_as_close());
        }
    }

    if let RecordAction::Normal(_) = record.action {
        match &analysis.chequer {
            Some(chequer) => stats.add_move(player, chequer.error, chequer.error_mwc, chequer.unforced),
            None => stats.add_move(player, 0.0, 0.0, false),
        }
        if let Some(luck) = &analysis.luck {
            stats.add_luck(player, luck.value, luck.mwc);
        }
    }
}

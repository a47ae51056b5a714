//! Backgammon decision analysis.
//!
//! This crate turns evaluator output into classified decisions and game
//! statistics.
//!
//! # Overview
//!
//! - [`classify`] - Proper cube action ([`CubeVerdict`]) of an [`EquitySet`]
//! - [`is_close`] / [`is_missed_double`] - Deviations from proper cube play
//! - [`Rating`], [`LuckRating`], [`SkillRating`] - Rating buckets
//! - [`resignation_value`] - Whether and at what value to resign
//! - [`GameStatistics`] / [`MatchStatistics`] - Error and luck totals
//! - [`GameAnalyzer`] - Analyses recorded games decision by decision
//!
//! # Example
//!
//! ```
//! use bg_analysis::{classify, AnalysisConfig, CubeVerdict, EquitySet};
//! use bg_core::{CubeContext, Player};
//!
//! let equities = EquitySet::new(0.3, 0.8, 1.0);
//! let ctx = CubeContext::money(Player::Zero);
//! let verdict = classify(&equities, &ctx, &AnalysisConfig::default());
//! assert_eq!(verdict, CubeVerdict::DoubleTake);
//! ```

pub mod analyzer;
pub mod config;
pub mod cube;
pub mod detector;
pub mod evaluation;
pub mod rating;
pub mod record;
pub mod resign;
pub mod stats;

pub use analyzer::{
    AnalysisError, ChequerAnalysis, CubeDecision, DecisionAnalysis, GameAnalysis, GameAnalyzer,
    LuckAnalysis,
};
pub use config::{AnalysisConfig, LuckThresholds, SkillThresholds};
pub use cube::{best_action, classify, classify_analysis, decision_order, CubeVerdict};
pub use detector::{
    annotate, cube_error, cube_error_mwc, decision_margin, is_close, is_missed_double,
    ActualCubeAction, CubeAnnotation, CubeMistake,
};
pub use evaluation::{CubeAction, CubeAnalysis, EquitySet, EvalKind, Probabilities};
pub use rating::{luck_rating_for, rating_for_error, LuckRating, Rating, SkillRating};
pub use record::{
    CandidateMove, CheckerPlay, GameInfo, GameRecord, HintDecision, HintRequest, MatchRecord,
    MoveRecord, RecordAction,
};
pub use resign::{
    actual_resignation_value, resignation_value, should_resign, PositionClass,
    PrecomputedResignation, ResignValue, ResignationEvaluator,
};
pub use stats::{
    absolute_rating, DerivedStats, ErrorSummary, ErrorTotal, GameStatistics, LuckSummary,
    MatchStatistics, PlayerSummary, PlayerTotals,
};

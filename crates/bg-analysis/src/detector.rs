//! Close, missed and wrong cube decision detection.

use crate::config::AnalysisConfig;
use crate::cube::classify;
use crate::evaluation::EquitySet;
use crate::rating::SkillRating;
use bg_core::{equity_to_mwc, CubeContext};
use serde::{Deserialize, Serialize};

/// The cube action a player actually took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActualCubeAction {
    /// Rolled without doubling.
    NoDouble,
    /// Offered a double.
    Double,
    /// Took a double.
    Take,
    /// Passed a double.
    Pass,
}

impl ActualCubeAction {
    /// Returns `true` if a double was offered.
    pub fn doubled(self) -> bool {
        self != ActualCubeAction::NoDouble
    }
}

/// Normalized equity margin between doubling and holding.
///
/// The player on roll reaches one of two outcomes: holding, or doubling
/// into the opponent's best response `min(take, pass)`. The margin is the
/// best of them minus the other, signed positive when doubling is better.
/// It is independent of score and cube value.
pub fn decision_margin(equities: &EquitySet) -> f32 {
    equities.doubled() - equities.no_double
}

/// Returns `true` if doubling and holding are within the close threshold.
///
/// Only live decisions can be close: when the player on roll has no
/// access to the cube there is nothing to compare.
pub fn is_close(equities: &EquitySet, ctx: &CubeContext, config: &AnalysisConfig) -> bool {
    ctx.can_double() && decision_margin(equities).abs() < config.close_cube_threshold
}

/// Returns `true` if the player held the cube in a clear (non-optional,
/// non-close) double.
pub fn is_missed_double(
    equities: &EquitySet,
    ctx: &CubeContext,
    did_double: bool,
    config: &AnalysisConfig,
) -> bool {
    if did_double {
        return false;
    }
    let verdict = classify(equities, ctx, config);
    verdict.is_double() && !verdict.is_optional() && !is_close(equities, ctx, config)
}

/// Normalized equity lost by a cube action (non-positive).
///
/// Doubling is worth `min(take, pass)` to the doubler. Take and pass errors
/// are the responder's loss measured on the doubler's scale.
pub fn cube_error(equities: &EquitySet, action: ActualCubeAction) -> f32 {
    let doubled = equities.doubled();
    let best = equities.no_double.max(doubled);
    match action {
        ActualCubeAction::NoDouble => equities.no_double - best,
        ActualCubeAction::Double => doubled - best,
        ActualCubeAction::Take => doubled - equities.double_take,
        ActualCubeAction::Pass => doubled - equities.double_pass,
    }
}

/// [`cube_error`] measured in match-winning chance.
pub fn cube_error_mwc(equities: &EquitySet, action: ActualCubeAction, ctx: &CubeContext) -> f32 {
    let doubled = equity_to_mwc(equities.doubled(), ctx);
    let no_double = equity_to_mwc(equities.no_double, ctx);
    let best = no_double.max(doubled);
    match action {
        ActualCubeAction::NoDouble => no_double - best,
        ActualCubeAction::Double => doubled - best,
        ActualCubeAction::Take => doubled - equity_to_mwc(equities.double_take, ctx),
        ActualCubeAction::Pass => doubled - equity_to_mwc(equities.double_pass, ctx),
    }
}

/// Kind of cube mistake worth annotating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeMistake {
    /// Held the cube in a clear double.
    MissedDouble,
    /// Took a double that should have been passed.
    WrongTake,
    /// Passed a double that should have been taken.
    WrongPass,
    /// Doubled when holding was better.
    WrongDouble,
}

/// Annotation of a cube decision: the mistake, its skill rating and the
/// two equities whose difference (`from - to`) measures it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeAnnotation {
    pub mistake: CubeMistake,
    pub skill: SkillRating,
    pub from: f32,
    pub to: f32,
}

/// Finds the annotation for an actual cube action, if any applies.
///
/// `double_skill` rates the doubling decision and `take_skill` the
/// response to a double.
pub fn annotate(
    equities: &EquitySet,
    ctx: &CubeContext,
    action: ActualCubeAction,
    double_skill: SkillRating,
    take_skill: SkillRating,
    config: &AnalysisConfig,
) -> Option<CubeAnnotation> {
    let EquitySet {
        no_double: nd,
        double_take: dt,
        double_pass: dp,
        ..
    } = *equities;
    let doubled = equities.doubled();
    let annotation = |mistake, skill, from, to| CubeAnnotation {
        mistake,
        skill,
        from,
        to,
    };

    match action {
        ActualCubeAction::NoDouble => is_missed_double(equities, ctx, false, config)
            .then(|| annotation(CubeMistake::MissedDouble, double_skill, nd, doubled)),
        ActualCubeAction::Double => (nd > doubled)
            .then(|| annotation(CubeMistake::WrongDouble, double_skill, doubled, nd)),
        ActualCubeAction::Take => {
            (dt > dp).then(|| annotation(CubeMistake::WrongTake, take_skill, dp, dt))
        }
        ActualCubeAction::Pass => {
            (dp > dt).then(|| annotation(CubeMistake::WrongPass, take_skill, dt, dp))
        }
    }
}

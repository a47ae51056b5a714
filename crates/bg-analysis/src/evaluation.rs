//! Evaluation results consumed by the analysis.

use serde::{Deserialize, Serialize};

/// How a position or move was evaluated by the external evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalKind {
    /// No evaluation was performed.
    #[default]
    None,
    /// Static or n-ply evaluation.
    Evaluation { plies: u8 },
    /// Rollout.
    Rollout,
}

impl EvalKind {
    /// Returns `true` if an evaluation was performed.
    pub fn is_evaluated(self) -> bool {
        !matches!(self, EvalKind::None)
    }
}

/// Game outcome probabilities of the player on roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    pub win: f32,
    pub win_gammon: f32,
    pub win_backgammon: f32,
    pub lose_gammon: f32,
    pub lose_backgammon: f32,
}

impl Probabilities {
    /// Formats as `win gammon backgammon - lose gammon backgammon` percentages.
    pub fn format_percents(&self) -> String {
        format!(
            "{:5.1}% {:5.1}% {:5.1}% - {:5.1}% {:5.1}% {:5.1}%",
            100.0 * self.win,
            100.0 * self.win_gammon,
            100.0 * self.win_backgammon,
            100.0 * (1.0 - self.win),
            100.0 * self.lose_gammon,
            100.0 * self.lose_backgammon,
        )
    }
}

/// One of the three live cube actions of the player on roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeAction {
    NoDouble,
    DoubleTake,
    DoublePass,
}

impl CubeAction {
    /// The three actions in tie-break priority order.
    pub const ALL: [CubeAction; 3] = [
        CubeAction::NoDouble,
        CubeAction::DoubleTake,
        CubeAction::DoublePass,
    ];

    /// Protocol code of the action (1 no double, 2 double/take, 3 double/pass).
    pub const fn code(self) -> u8 {
        match self {
            CubeAction::NoDouble => 1,
            CubeAction::DoubleTake => 2,
            CubeAction::DoublePass => 3,
        }
    }
}

/// Cubeful equities of the cube actions, normalized to a cube of one and
/// seen from the player on roll.
///
/// `optimal` is supplied by the evaluator and should equal
/// `max(no_double, min(double_take, double_pass))` while the cube is live.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquitySet {
    pub no_double: f32,
    pub double_take: f32,
    pub double_pass: f32,
    pub optimal: f32,
}

impl EquitySet {
    /// Builds an equity set, deriving the optimal equity.
    pub fn new(no_double: f32, double_take: f32, double_pass: f32) -> Self {
        Self {
            no_double,
            double_take,
            double_pass,
            optimal: no_double.max(double_take.min(double_pass)),
        }
    }

    /// Equity of one cube action.
    pub fn get(&self, action: CubeAction) -> f32 {
        match action {
            CubeAction::NoDouble => self.no_double,
            CubeAction::DoubleTake => self.double_take,
            CubeAction::DoublePass => self.double_pass,
        }
    }

    /// Equity the doubler gets after the opponent's best response.
    pub fn doubled(&self) -> f32 {
        self.double_take.min(self.double_pass)
    }

    /// Adds a constant to every equity.
    pub fn translated(&self, delta: f32) -> Self {
        Self {
            no_double: self.no_double + delta,
            double_take: self.double_take + delta,
            double_pass: self.double_pass + delta,
            optimal: self.optimal + delta,
        }
    }
}

/// Cube analysis attached to a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeAnalysis {
    pub equities: EquitySet,
    #[serde(default)]
    pub eval: EvalKind,
    #[serde(default)]
    pub probabilities: Option<Probabilities>,
}

//! Cube decision classification.
//!
//! Given the cubeful equities of no double, double/take and double/pass,
//! the classifier names the proper cube action, the order in which the
//! three actions are displayed and how deep inside its window the
//! position sits.

use crate::config::AnalysisConfig;
use crate::evaluation::{CubeAction, CubeAnalysis, EquitySet};
use bg_core::{equity_to_mwc, CubeContext};
use serde::{Deserialize, Serialize};

/// Proper cube action of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeVerdict {
    /// Hold the cube; a double would be taken.
    NoDoubleTake,
    /// Hold the cube; a double would be beavered.
    NoDoubleBeaver,
    /// Double; the opponent should take.
    DoubleTake,
    /// Double; the opponent should beaver.
    DoubleBeaver,
    /// Double; the opponent should pass.
    DoublePass,
    /// Too good to double, play on for gammon; a double would be taken.
    TooGoodTake,
    /// Too good to double, play on for gammon; a double would be passed.
    TooGoodPass,
    /// Doubling and holding are about equal; the opponent should take.
    OptionalDoubleTake,
    /// Doubling and holding are about equal; the opponent should beaver.
    OptionalDoubleBeaver,
    /// Doubling and holding are about equal; the opponent should pass.
    OptionalDoublePass,
    /// Keep the owned cube; a redouble would be taken.
    NoRedoubleTake,
    /// Keep the owned cube; a redouble would be beavered.
    NoRedoubleBeaver,
    /// Redouble; the opponent should take.
    RedoubleTake,
    /// Redouble; the opponent should pass.
    RedoublePass,
    /// Too good to redouble; a redouble would be taken.
    TooGoodRedoubleTake,
    /// Too good to redouble; a redouble would be passed.
    TooGoodRedoublePass,
    /// Redoubling and holding are about equal; the opponent should take.
    OptionalRedoubleTake,
    /// Redoubling and holding are about equal; the opponent should pass.
    OptionalRedoublePass,
    /// The player on roll has no access to the cube.
    NotAvailable,
}

impl CubeVerdict {
    /// Returns `true` if doubling is the proper action (optional doubles included).
    pub fn is_double(self) -> bool {
        matches!(
            self,
            CubeVerdict::DoubleTake
                | CubeVerdict::DoubleBeaver
                | CubeVerdict::DoublePass
                | CubeVerdict::OptionalDoubleTake
                | CubeVerdict::OptionalDoubleBeaver
                | CubeVerdict::OptionalDoublePass
                | CubeVerdict::RedoubleTake
                | CubeVerdict::RedoublePass
                | CubeVerdict::OptionalRedoubleTake
                | CubeVerdict::OptionalRedoublePass
        )
    }

    /// Returns `true` if holding the cube is the proper action.
    pub fn is_no_double(self) -> bool {
        !self.is_double()
    }

    /// Returns `true` if doubling and holding are within the optional margin.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            CubeVerdict::OptionalDoubleTake
                | CubeVerdict::OptionalDoubleBeaver
                | CubeVerdict::OptionalDoublePass
                | CubeVerdict::OptionalRedoubleTake
                | CubeVerdict::OptionalRedoublePass
        )
    }

    /// Returns `true` if the opponent should take (or beaver) a double.
    pub fn is_take(self) -> bool {
        matches!(
            self,
            CubeVerdict::NoDoubleTake
                | CubeVerdict::NoDoubleBeaver
                | CubeVerdict::DoubleTake
                | CubeVerdict::DoubleBeaver
                | CubeVerdict::TooGoodTake
                | CubeVerdict::OptionalDoubleTake
                | CubeVerdict::OptionalDoubleBeaver
                | CubeVerdict::NoRedoubleTake
                | CubeVerdict::NoRedoubleBeaver
                | CubeVerdict::RedoubleTake
                | CubeVerdict::TooGoodRedoubleTake
                | CubeVerdict::OptionalRedoubleTake
        )
    }

    /// Returns `true` if the opponent should pass a double.
    pub fn is_pass(self) -> bool {
        self != CubeVerdict::NotAvailable && !self.is_take()
    }

    /// Share of the way through the cube window, if meaningful.
    ///
    /// For holding and double/pass verdicts this is how far no double has
    /// moved from double/take towards double/pass; for double/take verdicts
    /// how far double/take has moved from no double towards double/pass.
    pub fn confidence(self, equities: &EquitySet) -> Option<f32> {
        let EquitySet {
            no_double: nd,
            double_take: dt,
            double_pass: dp,
            ..
        } = *equities;
        let ratio = |num: f32, den: f32| (den != 0.0).then(|| num / den);
        match self {
            CubeVerdict::NoDoubleTake
            | CubeVerdict::NoDoubleBeaver
            | CubeVerdict::NoRedoubleTake
            | CubeVerdict::NoRedoubleBeaver
            | CubeVerdict::DoublePass
            | CubeVerdict::RedoublePass
            | CubeVerdict::OptionalDoublePass
            | CubeVerdict::OptionalRedoublePass => ratio(nd - dt, dp - dt),
            CubeVerdict::DoubleTake
            | CubeVerdict::DoubleBeaver
            | CubeVerdict::RedoubleTake
            | CubeVerdict::OptionalDoubleTake
            | CubeVerdict::OptionalDoubleBeaver
            | CubeVerdict::OptionalRedoubleTake => ratio(dt - nd, dp - nd),
            CubeVerdict::TooGoodTake
            | CubeVerdict::TooGoodPass
            | CubeVerdict::TooGoodRedoubleTake
            | CubeVerdict::TooGoodRedoublePass
            | CubeVerdict::NotAvailable => None,
        }
    }
}

/// Classifies the proper cube action.
///
/// Redouble variants are chosen when the player on roll owns the cube.
/// Beaver variants need money play with beavers on, a centered cube and a
/// negative double/take equity.
pub fn classify(equities: &EquitySet, ctx: &CubeContext, config: &AnalysisConfig) -> CubeVerdict {
    if !ctx.can_double() {
        return CubeVerdict::NotAvailable;
    }

    let EquitySet {
        no_double: nd,
        double_take: dt,
        double_pass: dp,
        ..
    } = *equities;
    let redouble = ctx.on_roll_owns_cube();
    let beaver = ctx.beavers && ctx.is_money() && !redouble && dt < 0.0;

    if dt > nd && dp > nd {
        let optional = equities.doubled() - nd <= config.optional_double_epsilon;
        if dp > dt {
            match (redouble, optional, beaver) {
                (true, true, _) => CubeVerdict::OptionalRedoubleTake,
                (true, false, _) => CubeVerdict::RedoubleTake,
                (false, true, true) => CubeVerdict::OptionalDoubleBeaver,
                (false, true, false) => CubeVerdict::OptionalDoubleTake,
                (false, false, true) => CubeVerdict::DoubleBeaver,
                (false, false, false) => CubeVerdict::DoubleTake,
            }
        } else {
            match (redouble, optional) {
                (true, true) => CubeVerdict::OptionalRedoublePass,
                (true, false) => CubeVerdict::RedoublePass,
                (false, true) => CubeVerdict::OptionalDoublePass,
                (false, false) => CubeVerdict::DoublePass,
            }
        }
    } else if nd >= dp {
        match (redouble, dt >= dp) {
            (true, true) => CubeVerdict::TooGoodRedoublePass,
            (true, false) => CubeVerdict::TooGoodRedoubleTake,
            (false, true) => CubeVerdict::TooGoodPass,
            (false, false) => CubeVerdict::TooGoodTake,
        }
    } else {
        match (redouble, beaver) {
            (true, true) => CubeVerdict::NoRedoubleBeaver,
            (true, false) => CubeVerdict::NoRedoubleTake,
            (false, true) => CubeVerdict::NoDoubleBeaver,
            (false, false) => CubeVerdict::NoDoubleTake,
        }
    }
}

/// Classifies a cube analysis, or `None` if nothing was evaluated.
pub fn classify_analysis(
    analysis: &CubeAnalysis,
    ctx: &CubeContext,
    config: &AnalysisConfig,
) -> Option<CubeVerdict> {
    analysis
        .eval
        .is_evaluated()
        .then(|| classify(&analysis.equities, ctx, config))
}

/// The action with the best outcome for the player on roll.
///
/// Doubling is worth the opponent's best response, `min(take, pass)`.
pub fn best_action(equities: &EquitySet) -> CubeAction {
    if equities.no_double >= equities.doubled() {
        CubeAction::NoDouble
    } else if equities.double_pass > equities.double_take {
        CubeAction::DoubleTake
    } else {
        CubeAction::DoublePass
    }
}

/// The three actions by descending match-winning chance.
///
/// Ties keep the order no double, double/take, double/pass.
pub fn decision_order(equities: &EquitySet, ctx: &CubeContext) -> [CubeAction; 3] {
    let mut order = CubeAction::ALL;
    order.sort_by(|a, b| {
        let mwc_a = equity_to_mwc(equities.get(*a), ctx);
        let mwc_b = equity_to_mwc(equities.get(*b), ctx);
        mwc_b.total_cmp(&mwc_a)
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use bg_core::{CrawfordState, MatchEquity, Player};
    use proptest::prelude::*;

    fn money() -> CubeContext {
        CubeContext::money(Player::Zero)
    }

    fn verdict(nd: f32, dt: f32, dp: f32) -> CubeVerdict {
        classify(
            &EquitySet::new(nd, dt, dp),
            &money(),
            &AnalysisConfig::default(),
        )
    }

    #[test]
    fn classic_windows() {
        assert_eq!(verdict(0.3, 0.1, 1.0), CubeVerdict::NoDoubleTake);
        assert_eq!(verdict(0.6, 0.8, 1.0), CubeVerdict::DoubleTake);
        assert_eq!(verdict(0.8, 1.3, 1.0), CubeVerdict::DoublePass);
        assert_eq!(verdict(1.2, 1.5, 1.0), CubeVerdict::TooGoodPass);
        assert_eq!(verdict(1.2, 0.9, 1.0), CubeVerdict::TooGoodTake);
    }

    #[test]
    fn doubling_with_take_below_pass_is_take() {
        let equities = EquitySet::new(-0.10, 0.20, 0.35);
        let verdict = classify(&equities, &money(), &AnalysisConfig::default());
        assert_eq!(verdict, CubeVerdict::DoubleTake);
        assert_eq!(
            decision_order(&equities, &money()),
            [
                CubeAction::DoublePass,
                CubeAction::DoubleTake,
                CubeAction::NoDouble
            ]
        );
    }

    #[test]
    fn redouble_variants_when_owning_cube() {
        let ctx = CubeContext {
            cube_owner: Some(Player::Zero),
            cube_value: 2,
            ..money()
        };
        let config = AnalysisConfig::default();
        assert_eq!(
            classify(&EquitySet::new(0.6, 0.8, 1.0), &ctx, &config),
            CubeVerdict::RedoubleTake
        );
        assert_eq!(
            classify(&EquitySet::new(0.8, 1.3, 1.0), &ctx, &config),
            CubeVerdict::RedoublePass
        );
        assert_eq!(
            classify(&EquitySet::new(1.2, 1.5, 1.0), &ctx, &config),
            CubeVerdict::TooGoodRedoublePass
        );
        assert_eq!(
            classify(&EquitySet::new(0.3, 0.1, 1.0), &ctx, &config),
            CubeVerdict::NoRedoubleTake
        );
    }

    #[test]
    fn beavers_in_money_play() {
        let ctx = CubeContext {
            beavers: true,
            ..money()
        };
        let config = AnalysisConfig::default();
        assert_eq!(
            classify(&EquitySet::new(-0.3, -0.5, 1.0), &ctx, &config),
            CubeVerdict::NoDoubleBeaver
        );
        assert_eq!(
            classify(&EquitySet::new(-0.3, -0.2, 1.0), &ctx, &config),
            CubeVerdict::DoubleBeaver
        );
    }

    #[test]
    fn optional_double_within_epsilon() {
        let config = AnalysisConfig {
            optional_double_epsilon: 0.01,
            ..AnalysisConfig::default()
        };
        let equities = EquitySet::new(0.5, 0.505, 1.0);
        assert_eq!(
            classify(&equities, &money(), &config),
            CubeVerdict::OptionalDoubleTake
        );
        assert!(CubeVerdict::OptionalDoubleTake.is_double());
        assert!(CubeVerdict::OptionalDoubleTake.is_optional());
    }

    #[test]
    fn dead_cube_is_not_available() {
        let ctx = CubeContext {
            crawford: CrawfordState::Crawford,
            ..CubeContext::match_play(
                Player::One,
                5,
                [1, 4],
                MatchEquity {
                    win: 0.6,
                    lose: 0.0,
                },
            )
        };
        let verdict = classify(
            &EquitySet::new(0.6, 0.8, 1.0),
            &ctx,
            &AnalysisConfig::default(),
        );
        assert_eq!(verdict, CubeVerdict::NotAvailable);
        assert!(verdict.is_no_double());
        assert!(!verdict.is_take() && !verdict.is_pass());
    }

    #[test]
    fn unevaluated_analysis_has_no_verdict() {
        let analysis = CubeAnalysis {
            equities: EquitySet::new(0.6, 0.8, 1.0),
            eval: crate::evaluation::EvalKind::None,
            probabilities: None,
        };
        assert_eq!(
            classify_analysis(&analysis, &money(), &AnalysisConfig::default()),
            None
        );
    }

    #[test]
    fn best_action_uses_opponents_response() {
        assert_eq!(
            best_action(&EquitySet::new(0.3, 0.1, 1.0)),
            CubeAction::NoDouble
        );
        assert_eq!(
            best_action(&EquitySet::new(0.6, 0.8, 1.0)),
            CubeAction::DoubleTake
        );
        assert_eq!(
            best_action(&EquitySet::new(0.8, 1.3, 1.0)),
            CubeAction::DoublePass
        );
    }

    #[test]
    fn order_ties_keep_priority() {
        let equities = EquitySet::new(0.5, 0.5, 0.5);
        assert_eq!(decision_order(&equities, &money()), CubeAction::ALL);
    }

    #[test]
    fn confidence_in_window() {
        let equities = EquitySet::new(0.6, 0.8, 1.0);
        let confidence = CubeVerdict::DoubleTake.confidence(&equities).unwrap();
        assert!((confidence - 0.5).abs() < 1e-6);
        assert_eq!(CubeVerdict::TooGoodPass.confidence(&equities), None);
        let flat = EquitySet::new(0.6, 1.0, 1.0);
        assert_eq!(CubeVerdict::NoDoubleTake.confidence(&flat), None);
    }

    proptest! {
        #[test]
        fn holding_wins_means_no_double(nd in -3.0f32..3.0, dt in -3.0f32..3.0, dp in -3.0f32..3.0) {
            prop_assume!(nd >= dt && nd >= dp);
            prop_assert!(verdict(nd, dt, dp).is_no_double());
        }

        #[test]
        fn take_and_pass_suffixes(nd in -3.0f32..3.0, dt in -3.0f32..3.0, dp in -3.0f32..3.0) {
            prop_assume!(dt.min(dp) > nd);
            let v = verdict(nd, dt, dp);
            prop_assert!(v.is_double());
            if dt < dp {
                prop_assert!(v.is_take());
            } else {
                prop_assert!(v.is_pass());
            }
        }

        #[test]
        fn order_is_descending(nd in -3.0f32..3.0, dt in -3.0f32..3.0, dp in -3.0f32..3.0) {
            let equities = EquitySet::new(nd, dt, dp);
            let order = decision_order(&equities, &money());
            prop_assert!(equities.get(order[0]) >= equities.get(order[1]));
            prop_assert!(equities.get(order[1]) >= equities.get(order[2]));
        }
    }
}

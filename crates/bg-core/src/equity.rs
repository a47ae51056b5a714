//! Equity to match-winning-chance conversion and equity text formatting.
//!
//! Equities are normalized to a cube of one and seen from the player on
//! roll. In money play the match-winning chance is simply the equity
//! scaled by the cube value; in match play it is interpolated between the
//! match equities for winning and losing the current cube.

use crate::CubeContext;
use serde::{Deserialize, Serialize};

/// Unit in which equity differences are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquityUnit {
    /// Normalized equity.
    Equity,
    /// Match-winning chance (cube-scaled equity in money play).
    Mwc,
}

/// Converts a normalized equity to a match-winning chance.
pub fn equity_to_mwc(equity: f32, ctx: &CubeContext) -> f32 {
    if ctx.is_money() {
        return ctx.cube_value as f32 * equity;
    }
    let (win, lose) = match ctx.match_equity {
        Some(me) => (me.win, me.lose),
        None => (1.0, 0.0),
    };
    0.5 * ((win - lose) * equity + (win + lose))
}

/// Converts a match-winning chance back to a normalized equity.
pub fn mwc_to_equity(mwc: f32, ctx: &CubeContext) -> f32 {
    if ctx.is_money() {
        return mwc / ctx.cube_value.max(1) as f32;
    }
    let (win, lose) = match ctx.match_equity {
        Some(me) => (me.win, me.lose),
        None => (1.0, 0.0),
    };
    if win == lose {
        return 0.0;
    }
    (2.0 * mwc - (win + lose)) / (win - lose)
}

/// Difference `a - b` in the requested unit.
pub fn equity_diff(a: f32, b: f32, ctx: &CubeContext, unit: EquityUnit) -> f32 {
    match unit {
        EquityUnit::Equity => a - b,
        EquityUnit::Mwc => equity_to_mwc(a, ctx) - equity_to_mwc(b, ctx),
    }
}

/// How equities are rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquityFormat {
    /// Decimal places for equities.
    pub digits: usize,
    /// Show match play values as match-winning chances.
    pub mwc: bool,
    /// Show match-winning chances as percentages.
    pub match_percent: bool,
}

impl Default for EquityFormat {
    fn default() -> Self {
        Self {
            digits: 3,
            mwc: true,
            match_percent: true,
        }
    }
}

impl EquityFormat {
    fn width(&self) -> usize {
        self.digits + 3
    }

    fn percent_digits(&self) -> usize {
        self.digits.saturating_sub(1)
    }

    /// Unit used for differences in this context.
    pub fn unit(&self, ctx: &CubeContext) -> EquityUnit {
        if ctx.is_money() || !self.mwc {
            EquityUnit::Equity
        } else {
            EquityUnit::Mwc
        }
    }
}

/// Formats a single equity.
///
/// When `convert` is set the value is an equity: it is shown signed in
/// equity display and converted to a match-winning chance in MWC display.
/// Otherwise the value is shown unsigned and as is.
pub fn format_equity(value: f32, ctx: &CubeContext, fmt: &EquityFormat, convert: bool) -> String {
    let w = fmt.width();
    match fmt.unit(ctx) {
        EquityUnit::Equity if convert => format!("{:+w$.p$}", value, w = w, p = fmt.digits),
        EquityUnit::Equity => format!("{:w$.p$}", value, w = w, p = fmt.digits),
        EquityUnit::Mwc => {
            let mwc = if convert {
                equity_to_mwc(value, ctx)
            } else {
                value
            };
            if fmt.match_percent {
                format!("{:w$.p$}%", 100.0 * mwc, w = w, p = fmt.percent_digits())
            } else {
                format!("{:w$.p$}", mwc, w = w, p = fmt.digits + 1)
            }
        }
    }
}

/// Formats the difference `a - b`, always signed.
pub fn format_equity_diff(a: f32, b: f32, ctx: &CubeContext, fmt: &EquityFormat) -> String {
    let w = fmt.width();
    let unit = fmt.unit(ctx);
    let diff = equity_diff(a, b, ctx, unit);
    match unit {
        EquityUnit::Equity => format!("{:+w$.p$}", diff, w = w, p = fmt.digits),
        EquityUnit::Mwc if fmt.match_percent => {
            format!("{:+w$.p$}%", 100.0 * diff, w = w, p = fmt.percent_digits())
        }
        EquityUnit::Mwc => format!("{:+w$.p$}", diff, w = w, p = fmt.digits + 1),
    }
}

//! Rendering of records and summaries in the hub's line format.
//!
//! Every function returns complete text; nothing is written until a whole
//! record has been rendered.

use bg_analysis::{
    CheckerPlay, CubeAnalysis, CubeDecision, DerivedStats, ErrorSummary, EvalKind, GameInfo,
    LuckAnalysis, MoveRecord, PlayerSummary, RecordAction, SkillRating,
};
use bg_core::{equity_to_mwc, format_equity, format_equity_diff, CubeContext, Player};

use crate::options::OutputOptions;
use crate::token::Token;

/// Players in summary order.
const SUMMARY_ORDER: [Player; 2] = [Player::One, Player::Zero];

/// Header opening a game.
pub fn game_header(info: &GameInfo) -> String {
    format!(
        "\n\n{}:{}:{}:{}:{}:{}:{}:{}\n",
        info.game_number,
        info.score[0],
        info.score[1],
        info.variant,
        info.match_length,
        u8::from(info.cube_use),
        info.crawford.code(),
        u8::from(info.jacoby),
    )
}

/// Intro of a record: the player, then a pending resignation or the dice.
pub fn move_intro(record: &MoveRecord) -> String {
    let mut out = format!("\n~{}:", record.player.tag());
    if let Some(resigned) = record.resigned {
        out.push_str(&format!("Resign:{}", resigned.points_at(record.ctx.cube_value)));
    } else if let RecordAction::Normal(play) = &record.action {
        out.push_str(&play.dice.to_string());
    }
    out
}

/// Luck and skill fields of a roll followed by its candidate moves.
pub fn move_analysis(
    play: &CheckerPlay,
    luck: Option<&LuckAnalysis>,
    skill: Option<SkillRating>,
    ctx: &CubeContext,
    options: &OutputOptions,
) -> String {
    let mut out = match luck {
        Some(luck) => format!(
            ":{}:{:.3}:{:.3}",
            luck.rating.token(),
            luck.value,
            100.0 * luck.mwc
        ),
        None => ":none:0.000:0.000".to_string(),
    };
    if !play.moves.is_empty() {
        out.push(':');
        out.push_str(skill.unwrap_or_default().token());
    }
    out.push_str("\n  #\n");
    out.push_str(&candidate_moves(play, ctx, options));
    out
}

/// One line per shown candidate move, the played one marked with `*`.
pub fn candidate_moves(play: &CheckerPlay, ctx: &CubeContext, options: &OutputOptions) -> String {
    let fmt = options.equity_format();
    let mut out = String::new();
    for (index, candidate) in play.moves.iter().enumerate() {
        let chosen = play.chosen == Some(index);
        if index >= options.moves_shown && !chosen {
            continue;
        }
        out.push_str(if chosen { "* " } else { "  " });
        out.push_str(&candidate.notation);
        out.push_str(&format!(
            ":{}:{:.3}",
            format_equity(candidate.equity, ctx, &fmt, false),
            100.0 * equity_to_mwc(candidate.equity, ctx)
        ));
        if options.move_probabilities {
            if let (EvalKind::Evaluation { .. }, Some(probabilities)) =
                (candidate.eval, &candidate.probabilities)
            {
                out.push(':');
                out.push_str(&probabilities.format_percents());
            }
        }
        out.push('\n');
    }
    out
}

/// Cube analysis block.
///
/// A cube decision that was not evaluated is rendered as `na`.
pub fn cube_block(
    cube: Option<&CubeAnalysis>,
    decision: Option<&CubeDecision>,
    ctx: &CubeContext,
    options: &OutputOptions,
) -> String {
    let (Some(cube), Some(decision)) = (cube, decision) else {
        return "  #\n  na\n".to_string();
    };
    let fmt = options.equity_format();
    let equities = &cube.equities;
    let mut out = String::from("  #\n  ");

    match &decision.annotation {
        Some(annotation) => out.push_str(&format!(
            "{}:{}",
            annotation.skill.token(),
            format_equity_diff(annotation.from, annotation.to, ctx, &fmt)
        )),
        None => out.push_str("okay:0"),
    }
    out.push(':');

    if options.cube_probabilities {
        if let (EvalKind::Evaluation { .. }, Some(probabilities)) = (cube.eval, &cube.probabilities)
        {
            out.push_str(&probabilities.format_percents());
        }
    }

    let optimal_mwc = equity_to_mwc(equities.optimal, ctx);
    for action in decision.order {
        let equity = equities.get(action);
        let mwc = equity_to_mwc(equity, ctx);
        out.push_str(&format!(
            ":\n  {} {} {} {:.4} {:.4}",
            action.code(),
            format_equity(equity, ctx, &fmt, true),
            format_equity_diff(equity, equities.optimal, ctx, &fmt),
            mwc,
            mwc - optimal_mwc
        ));
    }

    out.push_str(":\n  ");
    out.push_str(decision.verdict.token());
    if let Some(confidence) = decision.confidence.filter(|c| *c >= 0.0) {
        out.push_str(&format!(" ({:.3})", 100.0 * confidence));
    }
    out.push('\n');
    out
}

/// Label of a cube record.
pub fn cube_label(action: &RecordAction) -> Option<&'static str> {
    match action {
        RecordAction::Normal(_) => None,
        RecordAction::Double { .. } => Some("Double"),
        RecordAction::Take { .. } => Some("Take"),
        RecordAction::Drop { .. } => Some("Drop"),
    }
}

/// Free text annotation of a record.
pub fn annotation(text: &str) -> String {
    format!("Annotation:\n{text}\n")
}

/// Summary lines of a game or match, terminated by a blank line.
pub fn summary(stats: &DerivedStats) -> String {
    let mut out = String::new();
    let categories: [(&str, fn(&PlayerSummary) -> &ErrorSummary); 3] = [
        ("CP", |summary| &summary.chequer),
        ("CB", |summary| &summary.cube),
        ("OV", |summary| &summary.overall),
    ];
    for (tag, pick) in categories {
        out.push_str(&format!("\n>{tag}"));
        for player in SUMMARY_ORDER {
            out.push_str(&error_fields(pick(stats.player(player))));
        }
    }

    out.push_str("\n>LK");
    for player in SUMMARY_ORDER {
        let luck = &stats.player(player).luck;
        out.push_str(&format!(
            ":{:.3}:{:.3}:{}:{}:{}",
            luck.total_normalized,
            luck.total_percent,
            optional(luck.rate_normalized),
            optional(luck.rate_percent),
            luck.rating.map_or("na", |rating| rating.token()),
        ));
    }

    out.push_str("\n>FB");
    for player in SUMMARY_ORDER {
        match stats.player(player).absolute_rating {
            Some(rating) => out.push_str(&format!(":{rating:.1}")),
            None => out.push_str(":0"),
        }
    }
    out.push_str("\n\n");
    out
}

/// Error fields shown as positive penalties.
fn error_fields(summary: &ErrorSummary) -> String {
    format!(
        ":{:.3}:{:.3}:{}:{}:{}:{}",
        negated(summary.total_normalized),
        negated(summary.total_percent),
        optional(summary.rate_normalized.map(negated)),
        optional(summary.rate_percent.map(negated)),
        optional(summary.snowie.map(negated)),
        summary.rating.token(),
    )
}

fn negated(value: f32) -> f32 {
    // Keeps zero unsigned.
    0.0 - value
}

fn optional(value: Option<f32>) -> String {
    value.map_or_else(|| "na".to_string(), |v| format!("{v:.3}"))
}

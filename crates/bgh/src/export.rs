//! Export of matches, hints and single moves.

use std::io::Write;

use bg_analysis::{
    resignation_value, ActualCubeAction, AnalysisConfig, CubeAnalysis, CubeDecision,
    DecisionAnalysis, GameAnalyzer, GameRecord, GameStatistics, HintDecision, HintRequest,
    MatchRecord, MatchStatistics, MoveRecord, RecordAction,
};
use bg_core::CubeContext;

use crate::options::OutputOptions;
use crate::writer::{
    annotation, candidate_moves, cube_block, cube_label, game_header, move_analysis, move_intro,
    summary,
};
use crate::ExportError;

/// Renders analysed records in the hub's line format.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    analyzer: GameAnalyzer,
    options: OutputOptions,
}

impl Exporter {
    /// Exporter with the given thresholds and output options.
    pub fn new(config: AnalysisConfig, options: OutputOptions) -> Self {
        Self {
            analyzer: GameAnalyzer::new(config),
            options,
        }
    }

    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    /// Exports every game of a match followed by the match summary.
    ///
    /// Each game is rendered completely before it is written, so a failing
    /// record leaves no partial game in `out`.
    pub fn export_match<W: Write>(
        &self,
        record: &MatchRecord,
        out: &mut W,
    ) -> Result<(), ExportError> {
        let match_length = record.match_length();
        let mut totals = MatchStatistics::new();

        for game in &record.games {
            tracing::debug!(
                "Exporting game {} ({} records)",
                game.info.game_number,
                game.records.len()
            );
            let (text, statistics) = self.render_game(game)?;
            totals.fold_in(&statistics);
            out.write_all(text.as_bytes())?;
        }

        if totals.games() > 0 {
            let stats = totals.finish(match_length, self.analyzer.config());
            out.write_all(summary(&stats).as_bytes())?;
        }
        out.flush()?;

        tracing::info!("Exported {} games", record.games.len());
        Ok(())
    }

    /// Renders one game: header, records and game summary.
    pub fn render_game(&self, game: &GameRecord) -> Result<(String, GameStatistics), ExportError> {
        let analysis = self.analyzer.analyze_game(game)?;
        let mut text = game_header(&game.info);

        for (record, decision) in game.records.iter().zip(&analysis.decisions) {
            text.push_str(&self.render_record(record, decision));
            if self.options.include_annotations {
                if let Some(comment) = &record.comment {
                    text.push_str(&annotation(comment));
                }
            }
        }

        let stats = analysis
            .statistics
            .finalize(game.info.match_length, self.analyzer.config());
        text.push_str(&summary(&stats));
        text.push_str("\n$\n");
        Ok((text, analysis.statistics))
    }

    /// Renders the intro and analysis of one record.
    pub fn render_record(&self, record: &MoveRecord, decision: &DecisionAnalysis) -> String {
        let ctx = &record.ctx;
        let mut text = move_intro(record);
        match &record.action {
            RecordAction::Normal(play) => {
                if self.options.include_analysis {
                    text.push_str(&move_analysis(
                        play,
                        decision.luck.as_ref(),
                        decision.chequer.map(|chequer| chequer.skill),
                        ctx,
                        &self.options,
                    ));
                    text.push_str(&cube_block(
                        play.cube.as_ref(),
                        decision.cube.as_ref(),
                        ctx,
                        &self.options,
                    ));
                }
            }
            RecordAction::Double { cube }
            | RecordAction::Take { cube }
            | RecordAction::Drop { cube } => {
                text.push_str(cube_label(&record.action).unwrap_or_default());
                if self.options.include_analysis {
                    text.push_str(&cube_block(
                        Some(cube),
                        decision.cube.as_ref(),
                        ctx,
                        &self.options,
                    ));
                }
            }
        }
        text
    }

    /// Exports the hint for a pending decision.
    ///
    /// A recommended resignation comes first, as `Resign:<points>`.
    pub fn export_hint<W: Write>(&self, hint: &HintRequest, out: &mut W) -> Result<(), ExportError> {
        let ctx = &hint.ctx;
        let mut text = String::new();

        if let (Some(board), Some(evaluator)) = (&hint.board, &hint.resignation) {
            if let Some(value) = resignation_value(evaluator, board, ctx, hint.player)? {
                tracing::debug!("Resignation recommended at {:?}", value);
                text.push_str(&format!("Resign:{}\n", value.points_at(ctx.cube_value)));
            }
        }

        match &hint.decision {
            HintDecision::Cube { cube } => {
                text.push_str(&self.hint_cube(cube, ctx, ActualCubeAction::NoDouble));
            }
            HintDecision::Take { cube } => {
                text.push_str(&self.hint_cube(cube, ctx, ActualCubeAction::Take));
            }
            HintDecision::Move(play) => {
                play.validate()?;
                text.push_str(&candidate_moves(play, ctx, &self.options));
            }
        }

        out.write_all(text.as_bytes())?;
        out.flush()?;
        tracing::info!("Exported hint for player {}", hint.player);
        Ok(())
    }

    fn hint_cube(&self, cube: &CubeAnalysis, ctx: &CubeContext, action: ActualCubeAction) -> String {
        // Nothing has been played yet, so there is nothing to annotate.
        let decision = self
            .analyzer
            .cube(cube, ctx, action)
            .map(|decision| CubeDecision {
                annotation: None,
                ..decision
            });
        cube_block(Some(cube), decision.as_ref(), ctx, &self.options)
    }

    /// Exports the intro and analysis of one record of a game.
    pub fn export_move<W: Write>(
        &self,
        game: &GameRecord,
        index: usize,
        out: &mut W,
    ) -> Result<(), ExportError> {
        let record = game.records.get(index).ok_or(ExportError::NoSuchRecord {
            index,
            count: game.records.len(),
        })?;
        let decision = self.analyzer.analyze_record(record)?;
        let text = self.render_record(record, &decision);
        out.write_all(text.as_bytes())?;
        out.flush()?;
        tracing::info!("Exported record {} of game {}", index, game.info.game_number);
        Ok(())
    }
}

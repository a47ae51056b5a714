//! Cube and score context for equity conversion.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Crawford rule state of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawfordState {
    /// Neither player is one point away, or the Crawford rule is off.
    #[default]
    None,
    /// This is the Crawford game; the cube is dead.
    Crawford,
    /// Games after the Crawford game.
    PostCrawford,
}

impl CrawfordState {
    /// Protocol code: 0 none, 1 Crawford, 2 post-Crawford.
    pub const fn code(self) -> u8 {
        match self {
            CrawfordState::None => 0,
            CrawfordState::Crawford => 1,
            CrawfordState::PostCrawford => 2,
        }
    }
}

/// Match-winning chances of the player on roll after the current game.
///
/// These come from the match equity table of the external evaluator:
/// `win` is the player's match-winning chance if they win the current
/// cube value, `lose` if they lose it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchEquity {
    pub win: f32,
    pub lose: f32,
}

/// Score and cube situation of a decision.
///
/// Equities handled by the analysis are always from the perspective of
/// the player on roll and normalized to a cube value of one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeContext {
    /// Current cube value.
    pub cube_value: u32,
    /// Player owning the cube, `None` when centered.
    #[serde(default)]
    pub cube_owner: Option<Player>,
    /// Player whose decision is analysed.
    pub on_roll: Player,
    /// Match length in points, 0 for money play.
    #[serde(default)]
    pub match_length: u32,
    /// Match score, indexed by player.
    #[serde(default)]
    pub score: [u32; 2],
    #[serde(default)]
    pub crawford: CrawfordState,
    #[serde(default)]
    pub jacoby: bool,
    #[serde(default)]
    pub beavers: bool,
    /// Whether the cube is in use at all.
    #[serde(default = "default_cube_use")]
    pub cube_use: bool,
    /// Match equities for match play. Ignored for money play.
    #[serde(default)]
    pub match_equity: Option<MatchEquity>,
}

fn default_cube_use() -> bool {
    true
}

impl CubeContext {
    /// Money game context with a centered cube of value one.
    pub fn money(on_roll: Player) -> Self {
        Self {
            cube_value: 1,
            cube_owner: None,
            on_roll,
            match_length: 0,
            score: [0, 0],
            crawford: CrawfordState::None,
            jacoby: false,
            beavers: false,
            cube_use: true,
            match_equity: None,
        }
    }

    /// Match play context with a centered cube of value one.
    pub fn match_play(
        on_roll: Player,
        match_length: u32,
        score: [u32; 2],
        match_equity: MatchEquity,
    ) -> Self {
        Self {
            match_length,
            score,
            match_equity: Some(match_equity),
            ..Self::money(on_roll)
        }
    }

    /// Returns `true` for unlimited (money) play.
    #[inline]
    pub fn is_money(&self) -> bool {
        self.match_length == 0
    }

    /// Returns `true` if the player on roll owns the cube.
    pub fn on_roll_owns_cube(&self) -> bool {
        self.cube_owner == Some(self.on_roll)
    }

    /// Returns `true` if the player on roll may double or redouble.
    pub fn can_double(&self) -> bool {
        self.cube_use
            && self.crawford != CrawfordState::Crawford
            && self.cube_owner.map_or(true, |owner| owner == self.on_roll)
    }

    /// The same situation seen from the opponent's side.
    pub fn flipped(&self) -> Self {
        Self {
            on_roll: self.on_roll.opponent(),
            match_equity: self.match_equity.map(|me| MatchEquity {
                win: 1.0 - me.lose,
                lose: 1.0 - me.win,
            }),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crawford_codes() {
        assert_eq!(CrawfordState::None.code(), 0);
        assert_eq!(CrawfordState::Crawford.code(), 1);
        assert_eq!(CrawfordState::PostCrawford.code(), 2);
    }

    #[test]
    fn centered_cube_can_be_doubled() {
        let ctx = CubeContext::money(Player::Zero);
        assert!(ctx.can_double());
        assert!(!ctx.on_roll_owns_cube());
    }

    #[test]
    fn opponent_owned_cube_cannot_be_doubled() {
        let ctx = CubeContext {
            cube_owner: Some(Player::One),
            cube_value: 2,
            ..CubeContext::money(Player::Zero)
        };
        assert!(!ctx.can_double());
    }

    #[test]
    fn crawford_game_has_dead_cube() {
        let ctx = CubeContext {
            crawford: CrawfordState::Crawford,
            ..CubeContext::match_play(
                Player::Zero,
                5,
                [4, 2],
                MatchEquity {
                    win: 1.0,
                    lose: 0.3,
                },
            )
        };
        assert!(!ctx.can_double());
    }

    #[test]
    fn flipped_swaps_perspective() {
        let ctx = CubeContext::match_play(
            Player::Zero,
            7,
            [0, 0],
            MatchEquity {
                win: 0.6,
                lose: 0.4,
            },
        );
        let flipped = ctx.flipped();
        assert_eq!(flipped.on_roll, Player::One);
        let me = flipped.match_equity.unwrap();
        assert!((me.win - 0.6).abs() < 1e-6);
        assert!((me.lose - 0.4).abs() < 1e-6);
    }
}

//! Checker distribution on a backgammon board.

use crate::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of board points, bar excluded.
pub const POINTS: usize = 24;

/// Index of the bar in a player's point array.
pub const BAR: usize = 24;

/// Checkers each player starts with.
pub const CHECKERS: u8 = 15;

/// Errors that can occur when building a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("player {player} has {count} checkers on the board, at most 15 allowed")]
    TooManyCheckers { player: Player, count: u32 },
}

/// Checker counts for both players.
///
/// Each player's array is indexed from that player's own perspective:
/// index 0 is the player's ace point (the last point before bearing off),
/// index 23 is the far point in the opponent's home board and index
/// [`BAR`] is the bar. Checkers not counted anywhere have been borne off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 25]; 2]", into = "[[u8; 25]; 2]")]
pub struct Board {
    checkers: [[u8; 25]; 2],
}

impl Board {
    /// Builds a board, rejecting more than fifteen checkers per side.
    pub fn new(checkers: [[u8; 25]; 2]) -> Result<Self, BoardError> {
        for player in Player::ALL {
            let count: u32 = checkers[player.index()].iter().map(|&c| u32::from(c)).sum();
            if count > u32::from(CHECKERS) {
                return Err(BoardError::TooManyCheckers { player, count });
            }
        }
        Ok(Self { checkers })
    }

    /// The standard starting position.
    pub fn starting() -> Self {
        let mut side = [0u8; 25];
        side[5] = 5;
        side[7] = 3;
        side[12] = 5;
        side[23] = 2;
        Self {
            checkers: [side, side],
        }
    }

    /// Returns one player's point array.
    #[inline]
    pub fn checkers(&self, player: Player) -> &[u8; 25] {
        &self.checkers[player.index()]
    }

    /// Number of checkers the player still has on the board, bar included.
    pub fn on_board(&self, player: Player) -> u8 {
        self.checkers(player).iter().sum()
    }

    /// Number of checkers the player has borne off.
    pub fn borne_off(&self, player: Player) -> u8 {
        CHECKERS - self.on_board(player)
    }

    /// Index of the point farthest from home that holds a checker.
    pub fn farthest_point(&self, player: Player) -> Option<usize> {
        self.checkers(player).iter().rposition(|&c| c > 0)
    }
}

impl TryFrom<[[u8; 25]; 2]> for Board {
    type Error = BoardError;

    fn try_from(checkers: [[u8; 25]; 2]) -> Result<Self, Self::Error> {
        Self::new(checkers)
    }
}

impl From<Board> for [[u8; 25]; 2] {
    fn from(board: Board) -> Self {
        board.checkers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_all_checkers() {
        let board = Board::starting();
        for player in Player::ALL {
            assert_eq!(board.on_board(player), 15);
            assert_eq!(board.borne_off(player), 0);
            assert_eq!(board.farthest_point(player), Some(23));
        }
    }

    #[test]
    fn rejects_sixteen_checkers() {
        let mut checkers = [[0u8; 25]; 2];
        checkers[1][0] = 16;
        assert_eq!(
            Board::new(checkers),
            Err(BoardError::TooManyCheckers {
                player: Player::One,
                count: 16
            })
        );
    }

    #[test]
    fn bar_counts_as_farthest() {
        let mut checkers = [[0u8; 25]; 2];
        checkers[0][BAR] = 1;
        checkers[0][3] = 2;
        let board = Board::new(checkers).unwrap();
        assert_eq!(board.farthest_point(Player::Zero), Some(BAR));
        assert_eq!(board.borne_off(Player::Zero), 12);
        assert_eq!(board.farthest_point(Player::One), None);
    }

    #[test]
    fn deserialize_validates() {
        let mut checkers = [[0u8; 25]; 2];
        checkers[0][0] = 20;
        let json = serde_json::to_string(&checkers).unwrap();
        assert!(serde_json::from_str::<Board>(&json).is_err());
    }
}

//! Player representation.

use serde::{Deserialize, Serialize};

/// The two players of a backgammon game.
///
/// Player 0 is rendered as `B` and player 1 as `W` on the hub protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    #[serde(rename = "0")]
    Zero = 0,
    #[serde(rename = "1")]
    One = 1,
}

impl Player {
    /// Both players, in index order.
    pub const ALL: [Player; 2] = [Player::Zero, Player::One];

    /// Returns the opponent.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    /// Returns the index (0 or 1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the player for an index, if it is 0 or 1.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::Zero),
            1 => Some(Player::One),
            _ => None,
        }
    }

    /// Returns the single-letter tag used on the hub protocol.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Player::Zero => "B",
            Player::One => "W",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

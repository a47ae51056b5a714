//! A rolled pair of dice.

use serde::{Deserialize, Serialize};

/// Two dice as rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice(pub u8, pub u8);

impl Dice {
    /// Returns `true` if both dice show the same number.
    pub fn is_double(self) -> bool {
        self.0 == self.1
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_concatenates_faces() {
        assert_eq!(Dice(6, 3).to_string(), "63");
        assert_eq!(Dice(1, 1).to_string(), "11");
    }

    #[test]
    fn doubles() {
        assert!(Dice(4, 4).is_double());
        assert!(!Dice(4, 2).is_double());
    }
}

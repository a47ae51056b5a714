//! Skill and luck rating classification.

use crate::config::{LuckThresholds, SkillThresholds};
use serde::{Deserialize, Serialize};

/// Overall playing strength derived from the per-move error rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Awful,
    Beginner,
    Casual,
    Intermediate,
    Advanced,
    Expert,
    WorldClass,
    Supernatural,
    /// No unforced moves to rate.
    NotApplicable,
}

/// Upper error-rate bound (inclusive, per move, normalized) of each rating,
/// best first.
const RATING_TABLE: [(f32, Rating); 7] = [
    (0.002, Rating::Supernatural),
    (0.005, Rating::WorldClass),
    (0.008, Rating::Expert),
    (0.012, Rating::Advanced),
    (0.018, Rating::Intermediate),
    (0.026, Rating::Casual),
    (0.035, Rating::Beginner),
];

impl Rating {
    /// Rates a per-move normalized error (non-positive).
    ///
    /// An error exactly on a boundary gets the better rating.
    pub fn from_error(normalized_error: f32) -> Self {
        let magnitude = -normalized_error;
        RATING_TABLE
            .iter()
            .find(|(bound, _)| magnitude <= *bound)
            .map_or(Rating::Awful, |&(_, rating)| rating)
    }
}

/// Shorthand for [`Rating::from_error`].
pub fn rating_for_error(normalized_error: f32) -> Rating {
    Rating::from_error(normalized_error)
}

/// How favourable the dice were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuckRating {
    VeryUnlucky,
    Unlucky,
    None,
    Lucky,
    VeryLucky,
}

/// Per-move average luck bounds of the game-level luck rating.
const LUCKY: f32 = 0.06;
const VERY_LUCKY: f32 = 0.10;

impl LuckRating {
    /// Rates the average luck per move over a game or match.
    pub fn from_average(normalized_luck: f32) -> Self {
        classify_luck(normalized_luck, LUCKY, VERY_LUCKY)
    }

    /// Rates the luck of a single roll.
    pub fn for_roll(luck: f32, thresholds: &LuckThresholds) -> Self {
        classify_luck(luck, thresholds.some, thresholds.very)
    }

    /// The rating of the opposite luck.
    pub fn mirror(self) -> Self {
        match self {
            LuckRating::VeryUnlucky => LuckRating::VeryLucky,
            LuckRating::Unlucky => LuckRating::Lucky,
            LuckRating::None => LuckRating::None,
            LuckRating::Lucky => LuckRating::Unlucky,
            LuckRating::VeryLucky => LuckRating::VeryUnlucky,
        }
    }
}

fn classify_luck(luck: f32, some: f32, very: f32) -> LuckRating {
    if luck < -very {
        LuckRating::VeryUnlucky
    } else if luck < -some {
        LuckRating::Unlucky
    } else if luck > very {
        LuckRating::VeryLucky
    } else if luck > some {
        LuckRating::Lucky
    } else {
        LuckRating::None
    }
}

/// Shorthand for [`LuckRating::from_average`].
pub fn luck_rating_for(normalized_luck: f32) -> LuckRating {
    LuckRating::from_average(normalized_luck)
}

/// Quality of a single decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillRating {
    VeryBad,
    Bad,
    Doubtful,
    #[default]
    None,
}

impl SkillRating {
    /// Classifies the error of a decision (non-positive, normalized).
    pub fn from_error(error: f32, thresholds: &SkillThresholds) -> Self {
        if error < -thresholds.very_bad {
            SkillRating::VeryBad
        } else if error < -thresholds.bad {
            SkillRating::Bad
        } else if error < -thresholds.doubtful {
            SkillRating::Doubtful
        } else {
            SkillRating::None
        }
    }

    /// Returns `true` for doubtful or worse.
    pub fn is_error(self) -> bool {
        self != SkillRating::None
    }
}

//! Protocol tokens of classification results.

use bg_analysis::{CubeVerdict, LuckRating, Rating, SkillRating};

/// A value with a fixed token on the hub protocol.
pub trait Token {
    fn token(&self) -> &'static str;
}

impl Token for Rating {
    fn token(&self) -> &'static str {
        match self {
            Rating::Awful => "harmless",
            Rating::Beginner => "mostly_harmless",
            Rating::Casual => "poor",
            Rating::Intermediate => "average",
            Rating::Advanced => "competent",
            Rating::Expert => "dangerous",
            Rating::WorldClass => "deadly",
            Rating::Supernatural => "elite",
            Rating::NotApplicable => "na",
        }
    }
}

impl Token for LuckRating {
    fn token(&self) -> &'static str {
        match self {
            LuckRating::VeryUnlucky => "very_unlucky",
            LuckRating::Unlucky => "unlucky",
            LuckRating::None => "none",
            LuckRating::Lucky => "lucky",
            LuckRating::VeryLucky => "very_lucky",
        }
    }
}

impl Token for SkillRating {
    fn token(&self) -> &'static str {
        match self {
            SkillRating::VeryBad => "very_bad",
            SkillRating::Bad => "bad",
            SkillRating::Doubtful => "doubtful",
            SkillRating::None => "okay",
        }
    }
}

impl Token for CubeVerdict {
    fn token(&self) -> &'static str {
        match self {
            CubeVerdict::NoDoubleTake => "no_double_take",
            CubeVerdict::NoDoubleBeaver => "no_double_beaver",
            CubeVerdict::DoubleTake => "double_take",
            CubeVerdict::DoubleBeaver => "double_beaver",
            CubeVerdict::DoublePass => "double_pass",
            CubeVerdict::TooGoodTake => "too_good_take",
            CubeVerdict::TooGoodPass => "too_good_pass",
            CubeVerdict::OptionalDoubleTake => "optional_double_take",
            CubeVerdict::OptionalDoubleBeaver => "optional_double_beaver",
            CubeVerdict::OptionalDoublePass => "optional_double_pass",
            CubeVerdict::NoRedoubleTake => "no_redouble_take",
            CubeVerdict::NoRedoubleBeaver => "no_redouble_beaver",
            CubeVerdict::RedoubleTake => "redouble_take",
            CubeVerdict::RedoublePass => "redouble_pass",
            CubeVerdict::TooGoodRedoubleTake => "too_good_redouble_take",
            CubeVerdict::TooGoodRedoublePass => "too_good_redouble_pass",
            CubeVerdict::OptionalRedoubleTake => "optional_redouble_take",
            CubeVerdict::OptionalRedoublePass => "optional_redouble_pass",
            CubeVerdict::NotAvailable => "na",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_tokens() {
        assert_eq!(Rating::Supernatural.token(), "elite");
        assert_eq!(Rating::Awful.token(), "harmless");
        assert_eq!(Rating::NotApplicable.token(), "na");
    }

    #[test]
    fn skill_none_is_okay() {
        assert_eq!(SkillRating::None.token(), "okay");
        assert_eq!(SkillRating::VeryBad.token(), "very_bad");
    }

    #[test]
    fn verdict_tokens_match_serde_names() {
        for verdict in [
            CubeVerdict::DoubleTake,
            CubeVerdict::TooGoodRedoublePass,
            CubeVerdict::OptionalDoubleBeaver,
        ] {
            let json = serde_json::to_string(&verdict).unwrap();
            assert_eq!(json.trim_matches('"'), verdict.token());
        }
        assert_eq!(CubeVerdict::NotAvailable.token(), "na");
    }

    #[test]
    fn luck_tokens() {
        assert_eq!(LuckRating::None.token(), "none");
        assert_eq!(LuckRating::VeryLucky.token(), "very_lucky");
    }
}

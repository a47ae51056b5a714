//! Tunable thresholds for classification.
//!
//! None of the classifiers hardcode their thresholds; they all read them
//! from an [`AnalysisConfig`] supplied by the caller.

use serde::{Deserialize, Serialize};

/// Error magnitudes (positive, normalized equity) separating skill levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillThresholds {
    pub very_bad: f32,
    pub bad: f32,
    pub doubtful: f32,
}

impl Default for SkillThresholds {
    fn default() -> Self {
        Self {
            very_bad: 0.16,
            bad: 0.08,
            doubtful: 0.04,
        }
    }
}

/// Luck magnitudes (positive, normalized equity) separating per-move luck levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuckThresholds {
    pub very: f32,
    pub some: f32,
}

impl Default for LuckThresholds {
    fn default() -> Self {
        Self {
            very: 0.6,
            some: 0.3,
        }
    }
}

/// Configuration for decision analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Thresholds for checker play and cube skill.
    pub skill: SkillThresholds,
    /// Thresholds for the luck of a single roll.
    pub luck: LuckThresholds,
    /// Margin (normalized equity) under which a cube decision is close.
    pub close_cube_threshold: f32,
    /// Margin (normalized equity) under which doubling is optional.
    pub optional_double_epsilon: f32,
    /// Offset of the absolute rating formula.
    pub rating_offset: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            skill: SkillThresholds::default(),
            luck: LuckThresholds::default(),
            close_cube_threshold: 0.16,
            optional_double_epsilon: 1.0e-5,
            rating_offset: 2050.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.skill.very_bad, 0.16);
        assert_eq!(config.luck.very, 0.6);
        assert_eq!(config.rating_offset, 2050.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"close_cube_threshold": 0.1, "skill": {"bad": 0.1}}"#)
                .unwrap();
        assert_eq!(config.close_cube_threshold, 0.1);
        assert_eq!(config.skill.bad, 0.1);
        assert_eq!(config.skill.very_bad, 0.16);
        assert_eq!(config.optional_double_epsilon, 1.0e-5);
    }
}

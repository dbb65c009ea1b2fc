//! Score presentation model: band classification and gauge mapping.

use serde::{Deserialize, Serialize};

use crate::wizard::Improvement;

/// Bottom of the score scale.
pub const SCORE_FLOOR: i32 = 300;
/// Top of the score scale.
pub const SCORE_CEILING: i32 = 850;

/// Qualitative score classification.
///
/// Lower bounds are inclusive: exactly 700 is Good, exactly 500 is Fair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn classify(score: i32) -> Self {
        if score >= 700 {
            Self::Good
        } else if score >= 500 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Semantic palette name the rendering layer maps to an actual color.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "success",
            Self::Fair => "warning",
            Self::Poor => "error",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        };
        write!(f, "{s}")
    }
}

/// Everything the rendering layer needs to draw a scored session.
///
/// The rendering toolkit itself is an external collaborator; this model is
/// the whole contract it consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualModel {
    pub score: i32,
    pub band: ScoreBand,
    /// Gauge fill in [0, 1] over the 300..=850 scale.
    pub fraction: f64,
    /// Recommendations, in the order the server gave them.
    pub improvements: Vec<Improvement>,
}

/// Map a score and its recommendations into a bounded display model.
///
/// Scores are already constrained to 300..=850 by the remote contract, but
/// the fraction is clamped anyway so a misbehaving service can never push
/// the gauge out of range. Improvements are passed through untouched:
/// never reordered, never deduplicated.
pub fn present(score: i32, improvements: Vec<Improvement>) -> VisualModel {
    let clamped = score.clamp(SCORE_FLOOR, SCORE_CEILING);
    let fraction = f64::from(clamped - SCORE_FLOOR) / f64::from(SCORE_CEILING - SCORE_FLOOR);
    VisualModel {
        score,
        band: ScoreBand::classify(score),
        fraction,
        improvements,
    }
}

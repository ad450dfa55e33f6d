//! Stroke risk scores on a 0..=100 scale.

use serde::{Deserialize, Serialize};

/// A computed risk score, clamped to [0.0, 100.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Scores below this are low risk.
    pub const MODERATE_THRESHOLD: f64 = 25.0;
    /// Scores at or above this are elevated.
    pub const ELEVATED_THRESHOLD: f64 = 50.0;
    /// Scores at or above this are high risk.
    pub const HIGH_THRESHOLD: f64 = 75.0;

    /// Creates a score, clamping out-of-range input.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Score rounded to one decimal place, the form shown to callers.
    pub fn rounded(&self) -> f64 {
        (self.0 * 10.0).round() / 10.0
    }

    pub fn band(&self) -> RiskBand {
        if self.0 >= Self::HIGH_THRESHOLD {
            RiskBand::High
        } else if self.0 >= Self::ELEVATED_THRESHOLD {
            RiskBand::Elevated
        } else if self.0 >= Self::MODERATE_THRESHOLD {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }
}

impl Default for RiskScore {
    fn default() -> Self {
        Self(0.0)
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for RiskScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<RiskScore> for f64 {
    fn from(score: RiskScore) -> f64 {
        score.0
    }
}

/// Coarse banding of a score for display and triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Moderate,
    Elevated,
    High,
}

impl RiskBand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Elevated => "elevated",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

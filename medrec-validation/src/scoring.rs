//! Weighted risk formula over a validated report.

use medrec_core::models::{RiskScore, ValidatedReport};

/// Factor weights. They sum to 1.0, so the weighted sum lands in [0, 1]
/// before scaling to the 0..=100 score range.
pub const AGE_WEIGHT: f64 = 0.40;
pub const HYPERTENSION_WEIGHT: f64 = 0.25;
pub const GLUCOSE_WEIGHT: f64 = 0.20;
pub const BMI_WEIGHT: f64 = 0.15;

/// Normalization ceilings. Values at or above a ceiling contribute the
/// factor's full weight.
pub const AGE_CEILING: f64 = 100.0;
pub const GLUCOSE_CEILING: f64 = 200.0;
pub const BMI_CEILING: f64 = 40.0;

/// Missing values contribute zero. The stored report is never altered.
fn normalized(value: Option<f64>, ceiling: f64) -> f64 {
    (value.unwrap_or(0.0) / ceiling).min(1.0)
}

/// 4-factor additive risk formula.
///
/// ```text
/// score = 100 × ( min(age/100, 1)     × 0.40
///               + hypertension        × 0.25
///               + min(glucose/200, 1) × 0.20
///               + min(bmi/40, 1)      × 0.15 )
/// ```
///
/// Result is clamped to [0.0, 100.0].
pub fn score(report: &ValidatedReport) -> RiskScore {
    let age = normalized(report.age, AGE_CEILING);
    let hypertension = report.hypertension as f64;
    let glucose = normalized(report.avg_glucose_level, GLUCOSE_CEILING);
    let bmi = normalized(report.bmi, BMI_CEILING);

    let weighted = age * AGE_WEIGHT
        + hypertension * HYPERTENSION_WEIGHT
        + glucose * GLUCOSE_WEIGHT
        + bmi * BMI_WEIGHT;

    RiskScore::new(weighted * 100.0)
}

/// Each factor's contribution in score points.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub age_points: f64,
    pub hypertension_points: f64,
    pub glucose_points: f64,
    pub bmi_points: f64,
    pub total: RiskScore,
}

/// Score with a per-factor breakdown for display. The total is the
/// same value [`score`] returns; the points may differ from it by
/// float rounding when summed.
pub fn score_breakdown(report: &ValidatedReport) -> ScoreBreakdown {
    let age_points = normalized(report.age, AGE_CEILING) * AGE_WEIGHT * 100.0;
    let hypertension_points = report.hypertension as f64 * HYPERTENSION_WEIGHT * 100.0;
    let glucose_points =
        normalized(report.avg_glucose_level, GLUCOSE_CEILING) * GLUCOSE_WEIGHT * 100.0;
    let bmi_points = normalized(report.bmi, BMI_CEILING) * BMI_WEIGHT * 100.0;
    let total = score(report);

    ScoreBreakdown {
        age_points,
        hypertension_points,
        glucose_points,
        bmi_points,
        total,
    }
}

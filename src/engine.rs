//! # Assessment Engine
//! Pure, testable logic that maps a `PatientFeatures` record → `RiskAssessment`.
//! No I/O, suitable for unit tests and offline evaluation.
//!
//! Policy: sum the per-feature contributions, calibrate through a sigmoid,
//! flag elevated risk above 0.6, band the probability into six categories,
//! and report confidence as distance from the 0.5 coin-flip point with a
//! floor/ceiling so certainty is never overstated.

use crate::assessment::{RiskAssessment, RiskCategory};
use crate::features::PatientFeatures;
use crate::scoring;

/// Probability above which the binary prediction flips to 1.
pub const PREDICTION_THRESHOLD: f64 = 0.6;

/// Confidence floor/ceiling (reported as 60–95 percent).
const CONFIDENCE_FLOOR: f64 = 0.60;
const CONFIDENCE_CEILING: f64 = 0.95;

/// Score one record. Total over numeric input: every rule table ends in a
/// defined fall-through, so there is no failure path here.
pub fn assess(features: &PatientFeatures) -> RiskAssessment {
    // 1) Additive linear score over the thirteen feature tables.
    let score = scoring::risk_score(features);

    // 2) Logistic calibration to (0, 1).
    let probability = sigmoid(score);

    // 3) Binary decision.
    let prediction = u8::from(probability > PREDICTION_THRESHOLD);

    // 4) Six-way banding, high to low.
    let risk_category = RiskCategory::from_probability(probability);

    // 5) Confidence = distance from 0.5, clamped to [0.60, 0.95].
    let confidence = ((probability - 0.5).abs() * 2.0).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING);

    RiskAssessment {
        prediction,
        probability: round_to(probability, 3),
        confidence: (confidence * 100.0).round() as u8,
        risk_score: round_to(score, 2),
        risk_category,
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn round_to(x: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (x * factor).round() / factor
}

//! # Risk Assessment Types
//! Output value returned per scoring call: binary prediction, calibrated
//! probability, confidence percent, raw additive score, and a six-band
//! category label for the UI.
//!
//! The banding thresholds live here as a single ordered table so tests and
//! the engine share one source of truth.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Six-band verdict for a scored patient record, ordered by severity.
///
/// Serialized labels match what the form UI displays verbatim, emoji
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "✅ No Risk")]
    NoRisk,
    #[serde(rename = "✅ Very Low Risk")]
    VeryLow,
    #[serde(rename = "💛 Low Risk")]
    Low,
    #[serde(rename = "⚠️ Moderate Risk")]
    Moderate,
    #[serde(rename = "⚠️ High Risk")]
    High,
    #[serde(rename = "🚨 Very High Risk")]
    VeryHigh,
}

/// Banding table, evaluated top-down with strict lower bounds; first match
/// wins. Probabilities at or below 0.20 fall through to `NoRisk`.
pub const CATEGORY_BANDS: &[(f64, RiskCategory)] = &[
    (0.85, RiskCategory::VeryHigh),
    (0.70, RiskCategory::High),
    (0.60, RiskCategory::Moderate),
    (0.40, RiskCategory::Low),
    (0.20, RiskCategory::VeryLow),
];

impl RiskCategory {
    /// Band a sigmoid probability into a category.
    pub fn from_probability(p: f64) -> Self {
        CATEGORY_BANDS
            .iter()
            .find(|(lower, _)| p > *lower)
            .map(|(_, cat)| *cat)
            .unwrap_or(RiskCategory::NoRisk)
    }

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::NoRisk => "✅ No Risk",
            RiskCategory::VeryLow => "✅ Very Low Risk",
            RiskCategory::Low => "💛 Low Risk",
            RiskCategory::Moderate => "⚠️ Moderate Risk",
            RiskCategory::High => "⚠️ High Risk",
            RiskCategory::VeryHigh => "🚨 Very High Risk",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complete assessment for one patient record.
/// This is the shape the `/api/predict` endpoint returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// 1 iff `probability > 0.6`, else 0.
    pub prediction: u8,
    /// Sigmoid of the additive score, rounded to 3 decimals.
    pub probability: f64,
    /// Integer percent in [60, 95], distance of `probability` from 0.5
    /// with a deliberate floor/ceiling to avoid overstating certainty.
    pub confidence: u8,
    /// Raw pre-sigmoid additive score, rounded to 2 decimals.
    pub risk_score: f64,
    /// Banded verdict label.
    pub risk_category: RiskCategory,
}

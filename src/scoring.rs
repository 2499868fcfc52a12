//! # Feature Scoring Tables
//! The hand-tuned additive heuristic: one ordered rule table per feature,
//! evaluated first-match-wins, contributions summed with no interaction
//! terms. These breakpoints and deltas ARE the model — keep them as data
//! so every bin stays auditable and testable in isolation.

use crate::features::PatientFeatures;

/// Predicate half of a scoring rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cond {
    /// Strictly below the bound.
    Lt(f64),
    /// At or below the bound.
    Le(f64),
    /// At or above the bound.
    Ge(f64),
    /// Exactly equal.
    Eq(f64),
    /// Catch-all.
    Any,
}

impl Cond {
    fn matches(self, v: f64) -> bool {
        match self {
            Cond::Lt(b) => v < b,
            Cond::Le(b) => v <= b,
            Cond::Ge(b) => v >= b,
            Cond::Eq(b) => v == b,
            Cond::Any => true,
        }
    }
}

/// One `(predicate, delta)` entry of a feature table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub when: Cond,
    pub delta: f64,
}

const fn rule(when: Cond, delta: f64) -> Rule {
    Rule { when, delta }
}

pub const AGE: &[Rule] = &[
    rule(Cond::Lt(35.0), -0.5),
    rule(Cond::Le(45.0), 0.0),
    rule(Cond::Le(55.0), 0.3),
    rule(Cond::Le(65.0), 0.7),
    rule(Cond::Any, 1.0),
];

pub const SEX: &[Rule] = &[rule(Cond::Eq(1.0), 0.4)];

// Literal evaluation order: asymptomatic (3) first, then typical angina (0).
pub const CP: &[Rule] = &[
    rule(Cond::Eq(3.0), 0.8),
    rule(Cond::Eq(0.0), 0.6),
    rule(Cond::Eq(1.0), 0.3),
    rule(Cond::Eq(2.0), 0.1),
];

pub const TRESTBPS: &[Rule] = &[
    rule(Cond::Le(120.0), -0.1),
    rule(Cond::Le(140.0), 0.1),
    rule(Cond::Le(160.0), 0.4),
    rule(Cond::Any, 0.7),
];

pub const CHOL: &[Rule] = &[
    rule(Cond::Lt(200.0), -0.2),
    rule(Cond::Le(240.0), 0.1),
    rule(Cond::Le(300.0), 0.4),
    rule(Cond::Any, 0.6),
];

pub const FBS: &[Rule] = &[rule(Cond::Eq(1.0), 0.2)];

pub const RESTECG: &[Rule] = &[rule(Cond::Eq(1.0), 0.3), rule(Cond::Eq(2.0), 0.5)];

pub const THALACH: &[Rule] = &[
    rule(Cond::Ge(180.0), -0.4),
    rule(Cond::Ge(160.0), -0.2),
    rule(Cond::Ge(140.0), 0.1),
    rule(Cond::Ge(120.0), 0.5),
    rule(Cond::Any, 0.9),
];

pub const EXANG: &[Rule] = &[rule(Cond::Eq(1.0), 0.6)];

pub const OLDPEAK: &[Rule] = &[
    rule(Cond::Eq(0.0), -0.2),
    rule(Cond::Le(1.0), 0.2),
    rule(Cond::Le(2.0), 0.5),
    rule(Cond::Any, 0.8),
];

pub const SLOPE: &[Rule] = &[
    rule(Cond::Eq(0.0), -0.3),
    rule(Cond::Eq(1.0), 0.2),
    rule(Cond::Any, 0.6),
];

pub const CA: &[Rule] = &[
    rule(Cond::Eq(0.0), -0.4),
    rule(Cond::Eq(1.0), 0.3),
    rule(Cond::Eq(2.0), 0.7),
    rule(Cond::Any, 1.0),
];

pub const THAL: &[Rule] = &[
    rule(Cond::Eq(0.0), -0.2),
    rule(Cond::Eq(1.0), 0.3),
    rule(Cond::Any, 0.7),
];

/// First matching rule wins; a table without a catch-all contributes 0.0
/// for unmatched values.
pub fn contribution(rules: &[Rule], v: f64) -> f64 {
    rules
        .iter()
        .find(|r| r.when.matches(v))
        .map(|r| r.delta)
        .unwrap_or(0.0)
}

/// Raw additive risk score over all thirteen features.
pub fn risk_score(f: &PatientFeatures) -> f64 {
    contribution(AGE, f.age as f64)
        + contribution(SEX, f.sex as f64)
        + contribution(CP, f.cp as f64)
        + contribution(TRESTBPS, f.trestbps as f64)
        + contribution(CHOL, f.chol as f64)
        + contribution(FBS, f.fbs as f64)
        + contribution(RESTECG, f.restecg as f64)
        + contribution(THALACH, f.thalach as f64)
        + contribution(EXANG, f.exang as f64)
        + contribution(OLDPEAK, f.oldpeak)
        + contribution(SLOPE, f.slope as f64)
        + contribution(CA, f.ca as f64)
        + contribution(THAL, f.thal as f64)
}

//! # Assessment History
//! Bounded in-memory log of recent assessments for the `/debug` endpoints.
//! Diagnostics only — the engine never reads it, so scoring stays a pure
//! function of its input.

use std::sync::Mutex;

use chrono::Utc;

use crate::assessment::RiskAssessment;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// RFC 3339 timestamp of when the assessment was produced.
    pub ts: String,
    pub prediction: u8,
    pub probability: f64,
    pub risk_score: f64,
    pub category: &'static str,
}

#[derive(Debug)]
pub struct AssessmentLog {
    inner: Mutex<Vec<HistoryEntry>>,
    cap: usize,
}

impl AssessmentLog {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            cap: cap.min(10_000),
        }
    }

    pub fn push(&self, a: &RiskAssessment) {
        let entry = HistoryEntry {
            ts: Utc::now().to_rfc3339(),
            prediction: a.prediction,
            probability: a.probability,
            risk_score: a.risk_score,
            category: a.risk_category.label(),
        };

        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<HistoryEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let start = v.len().saturating_sub(n);
        v[start..].to_vec()
    }
}

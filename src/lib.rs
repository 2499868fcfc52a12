// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod assessment;
pub mod config;
pub mod engine;
pub mod features;
pub mod history;
pub mod metrics;
pub mod scoring;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::assessment::{RiskAssessment, RiskCategory};
pub use crate::engine::assess;
pub use crate::features::PatientFeatures;

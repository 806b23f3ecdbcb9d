//! Offline evaluation of the recommenders.
//!
//! Replays each algorithm over historical application data and scores the
//! ranked output with standard retrieval metrics, producing a comparison
//! report plus optional dataset diagnostics and A/B cohort runs.

mod config;
mod harness;
pub mod metrics;
pub mod report;
mod validation;

pub use ab_test::{AbTestOutcome, AbTestPlan, CohortOutcome};
pub use config::EvaluationConfig;
pub use harness::{AlgorithmMetrics, EvaluationHarness, GroundTruth};
pub use report::EvaluationReport;
pub use validation::{diagnose, ContentCoverage, DatasetDiagnostics, InteractionStats};

mod summary;
pub mod views;

pub use summary::EvaluationReport;

pub(crate) use summary::stringify_cutoffs;

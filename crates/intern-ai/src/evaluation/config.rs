use serde::{Deserialize, Serialize};

/// Controls for an offline evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Cutoffs evaluated for every metric.
    pub k_values: Vec<usize>,
    /// Share of a student's history held out when scoring collaborative
    /// filtering; at least one item is always held out.
    pub test_split_ratio: f64,
    /// Seed for the shuffles behind the train/test and A/B splits, so runs
    /// over the same data reproduce.
    pub split_seed: u64,
    /// Candidate depth requested from the collaborative recommender during
    /// evaluation, deeper than the production cap so the metrics have room
    /// to work.
    pub candidate_limit: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            k_values: vec![5, 10, 20],
            test_split_ratio: 0.2,
            split_seed: 42,
            candidate_limit: 20,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Tunable knobs for the scoring strategies.
///
/// The defaults reproduce the behavior the student dashboard ships with;
/// change them only in offline experiments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// A candidate must score strictly above this to surface.
    pub score_threshold: f64,
    /// Cap on the returned list length.
    pub top_n: usize,
    /// How many most-similar peers collaborative filtering consults.
    pub top_k_peers: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.2,
            top_n: 5,
            top_k_peers: 3,
        }
    }
}

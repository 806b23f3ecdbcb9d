use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::recommend::domain::RecommendationSource;

/// Metrics reported for every algorithm. Serialized names are the wire
/// contract for external tooling and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Precision,
    Recall,
    Map,
    Ndcg,
}

impl Metric {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Precision => "precision",
            Self::Recall => "recall",
            Self::Map => "map",
            Self::Ndcg => "ndcg",
        }
    }

    pub const fn ordered() -> [Metric; 4] {
        [Self::Precision, Self::Recall, Self::Map, Self::Ndcg]
    }
}

/// One algorithm's table keyed metric → stringified K → mean value.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmMetricsView {
    pub algorithm: RecommendationSource,
    pub algorithm_label: &'static str,
    pub precision: BTreeMap<String, f64>,
    pub recall: BTreeMap<String, f64>,
    pub map: BTreeMap<String, f64>,
    pub ndcg: BTreeMap<String, f64>,
}

/// Head-to-head row for one metric at one cutoff.
#[derive(Debug, Clone, Serialize)]
pub struct MetricComparisonView {
    pub metric: Metric,
    pub metric_label: &'static str,
    pub k: usize,
    pub content: f64,
    pub collaborative: f64,
    pub hybrid: f64,
    pub winner: RecommendationSource,
    pub winner_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReportView {
    pub generated_at: DateTime<Utc>,
    pub algorithms: Vec<AlgorithmMetricsView>,
    pub comparison: Vec<MetricComparisonView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::views::{AlgorithmMetricsView, EvaluationReportView, Metric, MetricComparisonView};
use crate::evaluation::harness::AlgorithmMetrics;
use crate::recommend::domain::RecommendationSource;

/// Aggregated offline-evaluation results for the three algorithms.
///
/// `summary()` flattens this into the serializable view whose shape
/// (algorithm → metric → stringified K → value) external tooling consumes.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub generated_at: DateTime<Utc>,
    pub content: AlgorithmMetrics,
    pub collaborative: AlgorithmMetrics,
    pub hybrid: AlgorithmMetrics,
}

impl EvaluationReport {
    pub fn new(
        content: AlgorithmMetrics,
        collaborative: AlgorithmMetrics,
        hybrid: AlgorithmMetrics,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            content,
            collaborative,
            hybrid,
        }
    }

    pub fn table(&self, algorithm: RecommendationSource) -> &AlgorithmMetrics {
        match algorithm {
            RecommendationSource::Content => &self.content,
            RecommendationSource::Collaborative => &self.collaborative,
            RecommendationSource::Hybrid => &self.hybrid,
        }
    }

    /// Cutoffs present in the report, taken from the content table; every
    /// table is built from the same configuration so they agree.
    pub fn k_values(&self) -> Vec<usize> {
        self.content.precision.keys().copied().collect()
    }

    /// The algorithm with the highest mean for one metric at one cutoff.
    /// Ties keep the earlier algorithm in the fixed order content,
    /// collaborative, hybrid; a later algorithm wins only on a strictly
    /// greater value.
    pub fn best_algorithm(&self, metric: Metric, k: usize) -> RecommendationSource {
        let mut winner = RecommendationSource::Content;
        let mut best = self.metric_value(winner, metric, k);
        for algorithm in [
            RecommendationSource::Collaborative,
            RecommendationSource::Hybrid,
        ] {
            let value = self.metric_value(algorithm, metric, k);
            if value > best {
                winner = algorithm;
                best = value;
            }
        }
        winner
    }

    pub fn comparison(&self) -> Vec<MetricComparisonView> {
        let mut rows = Vec::new();
        for metric in Metric::ordered() {
            for k in self.k_values() {
                let winner = self.best_algorithm(metric, k);
                rows.push(MetricComparisonView {
                    metric,
                    metric_label: metric.label(),
                    k,
                    content: self.metric_value(RecommendationSource::Content, metric, k),
                    collaborative: self
                        .metric_value(RecommendationSource::Collaborative, metric, k),
                    hybrid: self.metric_value(RecommendationSource::Hybrid, metric, k),
                    winner,
                    winner_label: winner.label(),
                });
            }
        }
        rows
    }

    pub fn summary(&self) -> EvaluationReportView {
        let algorithms = RecommendationSource::ordered()
            .into_iter()
            .map(|algorithm| self.algorithm_view(algorithm))
            .collect();
        let comparison = self.comparison();
        let highlights = self.highlights();
        EvaluationReportView {
            generated_at: self.generated_at,
            algorithms,
            comparison,
            highlights,
        }
    }

    /// One line per metric at the smallest configured cutoff, naming the
    /// winning algorithm.
    fn highlights(&self) -> Vec<String> {
        let Some(k) = self.k_values().into_iter().min() else {
            return Vec::new();
        };
        Metric::ordered()
            .into_iter()
            .map(|metric| {
                let winner = self.best_algorithm(metric, k);
                format!(
                    "{} performs best for {}@{k}",
                    winner.label(),
                    metric.label()
                )
            })
            .collect()
    }

    fn algorithm_view(&self, algorithm: RecommendationSource) -> AlgorithmMetricsView {
        let table = self.table(algorithm);
        AlgorithmMetricsView {
            algorithm,
            algorithm_label: algorithm.label(),
            precision: stringify_cutoffs(&table.precision),
            recall: stringify_cutoffs(&table.recall),
            map: stringify_cutoffs(&table.map),
            ndcg: stringify_cutoffs(&table.ndcg),
        }
    }

    fn metric_value(&self, algorithm: RecommendationSource, metric: Metric, k: usize) -> f64 {
        let table = self.table(algorithm);
        let by_k = match metric {
            Metric::Precision => &table.precision,
            Metric::Recall => &table.recall,
            Metric::Map => &table.map,
            Metric::Ndcg => &table.ndcg,
        };
        by_k.get(&k).copied().unwrap_or(0.0)
    }
}

pub(crate) fn stringify_cutoffs(by_k: &BTreeMap<usize, f64>) -> BTreeMap<String, f64> {
    by_k.iter().map(|(k, value)| (k.to_string(), *value)).collect()
}

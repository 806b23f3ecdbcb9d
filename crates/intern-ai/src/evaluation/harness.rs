use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

use super::config::EvaluationConfig;
use super::metrics;
use super::report::EvaluationReport;
use crate::dataset::{build_catalog, ground_truth, RecommendationStore};
use crate::recommend::domain::{
    ApplicationIndex, InternshipId, RecommendationSource, ScoredRecommendation, StudentId,
};
use crate::recommend::{
    recommend_collaborative, recommend_collaborative_with_holdout, recommend_content,
    recommend_hybrid, RecommenderConfig,
};
use crate::skills::SkillSet;

/// Per-student ground truth: applied items in application order.
pub type GroundTruth = BTreeMap<StudentId, Vec<InternshipId>>;

/// One algorithm's aggregated table: metric → K → mean value across the
/// evaluated students.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlgorithmMetrics {
    pub precision: BTreeMap<usize, f64>,
    pub recall: BTreeMap<usize, f64>,
    pub ndcg: BTreeMap<usize, f64>,
    pub map: BTreeMap<usize, f64>,
}

/// Offline evaluation over a read-only store: replays every student's
/// recommendations against their historical applications and aggregates
/// ranking metrics per algorithm.
///
/// Students are independent computations over immutable snapshots, so the
/// per-user loop can be partitioned across threads without locking; the
/// single-threaded walk here is fast enough for the pool sizes in play.
pub struct EvaluationHarness {
    recommender: RecommenderConfig,
    config: EvaluationConfig,
}

impl EvaluationHarness {
    pub fn new(recommender: RecommenderConfig, config: EvaluationConfig) -> Self {
        Self { recommender, config }
    }

    pub fn with_defaults() -> Self {
        Self::new(RecommenderConfig::default(), EvaluationConfig::default())
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluate all three algorithms over every student with application
    /// history and assemble the comparison report.
    pub fn evaluate<S: RecommendationStore>(&self, store: &S) -> EvaluationReport {
        let truth = ground_truth(store.applications());
        debug!(students = truth.len(), "starting offline evaluation");
        self.evaluate_population(store, &truth)
    }

    /// Evaluate a pre-selected population (used by the A/B split).
    pub(crate) fn evaluate_population<S: RecommendationStore>(
        &self,
        store: &S,
        truth: &GroundTruth,
    ) -> EvaluationReport {
        let content = self.evaluate_algorithm(RecommendationSource::Content, store, truth);
        let collaborative =
            self.evaluate_algorithm(RecommendationSource::Collaborative, store, truth);
        let hybrid = self.evaluate_algorithm(RecommendationSource::Hybrid, store, truth);
        EvaluationReport::new(content, collaborative, hybrid)
    }

    pub(crate) fn evaluate_algorithm<S: RecommendationStore>(
        &self,
        source: RecommendationSource,
        store: &S,
        truth: &GroundTruth,
    ) -> AlgorithmMetrics {
        match source {
            RecommendationSource::Content => self.evaluate_content(store, truth),
            RecommendationSource::Collaborative => self.evaluate_collaborative(store, truth),
            RecommendationSource::Hybrid => self.evaluate_hybrid(store, truth),
        }
    }

    fn evaluate_content<S: RecommendationStore>(
        &self,
        store: &S,
        truth: &GroundTruth,
    ) -> AlgorithmMetrics {
        let empty = SkillSet::default();
        let mut accumulator = MetricAccumulator::new(&self.config.k_values);

        for (student, applied) in truth {
            let skills = store.student_skills(*student).unwrap_or(&empty);
            let recommendations =
                recommend_content(skills, store.internships(), &self.recommender);
            accumulator.record(&ranked_ids(&recommendations), &as_set(applied));
        }
        accumulator.finish()
    }

    /// Collaborative filtering is scored with a seeded train/test split: a
    /// slice of each student's history is hidden, peers are found from the
    /// remainder, and the held-out slice becomes the ground truth to
    /// predict. Students with fewer than two applications cannot be split
    /// and are skipped.
    fn evaluate_collaborative<S: RecommendationStore>(
        &self,
        store: &S,
        truth: &GroundTruth,
    ) -> AlgorithmMetrics {
        let catalog = build_catalog(store.internships());
        let index = ApplicationIndex::from_records(store.applications());
        let mut rng = StdRng::seed_from_u64(self.config.split_seed);
        let mut accumulator = MetricAccumulator::new(&self.config.k_values);

        for (student, applied) in truth {
            if applied.len() < 2 {
                continue;
            }
            let mut shuffled = applied.clone();
            shuffled.shuffle(&mut rng);
            // At least one item is always held out; a ratio at or above 1.0
            // holds out the whole history rather than slicing past the end.
            let test_size = ((shuffled.len() as f64 * self.config.test_split_ratio) as usize)
                .clamp(1, shuffled.len());
            let held_out: BTreeSet<InternshipId> =
                shuffled[..test_size].iter().copied().collect();

            let recommendations = recommend_collaborative_with_holdout(
                *student,
                &index,
                &held_out,
                &catalog,
                &self.recommender,
                self.config.candidate_limit,
            );
            accumulator.record(&ranked_ids(&recommendations), &held_out);
        }
        accumulator.finish()
    }

    fn evaluate_hybrid<S: RecommendationStore>(
        &self,
        store: &S,
        truth: &GroundTruth,
    ) -> AlgorithmMetrics {
        let catalog = build_catalog(store.internships());
        let index = ApplicationIndex::from_records(store.applications());
        let empty = SkillSet::default();
        let mut accumulator = MetricAccumulator::new(&self.config.k_values);

        for (student, applied) in truth {
            let skills = store.student_skills(*student).unwrap_or(&empty);
            let content = recommend_content(skills, store.internships(), &self.recommender);
            let collaborative =
                recommend_collaborative(*student, &index, &catalog, &self.recommender);
            let merged = recommend_hybrid(content, collaborative);
            accumulator.record(&ranked_ids(&merged), &as_set(applied));
        }
        accumulator.finish()
    }
}

fn ranked_ids(recommendations: &[ScoredRecommendation]) -> Vec<InternshipId> {
    recommendations
        .iter()
        .map(|recommendation| recommendation.internship.id)
        .collect()
}

fn as_set(applied: &[InternshipId]) -> BTreeSet<InternshipId> {
    applied.iter().copied().collect()
}

/// Collects per-student metric samples per K and reduces them to means.
struct MetricAccumulator {
    k_values: Vec<usize>,
    precision: BTreeMap<usize, Vec<f64>>,
    recall: BTreeMap<usize, Vec<f64>>,
    ndcg: BTreeMap<usize, Vec<f64>>,
    average_precision: BTreeMap<usize, Vec<f64>>,
}

impl MetricAccumulator {
    fn new(k_values: &[usize]) -> Self {
        // Pre-seed every cutoff so the finished tables carry a value even
        // when no student qualifies for scoring.
        let seeded = || k_values.iter().map(|k| (*k, Vec::new())).collect();
        Self {
            k_values: k_values.to_vec(),
            precision: seeded(),
            recall: seeded(),
            ndcg: seeded(),
            average_precision: seeded(),
        }
    }

    fn record(&mut self, ranked: &[InternshipId], relevant: &BTreeSet<InternshipId>) {
        for &k in &self.k_values {
            self.precision
                .entry(k)
                .or_default()
                .push(metrics::precision_at_k(ranked, relevant, k));
            self.recall
                .entry(k)
                .or_default()
                .push(metrics::recall_at_k(ranked, relevant, k));
            self.ndcg
                .entry(k)
                .or_default()
                .push(metrics::ndcg_at_k(ranked, relevant, k));
            self.average_precision
                .entry(k)
                .or_default()
                .push(metrics::average_precision(ranked, relevant, k));
        }
    }

    fn finish(self) -> AlgorithmMetrics {
        let reduce = |table: BTreeMap<usize, Vec<f64>>| {
            table
                .into_iter()
                .map(|(k, samples)| (k, metrics::mean(&samples)))
                .collect()
        };
        AlgorithmMetrics {
            precision: reduce(self.precision),
            recall: reduce(self.recall),
            ndcg: reduce(self.ndcg),
            map: reduce(self.average_precision),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::dataset::InMemoryStore;
    use crate::recommend::domain::{ApplicationRecord, Internship, StudentProfile};

    fn store() -> InMemoryStore {
        let students = vec![
            StudentProfile {
                id: StudentId(1),
                name: "Ada".to_string(),
                skills: SkillSet::parse("python,sql"),
            },
            StudentProfile {
                id: StudentId(2),
                name: "Lin".to_string(),
                skills: SkillSet::parse("python,sql"),
            },
        ];
        let internships = vec![
            posting(10, "python,sql"),
            posting(20, "python"),
            posting(30, "java"),
        ];
        let applications = vec![
            application(1, 10),
            application(1, 20),
            application(2, 10),
            application(2, 20),
            application(2, 30),
        ];
        InMemoryStore::new(students, internships, applications).expect("fixture loads")
    }

    fn posting(id: u64, skills: &str) -> Internship {
        Internship {
            id: InternshipId(id),
            title: format!("posting-{id}"),
            company: "Aurora Labs".to_string(),
            description: String::new(),
            required_skills: SkillSet::parse(skills),
            posted_at: NaiveDate::from_ymd_opt(2026, 1, 10).expect("valid date"),
        }
    }

    fn application(student: u64, internship: u64) -> ApplicationRecord {
        ApplicationRecord {
            student_id: StudentId(student),
            internship_id: InternshipId(internship),
            applied_on: NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date"),
        }
    }

    #[test]
    fn content_metrics_reflect_skill_alignment() {
        let harness = EvaluationHarness::with_defaults();
        let truth = ground_truth(store().applications());
        let table = harness.evaluate_algorithm(RecommendationSource::Content, &store(), &truth);

        // Both students' content lists start with their applied-to postings,
        // so precision@5 is positive and recall@5 captures most of the truth.
        assert!(table.precision[&5] > 0.0);
        assert!(table.recall[&5] > 0.5);
        assert!(table.ndcg[&5] > 0.0);
        assert!(table.map[&5] > 0.0);
    }

    #[test]
    fn collaborative_split_skips_single_application_students() {
        let students = vec![
            StudentProfile {
                id: StudentId(1),
                name: "Solo".to_string(),
                skills: SkillSet::default(),
            },
        ];
        let internships = vec![posting(10, "")];
        let store = InMemoryStore::new(students, internships, vec![application(1, 10)])
            .expect("fixture loads");

        let harness = EvaluationHarness::with_defaults();
        let truth = ground_truth(store.applications());
        let table =
            harness.evaluate_algorithm(RecommendationSource::Collaborative, &store, &truth);

        // No student qualifies for a split, so every mean is the empty-mean 0.
        assert_eq!(table.precision[&5], 0.0);
        assert_eq!(table.map[&5], 0.0);
    }

    #[test]
    fn oversized_split_ratio_holds_out_the_entire_history() {
        let harness = EvaluationHarness::new(
            RecommenderConfig::default(),
            EvaluationConfig {
                test_split_ratio: 1.5,
                ..EvaluationConfig::default()
            },
        );
        let store = store();
        let truth = ground_truth(store.applications());

        // With everything held out no training history remains, so every
        // student scores zero instead of the slice going out of bounds.
        let table =
            harness.evaluate_algorithm(RecommendationSource::Collaborative, &store, &truth);
        assert_eq!(table.precision[&5], 0.0);
        assert_eq!(table.recall[&5], 0.0);
    }

    #[test]
    fn evaluation_is_deterministic_for_a_fixed_seed() {
        let harness = EvaluationHarness::with_defaults();
        let store = store();
        let truth = ground_truth(store.applications());

        let first =
            harness.evaluate_algorithm(RecommendationSource::Collaborative, &store, &truth);
        let second =
            harness.evaluate_algorithm(RecommendationSource::Collaborative, &store, &truth);
        assert_eq!(first, second);
    }

    #[test]
    fn tables_carry_every_configured_k() {
        let harness = EvaluationHarness::new(
            RecommenderConfig::default(),
            EvaluationConfig {
                k_values: vec![1, 3],
                ..EvaluationConfig::default()
            },
        );
        let store = store();
        let truth = ground_truth(store.applications());
        let table = harness.evaluate_algorithm(RecommendationSource::Hybrid, &store, &truth);

        assert_eq!(table.precision.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(table.map.len(), 2);
    }
}

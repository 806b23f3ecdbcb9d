use chrono::NaiveDate;
use intern_ai::dataset::InMemoryStore;
use intern_ai::evaluation::{diagnose, AbTestPlan, EvaluationConfig, EvaluationHarness};
use intern_ai::recommend::{
    ApplicationRecord, Internship, InternshipId, RecommenderConfig, StudentId, StudentProfile,
};
use intern_ai::skills::SkillSet;

fn fixture() -> InMemoryStore {
    let students = vec![
        profile(1, "python,sql"),
        profile(2, "python,sql"),
        profile(3, "go,kubernetes"),
        profile(4, ""),
    ];
    let internships = vec![
        posting(10, "python,sql"),
        posting(20, "python"),
        posting(30, "go,terraform"),
        posting(40, "java,spring"),
    ];
    let applications = vec![
        application(1, 10),
        application(1, 20),
        application(2, 10),
        application(2, 20),
        application(2, 30),
        application(3, 30),
        application(3, 40),
    ];
    InMemoryStore::new(students, internships, applications).expect("dataset loads")
}

fn profile(id: u64, skills: &str) -> StudentProfile {
    StudentProfile {
        id: StudentId(id),
        name: format!("student-{id}"),
        skills: SkillSet::parse(skills),
    }
}

fn posting(id: u64, skills: &str) -> Internship {
    Internship {
        id: InternshipId(id),
        title: format!("posting-{id}"),
        company: "Aurora Labs".to_string(),
        description: String::new(),
        required_skills: SkillSet::parse(skills),
        posted_at: NaiveDate::from_ymd_opt(2026, 4, 1).expect("valid date"),
    }
}

fn application(student: u64, internship: u64) -> ApplicationRecord {
    ApplicationRecord {
        student_id: StudentId(student),
        internship_id: InternshipId(internship),
        applied_on: NaiveDate::from_ymd_opt(2026, 4, 20).expect("valid date"),
    }
}

#[test]
fn report_serializes_with_the_stable_wire_shape() {
    let harness = EvaluationHarness::with_defaults();
    let report = harness.evaluate(&fixture());
    let json = serde_json::to_value(report.summary()).expect("report serializes");

    let algorithms = json["algorithms"].as_array().expect("algorithm entries");
    assert_eq!(algorithms.len(), 3);
    let labels: Vec<&str> = algorithms
        .iter()
        .map(|entry| entry["algorithm_label"].as_str().expect("label"))
        .collect();
    assert_eq!(labels, vec!["content", "collaborative", "hybrid"]);

    for entry in algorithms {
        for metric in ["precision", "recall", "map", "ndcg"] {
            for k in ["5", "10", "20"] {
                assert!(
                    entry[metric][k].is_number(),
                    "missing {metric}@{k} for {}",
                    entry["algorithm_label"]
                );
            }
        }
    }
}

#[test]
fn comparison_rows_cover_every_metric_and_cutoff() {
    let harness = EvaluationHarness::with_defaults();
    let report = harness.evaluate(&fixture());
    let view = report.summary();

    assert_eq!(view.comparison.len(), 4 * 3);
    for row in &view.comparison {
        let winning_value = match row.winner_label {
            "content" => row.content,
            "collaborative" => row.collaborative,
            _ => row.hybrid,
        };
        assert!(winning_value >= row.content);
        assert!(winning_value >= row.collaborative);
        assert!(winning_value >= row.hybrid);
    }
    assert_eq!(view.highlights.len(), 4);
}

#[test]
fn repeated_runs_produce_identical_metric_tables() {
    let harness = EvaluationHarness::with_defaults();
    let first = harness.evaluate(&fixture());
    let second = harness.evaluate(&fixture());
    assert_eq!(first.content, second.content);
    assert_eq!(first.collaborative, second.collaborative);
    assert_eq!(first.hybrid, second.hybrid);
}

#[test]
fn custom_cutoffs_flow_through_to_the_report() {
    let harness = EvaluationHarness::new(
        RecommenderConfig::default(),
        EvaluationConfig {
            k_values: vec![1, 3],
            ..EvaluationConfig::default()
        },
    );
    let report = harness.evaluate(&fixture());
    assert_eq!(report.k_values(), vec![1, 3]);
    assert_eq!(report.summary().comparison.len(), 4 * 2);
}

#[test]
fn diagnostics_flag_the_cold_start_student() {
    let diagnostics = diagnose(&fixture());
    assert_eq!(diagnostics.interactions.total_students, 4);
    assert_eq!(diagnostics.interactions.students_with_applications, 3);
    assert_eq!(diagnostics.interactions.cold_start_students, 1);
    assert!(diagnostics.content.covered);
    assert!(diagnostics.hybrid_ready);
}

#[test]
fn ab_test_partitions_students_with_history() {
    let harness = EvaluationHarness::with_defaults();
    let outcome = harness.run_ab_test(&fixture(), &AbTestPlan::default());
    // Student 4 never applied, so only three students enter the split.
    assert_eq!(outcome.group_a.students + outcome.group_b.students, 3);
    assert_eq!(outcome.group_a.algorithm_label, "content");
    assert_eq!(outcome.group_b.algorithm_label, "hybrid");
}

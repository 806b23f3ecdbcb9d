use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use intern_ai::dataset::{build_catalog, InMemoryStore, RecommendationStore};
use intern_ai::evaluation::{
    diagnose, AbTestPlan, CohortOutcome, EvaluationConfig, EvaluationHarness,
};
use intern_ai::recommend::{
    recommend_collaborative, recommend_content, recommend_for_student, ApplicationIndex,
    ApplicationRecord, Internship, InternshipId, RecommendationSource, RecommenderConfig,
    ScoredRecommendation, StudentId, StudentProfile,
};
use intern_ai::skills::SkillSet;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::loader::load_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AlgorithmArg {
    Content,
    Collaborative,
    Hybrid,
}

impl From<AlgorithmArg> for RecommendationSource {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Content => RecommendationSource::Content,
            AlgorithmArg::Collaborative => RecommendationSource::Collaborative,
            AlgorithmArg::Hybrid => RecommendationSource::Hybrid,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Student id to recommend for
    #[arg(long)]
    pub(crate) student: u64,
    /// Directory holding the CSV tables (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Restrict to one strategy instead of the hybrid blend
    #[arg(long, value_enum)]
    pub(crate) algorithm: Option<AlgorithmArg>,
    /// Print the recommendations as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Directory holding the CSV tables (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Cutoffs to evaluate
    #[arg(long, num_args = 1.., default_values_t = vec![5, 10, 20])]
    pub(crate) k: Vec<usize>,
    /// Write the JSON report to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AbTestArgs {
    /// Directory holding the CSV tables (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Algorithm assigned to group A
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Content)]
    pub(crate) group_a: AlgorithmArg,
    /// Algorithm assigned to group B
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Hybrid)]
    pub(crate) group_b: AlgorithmArg,
    /// Share of students assigned to group A
    #[arg(long, default_value_t = 0.5)]
    pub(crate) split_ratio: f64,
    /// Seed for the cohort shuffle
    #[arg(long, default_value_t = 42)]
    pub(crate) seed: u64,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Directory holding the CSV tables (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Student id from the bundled sample dataset to recommend for
    #[arg(long, default_value_t = DemoArgs::DEFAULT_STUDENT)]
    pub(crate) student: u64,
}

impl DemoArgs {
    /// Ada, the sample student with both skills and history; the flag
    /// default and the bare-command fallback must agree on her.
    const DEFAULT_STUDENT: u64 = 1;
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            student: Self::DEFAULT_STUDENT,
        }
    }
}

pub(crate) fn run_recommend(config: &AppConfig, args: RecommendArgs) -> Result<(), AppError> {
    let store = load(config, args.data_dir)?;
    let recommendations = recommend_with(
        &store,
        StudentId(args.student),
        args.algorithm.map(RecommendationSource::from),
    );
    info!(
        student = args.student,
        count = recommendations.len(),
        "computed recommendations"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    if recommendations.is_empty() {
        println!("No recommendations for student {}.", args.student);
        return Ok(());
    }
    println!("Recommendations for student {}:", args.student);
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "  {}. [{:.3}] {} at {} ({})",
            rank + 1,
            rec.score,
            rec.internship.title,
            rec.internship.company,
            rec.source.label()
        );
    }
    Ok(())
}

pub(crate) fn run_evaluate(config: &AppConfig, args: EvaluateArgs) -> Result<(), AppError> {
    let store = load(config, args.data_dir)?;
    let harness = EvaluationHarness::new(
        RecommenderConfig::default(),
        EvaluationConfig {
            k_values: args.k,
            ..EvaluationConfig::default()
        },
    );
    let report = harness.evaluate(&store);
    let view = report.summary();

    for line in &view.highlights {
        println!("{line}");
    }

    let json = serde_json::to_string_pretty(&view)?;
    match args.output {
        Some(path) => {
            fs::write(&path, json)?;
            println!("Report written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub(crate) fn run_ab_test(config: &AppConfig, args: AbTestArgs) -> Result<(), AppError> {
    let store = load(config, args.data_dir)?;
    let plan = AbTestPlan {
        group_a: args.group_a.into(),
        group_b: args.group_b.into(),
        split_ratio: args.split_ratio,
        seed: args.seed,
    };
    let outcome = EvaluationHarness::with_defaults().run_ab_test(&store, &plan);

    print_cohort("A", &outcome.group_a);
    print_cohort("B", &outcome.group_b);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn print_cohort(name: &str, cohort: &CohortOutcome) {
    println!(
        "Group {name} ({}): {} students",
        cohort.algorithm_label, cohort.students
    );
}

pub(crate) fn run_validate(config: &AppConfig, args: ValidateArgs) -> Result<(), AppError> {
    let store = load(config, args.data_dir)?;
    let diagnostics = diagnose(&store);
    println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    if !diagnostics.hybrid_ready {
        println!("Warning: dataset cannot support hybrid recommendations yet.");
    }
    Ok(())
}

/// End-to-end walkthrough over a bundled sample dataset: per-student
/// recommendations, dataset diagnostics, and the offline comparison report.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = sample_store()?;

    println!("Internship recommendation demo");
    println!(
        "Dataset: {} students, {} internships, {} applications\n",
        store.students().len(),
        store.internships().len(),
        store.applications().len()
    );

    let recommendations = recommend_for_student(
        &store,
        StudentId(args.student),
        &RecommenderConfig::default(),
    );
    println!("Recommendations for student {}:", args.student);
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "  {}. [{:.3}] {} at {} ({})",
            rank + 1,
            rec.score,
            rec.internship.title,
            rec.internship.company,
            rec.source.label()
        );
    }

    let diagnostics = diagnose(&store);
    println!(
        "\nInteraction matrix: {:.1}% sparse, {} cold-start students",
        diagnostics.interactions.sparsity * 100.0,
        diagnostics.interactions.cold_start_students
    );

    let report = EvaluationHarness::with_defaults().evaluate(&store);
    println!("\nOffline evaluation:");
    for line in report.summary().highlights {
        println!("  {line}");
    }
    Ok(())
}

fn load(config: &AppConfig, data_dir: Option<PathBuf>) -> Result<InMemoryStore, AppError> {
    let dir = data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    load_store(&dir)
}

fn recommend_with(
    store: &InMemoryStore,
    student: StudentId,
    algorithm: Option<RecommendationSource>,
) -> Vec<ScoredRecommendation> {
    let config = RecommenderConfig::default();
    match algorithm {
        None | Some(RecommendationSource::Hybrid) => {
            recommend_for_student(store, student, &config)
        }
        Some(RecommendationSource::Content) => {
            let empty = SkillSet::default();
            let skills = store.student_skills(student).unwrap_or(&empty);
            recommend_content(skills, store.internships(), &config)
        }
        Some(RecommendationSource::Collaborative) => {
            let index = ApplicationIndex::from_records(store.applications());
            let catalog = build_catalog(store.internships());
            recommend_collaborative(student, &index, &catalog, &config)
        }
    }
}

fn sample_store() -> Result<InMemoryStore, AppError> {
    let students = vec![
        sample_student(1, "Ada", "python,sql,react"),
        sample_student(2, "Lin", "python,sql"),
        sample_student(3, "Noor", "go,kubernetes,terraform"),
        sample_student(4, "Sam", "javascript,react,html,css"),
        sample_student(5, "Kai", ""),
    ];
    let internships = vec![
        sample_posting(10, "Backend Engineering Intern", "Aurora Labs", "python,sql"),
        sample_posting(20, "Frontend Intern", "Brightside", "javascript,react"),
        sample_posting(30, "Platform Intern", "Cloudline", "go,terraform"),
        sample_posting(40, "Data Analytics Intern", "Datum", "python,sql,tableau"),
        sample_posting(50, "Fullstack Intern", "Everset", "python,react"),
        sample_posting(60, "QA Intern", "Foundry", "selenium,java"),
    ];
    let applications = vec![
        sample_application(1, 10, "2026-05-02"),
        sample_application(1, 40, "2026-05-03"),
        sample_application(2, 10, "2026-05-04"),
        sample_application(2, 40, "2026-05-05"),
        sample_application(2, 50, "2026-05-06"),
        sample_application(3, 30, "2026-05-07"),
        sample_application(4, 20, "2026-05-08"),
        sample_application(4, 50, "2026-05-09"),
    ];
    Ok(InMemoryStore::new(students, internships, applications)?)
}

fn sample_student(id: u64, name: &str, skills: &str) -> StudentProfile {
    StudentProfile {
        id: StudentId(id),
        name: name.to_string(),
        skills: SkillSet::parse(skills),
    }
}

fn sample_posting(id: u64, title: &str, company: &str, skills: &str) -> Internship {
    Internship {
        id: InternshipId(id),
        title: title.to_string(),
        company: company.to_string(),
        description: String::new(),
        required_skills: SkillSet::parse(skills),
        posted_at: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap_or_default(),
    }
}

fn sample_application(student: u64, internship: u64, date: &str) -> ApplicationRecord {
    ApplicationRecord {
        student_id: StudentId(student),
        internship_id: InternshipId(internship),
        applied_on: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default(),
    }
}

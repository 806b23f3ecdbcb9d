//! The three recommendation strategies over typed domain records.
//!
//! Each entry point is a pure function: it receives immutable input
//! snapshots, allocates a fresh result list, and touches no shared state, so
//! calls for different students are independently safe to run in parallel.

pub mod collaborative;
pub mod config;
pub mod content;
pub mod domain;
pub mod hybrid;

#[cfg(test)]
mod tests;

pub use collaborative::{recommend_collaborative, recommend_collaborative_with_holdout};
pub use config::RecommenderConfig;
pub use content::recommend_content;
pub use domain::{
    ApplicationIndex, ApplicationRecord, Internship, InternshipCatalog, InternshipId,
    RecommendationSource, ScoredRecommendation, StudentId, StudentProfile,
};
pub use hybrid::recommend_hybrid;

use crate::dataset::{build_catalog, RecommendationStore};
use crate::skills::SkillSet;

/// Full pipeline for one student: content-based and collaborative
/// recommendations merged through [`recommend_hybrid`].
///
/// This is what the dashboard surface consumes; the returned list needs no
/// further transformation.
pub fn recommend_for_student<S: RecommendationStore>(
    store: &S,
    student: StudentId,
    config: &RecommenderConfig,
) -> Vec<ScoredRecommendation> {
    let empty = SkillSet::default();
    let skills = store.student_skills(student).unwrap_or(&empty);
    let content = recommend_content(skills, store.internships(), config);

    let index = ApplicationIndex::from_records(store.applications());
    let catalog = build_catalog(store.internships());
    let collaborative = recommend_collaborative(student, &index, &catalog, config);

    recommend_hybrid(content, collaborative)
}

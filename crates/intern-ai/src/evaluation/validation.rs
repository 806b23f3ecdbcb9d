//! Dataset diagnostics run before an evaluation to explain weak results:
//! missing skill data starves content-based matching, and a sparse or
//! cold-start-heavy interaction matrix starves collaborative filtering.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::dataset::RecommendationStore;
use crate::recommend::domain::InternshipId;

/// Whether content-based matching has skill data to work with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentCoverage {
    pub students_with_skills: usize,
    pub internships_with_skills: usize,
    pub covered: bool,
}

/// Shape of the user-item interaction matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionStats {
    pub total_students: usize,
    pub students_with_applications: usize,
    pub cold_start_students: usize,
    pub distinct_internships: usize,
    pub applications: usize,
    /// Share of the student × internship grid with no interaction; `1.0`
    /// when the grid is empty.
    pub sparsity: f64,
    pub average_applications_per_student: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetDiagnostics {
    pub content: ContentCoverage,
    pub interactions: InteractionStats,
    /// Hybrid merging needs both signals: skill coverage on the content
    /// side and at least one interacting student on the collaborative side.
    pub hybrid_ready: bool,
}

pub fn diagnose<S: RecommendationStore>(store: &S) -> DatasetDiagnostics {
    let content = content_coverage(store);
    let interactions = interaction_stats(store);
    let hybrid_ready = content.covered && interactions.students_with_applications > 0;
    DatasetDiagnostics {
        content,
        interactions,
        hybrid_ready,
    }
}

fn content_coverage<S: RecommendationStore>(store: &S) -> ContentCoverage {
    let students_with_skills = store
        .students()
        .iter()
        .filter(|student| !student.skills.is_empty())
        .count();
    let internships_with_skills = store
        .internships()
        .iter()
        .filter(|internship| !internship.required_skills.is_empty())
        .count();
    ContentCoverage {
        students_with_skills,
        internships_with_skills,
        covered: students_with_skills > 0 && internships_with_skills > 0,
    }
}

fn interaction_stats<S: RecommendationStore>(store: &S) -> InteractionStats {
    let applications = store.applications();
    let students_with_applications = applications
        .iter()
        .map(|record| record.student_id)
        .collect::<BTreeSet<_>>()
        .len();
    let distinct_internships = applications
        .iter()
        .map(|record| record.internship_id)
        .collect::<BTreeSet<InternshipId>>()
        .len();

    let grid = students_with_applications * distinct_internships;
    let sparsity = if grid == 0 {
        1.0
    } else {
        1.0 - applications.len() as f64 / grid as f64
    };
    let average_applications_per_student = if students_with_applications == 0 {
        0.0
    } else {
        applications.len() as f64 / students_with_applications as f64
    };

    let total_students = store.students().len();
    InteractionStats {
        total_students,
        students_with_applications,
        cold_start_students: total_students.saturating_sub(students_with_applications),
        distinct_internships,
        applications: applications.len(),
        sparsity,
        average_applications_per_student,
    }
}

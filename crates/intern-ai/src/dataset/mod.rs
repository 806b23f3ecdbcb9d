//! Read-only data access for the scoring and evaluation pipelines.
//!
//! Persistence lives elsewhere; whatever loads the tables (CSV, a database
//! adapter, test fixtures) materializes them up front and hands the engine an
//! immutable snapshot through [`RecommendationStore`].

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::recommend::domain::{
    ApplicationRecord, Internship, InternshipCatalog, InternshipId, StudentId, StudentProfile,
};
use crate::skills::SkillSet;

/// Read-only handle over the tables the engine consumes.
///
/// No call performs I/O; implementations hold fully loaded, immutable data.
pub trait RecommendationStore {
    fn students(&self) -> &[StudentProfile];
    fn internships(&self) -> &[Internship];
    fn applications(&self) -> &[ApplicationRecord];

    fn student_skills(&self, id: StudentId) -> Option<&SkillSet> {
        self.students()
            .iter()
            .find(|profile| profile.id == id)
            .map(|profile| &profile.skills)
    }
}

/// Owning in-memory implementation backing the CLI and the test suites.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    students: Vec<StudentProfile>,
    internships: Vec<Internship>,
    applications: Vec<ApplicationRecord>,
}

impl InMemoryStore {
    /// Build a store from loaded tables, rejecting duplicate ids and
    /// applications that reference unknown students or internships.
    pub fn new(
        students: Vec<StudentProfile>,
        internships: Vec<Internship>,
        applications: Vec<ApplicationRecord>,
    ) -> Result<Self, DatasetError> {
        let mut student_ids = BTreeSet::new();
        for profile in &students {
            if !student_ids.insert(profile.id) {
                return Err(DatasetError::DuplicateStudent(profile.id.0));
            }
        }

        let mut internship_ids = BTreeSet::new();
        for internship in &internships {
            if !internship_ids.insert(internship.id) {
                return Err(DatasetError::DuplicateInternship(internship.id.0));
            }
        }

        for record in &applications {
            if !student_ids.contains(&record.student_id) {
                return Err(DatasetError::UnknownStudent(record.student_id.0));
            }
            if !internship_ids.contains(&record.internship_id) {
                return Err(DatasetError::UnknownInternship(record.internship_id.0));
            }
        }

        Ok(Self {
            students,
            internships,
            applications,
        })
    }
}

impl RecommendationStore for InMemoryStore {
    fn students(&self) -> &[StudentProfile] {
        &self.students
    }

    fn internships(&self) -> &[Internship] {
        &self.internships
    }

    fn applications(&self) -> &[ApplicationRecord] {
        &self.applications
    }
}

/// Validation failures while assembling a store snapshot.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("duplicate student id {0}")]
    DuplicateStudent(u64),
    #[error("duplicate internship id {0}")]
    DuplicateInternship(u64),
    #[error("application references unknown student {0}")]
    UnknownStudent(u64),
    #[error("application references unknown internship {0}")]
    UnknownInternship(u64),
}

/// Catalog keyed by internship id for metadata lookups.
pub fn build_catalog(internships: &[Internship]) -> InternshipCatalog {
    internships
        .iter()
        .map(|internship| (internship.id, internship.clone()))
        .collect()
}

/// Relevance ground truth: per-student applied items in application order.
pub fn ground_truth(
    applications: &[ApplicationRecord],
) -> BTreeMap<StudentId, Vec<InternshipId>> {
    let mut truth: BTreeMap<StudentId, Vec<InternshipId>> = BTreeMap::new();
    for record in applications {
        truth
            .entry(record.student_id)
            .or_default()
            .push(record.internship_id);
    }
    truth
}

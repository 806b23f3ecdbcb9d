use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::skills::SkillSet;

/// Identifier wrapper for student accounts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StudentId(pub u64);

/// Identifier wrapper for internship postings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct InternshipId(pub u64);

/// Student profile snapshot consumed by content-based matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: StudentId,
    pub name: String,
    pub skills: SkillSet,
}

/// An internship posting under recommendation.
///
/// The descriptive metadata passes through scoring unmodified; only
/// `required_skills` participates in similarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub id: InternshipId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_skills: SkillSet,
    pub posted_at: NaiveDate,
}

/// Which scoring strategy produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Content,
    Collaborative,
    Hybrid,
}

impl RecommendationSource {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendationSource::Content => "content",
            RecommendationSource::Collaborative => "collaborative",
            RecommendationSource::Hybrid => "hybrid",
        }
    }

    /// Fixed comparison order used when report cells tie.
    pub const fn ordered() -> [RecommendationSource; 3] {
        [
            RecommendationSource::Content,
            RecommendationSource::Collaborative,
            RecommendationSource::Hybrid,
        ]
    }
}

/// An internship plus the similarity score that surfaced it, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecommendation {
    pub internship: Internship,
    pub score: f64,
    pub source: RecommendationSource,
}

/// Observed application event. Created when a student applies and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub student_id: StudentId,
    pub internship_id: InternshipId,
    pub applied_on: NaiveDate,
}

/// Catalog keyed by internship id for metadata lookups during collaborative
/// scoring.
pub type InternshipCatalog = BTreeMap<InternshipId, Internship>;

/// Per-student application sets aggregated from the interaction history.
///
/// Doubles as the user-item matrix for collaborative filtering and as the
/// relevance ground truth during evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationIndex {
    by_student: BTreeMap<StudentId, BTreeSet<InternshipId>>,
}

impl ApplicationIndex {
    pub fn from_records(records: &[ApplicationRecord]) -> Self {
        let mut by_student: BTreeMap<StudentId, BTreeSet<InternshipId>> = BTreeMap::new();
        for record in records {
            by_student
                .entry(record.student_id)
                .or_default()
                .insert(record.internship_id);
        }
        Self { by_student }
    }

    /// The items a student applied to, if any application exists.
    pub fn applied(&self, student: StudentId) -> Option<&BTreeSet<InternshipId>> {
        self.by_student.get(&student)
    }

    /// Iterate students in ascending id order with their application sets.
    pub fn iter(&self) -> impl Iterator<Item = (StudentId, &BTreeSet<InternshipId>)> {
        self.by_student.iter().map(|(id, items)| (*id, items))
    }

    pub fn len(&self) -> usize {
        self.by_student.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_student.is_empty()
    }
}

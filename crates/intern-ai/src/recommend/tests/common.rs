use chrono::NaiveDate;

use crate::recommend::domain::{
    ApplicationIndex, ApplicationRecord, Internship, InternshipCatalog, InternshipId, StudentId,
};
use crate::recommend::RecommenderConfig;
use crate::skills::SkillSet;

pub(super) fn internship(id: u64, title: &str, required_skills: &str) -> Internship {
    Internship {
        id: InternshipId(id),
        title: title.to_string(),
        company: "Aurora Labs".to_string(),
        description: String::new(),
        required_skills: SkillSet::parse(required_skills),
        posted_at: NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date"),
    }
}

pub(super) fn catalog(internships: &[Internship]) -> InternshipCatalog {
    internships
        .iter()
        .map(|posting| (posting.id, posting.clone()))
        .collect()
}

/// Build an application index from `(student, applied items)` pairs.
pub(super) fn index(entries: &[(u64, &[u64])]) -> ApplicationIndex {
    let records: Vec<ApplicationRecord> = entries
        .iter()
        .flat_map(|(student, items)| {
            items.iter().map(|item| ApplicationRecord {
                student_id: StudentId(*student),
                internship_id: InternshipId(*item),
                applied_on: NaiveDate::from_ymd_opt(2026, 2, 10).expect("valid date"),
            })
        })
        .collect();
    ApplicationIndex::from_records(&records)
}

pub(super) fn config() -> RecommenderConfig {
    RecommenderConfig::default()
}

pub(super) fn ids(recommendations: &[crate::recommend::ScoredRecommendation]) -> Vec<u64> {
    recommendations
        .iter()
        .map(|rec| rec.internship.id.0)
        .collect()
}

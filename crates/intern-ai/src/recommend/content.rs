use std::cmp::Ordering;

use super::config::RecommenderConfig;
use super::domain::{Internship, RecommendationSource, ScoredRecommendation};
use crate::skills::SkillSet;

/// Rank internships by skill overlap with the student profile.
///
/// Every posting is scored with the Jaccard index against its required
/// skills; only scores strictly above `score_threshold` survive. The list is
/// sorted descending with a stable sort, so equal scores keep their input
/// order, then truncated to `top_n`.
///
/// An empty skill set always produces an empty list: with a zero union the
/// similarity is defined as `0.0`, which never clears the threshold. That is
/// the intended cold-profile behavior, not an error.
pub fn recommend_content(
    student_skills: &SkillSet,
    internships: &[Internship],
    config: &RecommenderConfig,
) -> Vec<ScoredRecommendation> {
    let mut recommendations: Vec<ScoredRecommendation> = internships
        .iter()
        .filter_map(|internship| {
            let score = student_skills.similarity(&internship.required_skills);
            (score > config.score_threshold).then(|| ScoredRecommendation {
                internship: internship.clone(),
                score,
                source: RecommendationSource::Content,
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    recommendations.truncate(config.top_n);
    recommendations
}

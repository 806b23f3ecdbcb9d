use std::collections::HashMap;

use super::domain::{InternshipId, ScoredRecommendation};

/// Merge content and collaborative lists into one deduplicated ranking.
///
/// Content entries seed the result in their given order. Collaborative
/// entries append when their id is new and replace an existing entry only
/// when their score is strictly higher; a replacement keeps the slot it
/// overwrites. On equal scores the content entry wins, because it was
/// inserted first and the override condition is strict.
///
/// No re-sorting, re-thresholding, or re-capping happens here — the merged
/// list inherits whatever relative order the sources produced, and consumers
/// depend on exactly that order. Each surviving entry also keeps the
/// provenance of the list it won from.
pub fn recommend_hybrid(
    content: Vec<ScoredRecommendation>,
    collaborative: Vec<ScoredRecommendation>,
) -> Vec<ScoredRecommendation> {
    let mut merged: Vec<ScoredRecommendation> =
        Vec::with_capacity(content.len() + collaborative.len());
    let mut positions: HashMap<InternshipId, usize> = HashMap::new();

    for recommendation in content {
        positions.insert(recommendation.internship.id, merged.len());
        merged.push(recommendation);
    }

    for recommendation in collaborative {
        match positions.get(&recommendation.internship.id) {
            Some(&slot) if recommendation.score > merged[slot].score => {
                merged[slot] = recommendation;
            }
            Some(_) => {}
            None => {
                positions.insert(recommendation.internship.id, merged.len());
                merged.push(recommendation);
            }
        }
    }

    merged
}

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use super::config::RecommenderConfig;
use super::domain::{
    ApplicationIndex, InternshipCatalog, InternshipId, RecommendationSource,
    ScoredRecommendation, StudentId,
};
use crate::skills::jaccard;

/// Rank internships by what similar students applied to.
///
/// Peers are every other student with application history, scored by the
/// Jaccard overlap of application sets; only positive overlaps count. The
/// `top_k_peers` most similar peers contribute their items (minus anything
/// the student already applied to), each item carrying the best similarity
/// among the peers that surfaced it. The pool is sorted descending (stable)
/// and truncated to `top_n`.
///
/// Cold-start students — no applications, or no overlapping peer — receive
/// an empty list. That is the documented limitation of this strategy, not an
/// error condition.
pub fn recommend_collaborative(
    student: StudentId,
    index: &ApplicationIndex,
    catalog: &InternshipCatalog,
    config: &RecommenderConfig,
) -> Vec<ScoredRecommendation> {
    recommend_from_peers(student, index, &BTreeSet::new(), catalog, config, config.top_n)
}

/// Evaluation variant: `held_out` items are hidden from the student's own
/// history (so peers can be found from the remaining interactions and the
/// held-out items stay recommendable), and the candidate list is cut at
/// `limit` instead of `top_n` so ranking metrics have depth to work with.
pub fn recommend_collaborative_with_holdout(
    student: StudentId,
    index: &ApplicationIndex,
    held_out: &BTreeSet<InternshipId>,
    catalog: &InternshipCatalog,
    config: &RecommenderConfig,
    limit: usize,
) -> Vec<ScoredRecommendation> {
    recommend_from_peers(student, index, held_out, catalog, config, limit)
}

fn recommend_from_peers(
    student: StudentId,
    index: &ApplicationIndex,
    held_out: &BTreeSet<InternshipId>,
    catalog: &InternshipCatalog,
    config: &RecommenderConfig,
    limit: usize,
) -> Vec<ScoredRecommendation> {
    let own: BTreeSet<InternshipId> = index
        .applied(student)
        .map(|items| items.difference(held_out).copied().collect())
        .unwrap_or_default();
    if own.is_empty() {
        return Vec::new();
    }

    // Ascending-id iteration plus a stable sort keeps peer ties deterministic.
    let mut peers: Vec<(StudentId, f64)> = index
        .iter()
        .filter(|(other, _)| *other != student)
        .filter_map(|(other, applications)| {
            let similarity = jaccard(&own, applications);
            (similarity > 0.0).then_some((other, similarity))
        })
        .collect();
    peers.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    peers.truncate(config.top_k_peers);

    // Pool the peers' items; an item reachable from several peers keeps the
    // highest similarity seen.
    let mut pool: Vec<(InternshipId, f64)> = Vec::new();
    let mut positions: HashMap<InternshipId, usize> = HashMap::new();
    for (peer, similarity) in &peers {
        let Some(applications) = index.applied(*peer) else {
            continue;
        };
        for item in applications {
            if own.contains(item) {
                continue;
            }
            match positions.get(item) {
                Some(&slot) => {
                    if *similarity > pool[slot].1 {
                        pool[slot].1 = *similarity;
                    }
                }
                None => {
                    positions.insert(*item, pool.len());
                    pool.push((*item, *similarity));
                }
            }
        }
    }

    pool.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    pool.into_iter()
        .filter_map(|(id, score)| {
            catalog.get(&id).map(|internship| ScoredRecommendation {
                internship: internship.clone(),
                score,
                source: RecommendationSource::Collaborative,
            })
        })
        .take(limit)
        .collect()
}

use super::common::{ids, internship};
use crate::recommend::domain::{RecommendationSource, ScoredRecommendation};
use crate::recommend::recommend_hybrid;

fn content_rec(id: u64, score: f64) -> ScoredRecommendation {
    ScoredRecommendation {
        internship: internship(id, "Posting", "python"),
        score,
        source: RecommendationSource::Content,
    }
}

fn collaborative_rec(id: u64, score: f64) -> ScoredRecommendation {
    ScoredRecommendation {
        internship: internship(id, "Posting", "python"),
        score,
        source: RecommendationSource::Collaborative,
    }
}

#[test]
fn disjoint_lists_concatenate_in_order() {
    let merged = recommend_hybrid(
        vec![content_rec(1, 0.9), content_rec(2, 0.5)],
        vec![collaborative_rec(3, 0.7)],
    );
    assert_eq!(ids(&merged), vec![1, 2, 3]);
    assert_eq!(merged[0].source, RecommendationSource::Content);
    assert_eq!(merged[2].source, RecommendationSource::Collaborative);
}

#[test]
fn duplicate_id_keeps_maximum_score() {
    let merged = recommend_hybrid(
        vec![content_rec(1, 0.4)],
        vec![collaborative_rec(1, 0.8)],
    );
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].score, 0.8);
    assert_eq!(merged[0].source, RecommendationSource::Collaborative);
}

#[test]
fn duplicate_id_with_lower_collaborative_score_keeps_content_entry() {
    let merged = recommend_hybrid(
        vec![content_rec(1, 0.8)],
        vec![collaborative_rec(1, 0.3)],
    );
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].score, 0.8);
    assert_eq!(merged[0].source, RecommendationSource::Content);
}

#[test]
fn equal_scores_keep_the_content_entry() {
    let merged = recommend_hybrid(
        vec![content_rec(1, 0.5)],
        vec![collaborative_rec(1, 0.5)],
    );
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source, RecommendationSource::Content);
}

#[test]
fn override_keeps_the_original_slot() {
    let merged = recommend_hybrid(
        vec![content_rec(1, 0.9), content_rec(2, 0.3), content_rec(3, 0.25)],
        vec![collaborative_rec(2, 0.95), collaborative_rec(4, 0.6)],
    );
    // Item 2 is replaced in place; no re-sort happens despite its new score
    // outranking item 1.
    assert_eq!(ids(&merged), vec![1, 2, 3, 4]);
    assert_eq!(merged[1].score, 0.95);
    assert_eq!(merged[1].source, RecommendationSource::Collaborative);
}

#[test]
fn single_source_entries_pass_through_unchanged() {
    let original = collaborative_rec(5, 0.45);
    let merged = recommend_hybrid(Vec::new(), vec![original.clone()]);
    assert_eq!(merged, vec![original]);
}

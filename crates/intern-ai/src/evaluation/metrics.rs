//! Ranking quality metrics over a recommended list and a relevant-item set.
//!
//! All functions are pure, generic over the ordered id type, and total:
//! degenerate inputs (K = 0, empty ground truth) return `0.0` rather than
//! `NaN` or a panic, so downstream means stay well-defined.

use std::collections::BTreeSet;

/// Precision@K: fraction of the top-K ranked items that are relevant.
///
/// `K = 0` is defined as `0.0`.
pub fn precision_at_k<T: Ord>(ranked: &[T], relevant: &BTreeSet<T>, k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let hits = ranked
        .iter()
        .take(k)
        .filter(|item| relevant.contains(item))
        .count();
    hits as f64 / k as f64
}

/// Recall@K: fraction of all relevant items captured in the top-K.
///
/// An empty ground-truth set contributes `0.0` — such a user carries no
/// signal and must never divide by zero.
pub fn recall_at_k<T: Ord>(ranked: &[T], relevant: &BTreeSet<T>, k: usize) -> f64 {
    if relevant.is_empty() || k == 0 {
        return 0.0;
    }
    let hits = ranked
        .iter()
        .take(k)
        .filter(|item| relevant.contains(item))
        .count();
    hits as f64 / relevant.len() as f64
}

/// Average Precision over the top-K positions (1-indexed).
///
/// Each hit at position `i` contributes `hits_so_far / i`; the sum is
/// normalized by `min(|relevant|, K)`, or `0.0` when that denominator is
/// zero.
pub fn average_precision<T: Ord>(ranked: &[T], relevant: &BTreeSet<T>, k: usize) -> f64 {
    let denominator = relevant.len().min(k);
    if denominator == 0 {
        return 0.0;
    }

    let mut hits = 0usize;
    let mut precision_sum = 0.0;
    for (position, item) in ranked.iter().take(k).enumerate() {
        if relevant.contains(item) {
            hits += 1;
            precision_sum += hits as f64 / (position + 1) as f64;
        }
    }
    precision_sum / denominator as f64
}

/// Discounted cumulative gain with binary relevance: each relevant item at
/// 1-indexed position `i` contributes `1 / log2(i + 1)`.
pub fn dcg_at_k<T: Ord>(ranked: &[T], relevant: &BTreeSet<T>, k: usize) -> f64 {
    ranked
        .iter()
        .take(k)
        .enumerate()
        .filter(|(_, item)| relevant.contains(*item))
        .map(|(position, _)| 1.0 / ((position + 2) as f64).log2())
        .sum()
}

/// NDCG@K: DCG normalized by the ideal ordering, which places all
/// `min(|relevant|, K)` relevant items first. `0.0` when the ideal DCG is
/// zero.
pub fn ndcg_at_k<T: Ord>(ranked: &[T], relevant: &BTreeSet<T>, k: usize) -> f64 {
    let ideal_hits = relevant.len().min(k);
    let idcg: f64 = (0..ideal_hits)
        .map(|position| 1.0 / ((position + 2) as f64).log2())
        .sum();
    if idcg == 0.0 {
        return 0.0;
    }
    dcg_at_k(ranked, relevant, k) / idcg
}

/// Arithmetic mean; the empty slice averages to `0.0` so aggregate tables
/// stay total.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

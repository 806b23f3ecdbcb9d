//! Normalized skill sets and the set-similarity function behind every
//! scoring strategy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of lowercase, trimmed skill tokens parsed from a comma-separated
/// attribute.
///
/// Case and surrounding whitespace never distinguish two tokens, and
/// duplicates collapse (set semantics). Absent or blank source text yields
/// the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Parse a comma-separated skills attribute into a normalized set.
    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Jaccard similarity against another skill set. See [`jaccard`].
    pub fn similarity(&self, other: &SkillSet) -> f64 {
        jaccard(&self.0, &other.0)
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Jaccard index `|a ∩ b| / |a ∪ b|`, clamped to `[0, 1]`.
///
/// When both sets are empty the union is zero and the result is defined as
/// `0.0`: an empty profile carries no evidence of a match and must never
/// rank as identical to another empty set. Pure and order-independent.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    (intersection as f64 / union as f64).clamp(0.0, 1.0)
}

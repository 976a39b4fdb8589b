pub mod normalize;
pub mod tiered;

use crate::core::{MatchResult, ProviderRecord};

pub use normalize::normalize;
pub use tiered::TieredRanker;

/// Queries shorter than this (in UTF-16 units) never match anything
pub const MIN_QUERY_LEN: usize = 2;

/// Trait for ranking implementations
pub trait Ranker: Send + Sync {
    /// Rank candidates against query, return matches sorted by score (highest first)
    fn rank<'a>(&self, query: &str, candidates: &'a [ProviderRecord]) -> Vec<MatchResult<'a>>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Matching records for `query`, best first
pub fn search<'a>(query: &str, providers: &'a [ProviderRecord]) -> Vec<&'a ProviderRecord> {
    TieredRanker::new()
        .rank(query, providers)
        .into_iter()
        .map(|m| m.record)
        .collect()
}

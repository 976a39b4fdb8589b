use crate::core::{MatchKind, MatchResult, ProviderRecord};
use crate::ranking::{normalize, Ranker, MIN_QUERY_LEN};

/// Tiered exact/prefix/substring ranker over names and acronyms.
///
/// Acronym hits outrank name hits of the same kind, and an exact acronym
/// beats everything. Ties keep dataset order.
pub struct TieredRanker;

impl TieredRanker {
    pub fn new() -> Self {
        Self
    }

    /// Best tier reached by one record, `None` if no rule fired
    pub fn score_record(normalized_query: &str, record: &ProviderRecord) -> Option<MatchKind> {
        let mut best: Option<MatchKind> = None;
        let mut raise = |kind: MatchKind| {
            if best.map_or(true, |b| kind.score() > b.score()) {
                best = Some(kind);
            }
        };

        if !record.acronyms.is_empty() {
            // Empty pieces stay: a trailing comma is an alias equal to ""
            for alias in record.acronyms.split(',').map(str::trim) {
                let alias = normalize(alias);
                if alias == normalized_query {
                    raise(MatchKind::AcronymExact);
                    break;
                } else if alias.starts_with(normalized_query) {
                    raise(MatchKind::AcronymPrefix);
                } else if alias.contains(normalized_query) {
                    raise(MatchKind::AcronymSubstring);
                }
            }
        }

        let name = normalize(&record.name);
        if name == normalized_query {
            raise(MatchKind::NameExact);
        } else if name.starts_with(normalized_query) {
            raise(MatchKind::NamePrefix);
        } else if name.contains(normalized_query) {
            raise(MatchKind::NameSubstring);
        }

        best
    }
}

impl Default for TieredRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for TieredRanker {
    fn rank<'a>(&self, query: &str, candidates: &'a [ProviderRecord]) -> Vec<MatchResult<'a>> {
        // Length in UTF-16 units, as typed into the search box
        if query.encode_utf16().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let normalized_query = normalize(query);

        let mut ranked: Vec<MatchResult<'a>> = candidates
            .iter()
            .filter_map(|record| {
                Self::score_record(&normalized_query, record)
                    .map(|kind| MatchResult::new(record, kind))
            })
            .collect();

        // Stable: equal scores keep dataset order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        ranked
    }

    fn name(&self) -> &str {
        "tiered"
    }
}

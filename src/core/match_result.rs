use serde::Serialize;
use crate::core::ProviderRecord;

/// Which rule produced a match.
///
/// Variants are ordered from strongest to weakest; the score of a record is
/// the highest tier any of its rules reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    AcronymExact,
    NameExact,
    AcronymPrefix,
    NamePrefix,
    AcronymSubstring,
    NameSubstring,
}

impl MatchKind {
    /// Tier score
    pub const fn score(self) -> u32 {
        match self {
            MatchKind::AcronymExact => 1000,
            MatchKind::NameExact => 800,
            MatchKind::AcronymPrefix => 500,
            MatchKind::NamePrefix => 400,
            MatchKind::AcronymSubstring => 250,
            MatchKind::NameSubstring => 100,
        }
    }
}

/// A matched record with its score, borrowed from the catalog
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchResult<'a> {
    pub record: &'a ProviderRecord,
    pub score: u32,
    pub kind: MatchKind,
}

impl<'a> MatchResult<'a> {
    pub fn new(record: &'a ProviderRecord, kind: MatchKind) -> Self {
        Self {
            record,
            score: kind.score(),
            kind,
        }
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!("{} - {} ({:?})", self.record.name, self.score, self.kind)
    }
}

/// Autocomplete entry shown under the search box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub acronyms: String,
}

impl From<&ProviderRecord> for Suggestion {
    fn from(record: &ProviderRecord) -> Self {
        Self {
            name: record.name.clone(),
            acronyms: record.acronyms_label().to_string(),
        }
    }
}

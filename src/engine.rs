use crate::config::LookupConfig;
use crate::core::{Catalog, CatalogStats, MatchResult, ProviderRecord, Suggestion};
use crate::ranking::{Ranker, TieredRanker};
use crate::sources::{load_with_fallback, sources_from_config};
use crate::error::Result;
use std::sync::Arc;
use std::time::Instant;

/// Main lookup orchestrator over one catalog snapshot
pub struct LookupEngine {
    catalog: Arc<Catalog>,
    ranker: Arc<dyn Ranker>,
    options: SearchOptions,
}

/// Search options/configuration
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Suggestions shown under the search box
    pub suggestion_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            suggestion_limit: 10,
        }
    }
}

impl From<&LookupConfig> for SearchOptions {
    fn from(config: &LookupConfig) -> Self {
        Self {
            suggestion_limit: config.suggestion_limit,
        }
    }
}

impl LookupEngine {
    /// Create engine with the tiered ranker
    pub fn new(catalog: Arc<Catalog>, options: SearchOptions) -> Self {
        Self::with_ranker(catalog, Arc::new(TieredRanker::new()), options)
    }

    pub fn with_ranker(catalog: Arc<Catalog>, ranker: Arc<dyn Ranker>, options: SearchOptions) -> Self {
        Self {
            catalog,
            ranker,
            options,
        }
    }

    /// Load the catalog from the configured sources and build an engine
    pub async fn from_config(config: &LookupConfig) -> Result<Self> {
        config.validate()?;
        let sources = sources_from_config(config)?;
        let catalog = load_with_fallback(&sources).await;

        Ok(Self::new(Arc::new(catalog), SearchOptions::from(config)))
    }

    /// Ranked matches with scores
    pub fn search_scored(&self, query: &str) -> Vec<MatchResult<'_>> {
        let start = Instant::now();
        let ranked = self.ranker.rank(query, self.catalog.records());

        tracing::debug!(
            "🔎 {:?} → {} matches ({:.2}ms, {})",
            query,
            ranked.len(),
            start.elapsed().as_secs_f64() * 1000.0,
            self.ranker.name()
        );

        ranked
    }

    /// Every matching record, best first
    pub fn search(&self, query: &str) -> Vec<&ProviderRecord> {
        self.search_scored(query)
            .into_iter()
            .map(|m| m.record)
            .collect()
    }

    /// Top matches for the autocomplete dropdown
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        self.search_scored(query)
            .into_iter()
            .take(self.options.suggestion_limit)
            .map(|m| Suggestion::from(m.record))
            .collect()
    }

    /// Record selected on explicit submission: the best match
    pub fn resolve(&self, query: &str) -> Option<&ProviderRecord> {
        self.search_scored(query).first().map(|m| m.record)
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn ranker_name(&self) -> &str {
        self.ranker.name()
    }
}

pub mod file;
pub mod remote;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::LookupConfig;
use crate::core::{Catalog, CatalogOrigin, ProviderRecord};
use crate::error::Result;

pub use file::FileSource;
pub use remote::RemoteSource;

/// Trait for places the provider dataset can be loaded from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every record
    async fn fetch(&self) -> Result<Vec<ProviderRecord>>;

    /// Get source name
    fn name(&self) -> &str;

    /// Origin recorded on a catalog built from this source
    fn origin(&self) -> CatalogOrigin;
}

/// Try each source in order; the first success wins.
///
/// Never fails: when every source errors the catalog is empty.
pub async fn load_with_fallback(sources: &[Arc<dyn CatalogSource>]) -> Catalog {
    for source in sources {
        match source.fetch().await {
            Ok(records) => {
                let catalog = Catalog::from_records(records, source.origin());
                tracing::info!(
                    "✅ Loaded {} obras sociales from {}",
                    catalog.len(),
                    source.name()
                );
                return catalog;
            }
            Err(e) => {
                tracing::warn!("⚠️ Source {} failed: {}", source.name(), e);
            }
        }
    }

    tracing::error!("❌ Every catalog source failed, continuing with an empty catalog");
    Catalog::empty()
}

/// Remote source (when configured) followed by the local file
pub fn sources_from_config(config: &LookupConfig) -> Result<Vec<Arc<dyn CatalogSource>>> {
    let mut sources: Vec<Arc<dyn CatalogSource>> = Vec::new();

    if let Some(base) = &config.api_base {
        sources.push(Arc::new(RemoteSource::new(base.clone(), config.timeout())?));
    }
    sources.push(Arc::new(FileSource::new(config.data_path.clone())));

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;

    struct StaticSource {
        name: &'static str,
        records: Option<Vec<ProviderRecord>>,
    }

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<ProviderRecord>> {
            self.records
                .clone()
                .ok_or_else(|| LookupError::source_failure(self.name, "unreachable"))
        }

        fn name(&self) -> &str {
            self.name
        }

        fn origin(&self) -> CatalogOrigin {
            CatalogOrigin::InMemory
        }
    }

    #[tokio::test]
    async fn test_first_successful_source_wins() {
        let sources: Vec<Arc<dyn CatalogSource>> = vec![
            Arc::new(StaticSource { name: "down", records: None }),
            Arc::new(StaticSource {
                name: "up",
                records: Some(vec![ProviderRecord::new("OSDE", "")]),
            }),
        ];

        let catalog = load_with_fallback(&sources).await;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.origin(), CatalogOrigin::InMemory);
    }

    #[tokio::test]
    async fn test_all_sources_failing_yields_empty_catalog() {
        let sources: Vec<Arc<dyn CatalogSource>> = vec![
            Arc::new(StaticSource { name: "a", records: None }),
            Arc::new(StaticSource { name: "b", records: None }),
        ];

        let catalog = load_with_fallback(&sources).await;
        assert!(catalog.is_empty());
        assert_eq!(catalog.origin(), CatalogOrigin::Empty);
    }

    #[test]
    fn test_sources_from_config() {
        let config = LookupConfig::default();
        let sources = sources_from_config(&config).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].origin(), CatalogOrigin::LocalFile);

        let config = LookupConfig::default().with_api_base("http://127.0.0.1:8090");
        let sources = sources_from_config(&config).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].origin(), CatalogOrigin::Remote);
    }
}

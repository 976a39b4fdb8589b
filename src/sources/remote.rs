use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

use crate::core::{CatalogOrigin, ProviderRecord};
use crate::error::{LookupError, Result};
use crate::sources::CatalogSource;

/// Dataset endpoint path on the API server
pub const CATALOG_PATH: &str = "/obras-sociales";

/// Fetches the dataset from `{base_url}/obras-sociales`
pub struct RemoteSource {
    client: Client,
    base_url: String,
}

impl RemoteSource {
    /// Create new remote source
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url: String = base_url.into();
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, CATALOG_PATH)
    }
}

#[async_trait]
impl CatalogSource for RemoteSource {
    async fn fetch(&self) -> Result<Vec<ProviderRecord>> {
        let url = self.url();
        tracing::debug!("🔄 Fetching obras sociales from {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::source_failure("remote", format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LookupError::source_failure(
                "remote",
                format!("HTTP {}", response.status()),
            ));
        }

        let records: Vec<ProviderRecord> = response
            .json()
            .await
            .map_err(|e| LookupError::source_failure("remote", format!("Invalid JSON: {}", e)))?;

        Ok(records)
    }

    fn name(&self) -> &str {
        "remote"
    }

    fn origin(&self) -> CatalogOrigin {
        CatalogOrigin::Remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strips_trailing_slash() {
        let source = RemoteSource::new("https://api.example.com/", Duration::from_secs(1)).unwrap();
        assert_eq!(source.url(), "https://api.example.com/obras-sociales");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_source_error() {
        // Port 9 (discard) is closed on test hosts
        let source = RemoteSource::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LookupError::Source { .. }));
    }

    #[tokio::test]
    #[ignore] // Requires a running obras-server
    async fn test_remote_fetch() {
        let source = RemoteSource::new("http://127.0.0.1:8090", Duration::from_secs(5)).unwrap();
        let records = source.fetch().await.unwrap();
        assert!(!records.is_empty());
    }
}

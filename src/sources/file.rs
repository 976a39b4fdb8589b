use async_trait::async_trait;
use std::path::PathBuf;

use crate::core::{CatalogOrigin, ProviderRecord};
use crate::error::Result;
use crate::sources::CatalogSource;

/// Reads the dataset from a local JSON array file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<ProviderRecord>> {
        tracing::debug!("🔄 Reading obras sociales from {}", self.path.display());

        let bytes = tokio::fs::read(&self.path).await?;
        let records: Vec<ProviderRecord> = serde_json::from_slice(&bytes)?;

        Ok(records)
    }

    fn name(&self) -> &str {
        "local-file"
    }

    fn origin(&self) -> CatalogOrigin {
        CatalogOrigin::LocalFile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("obras-{}-{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_reads_dataset_file() {
        let path = temp_path("read");
        tokio::fs::write(
            &path,
            r#"[
                {"nombre": "OSDE", "sigla": "", "tipo": "PREPAGA", "provincia": ""},
                {"nombre": "Obra Social del Personal de la Sanidad", "sigla": "OSPS, SANIDAD", "tipo": "SINDICAL", "provincia": "CABA"}
            ]"#,
        )
        .await
        .unwrap();

        let records = FileSource::new(&path).fetch().await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].acronyms, "OSPS, SANIDAD");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = FileSource::new(temp_path("missing")).fetch().await.unwrap_err();
        assert!(matches!(err, LookupError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_json_error() {
        let path = temp_path("bad");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let err = FileSource::new(&path).fetch().await.unwrap_err();
        tokio::fs::remove_file(&path).await.ok();

        assert!(matches!(err, LookupError::Json(_)));
    }
}

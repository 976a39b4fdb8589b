use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ProviderRecord;

/// Where the loaded records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrigin {
    /// Fetched from the API server
    Remote,
    /// Read from the local dataset file
    LocalFile,
    /// Every source failed
    Empty,
    /// Built directly from records in memory
    InMemory,
}

/// Read-only snapshot of the provider dataset
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ProviderRecord>,
    origin: CatalogOrigin,
    loaded_at: DateTime<Utc>,
}

/// Record counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub sindicales: usize,
    pub prepagas: usize,
    pub estatales: usize,
}

impl Catalog {
    /// Build a catalog, dropping rows whose name is blank
    pub fn from_records(records: Vec<ProviderRecord>, origin: CatalogOrigin) -> Self {
        let before = records.len();
        let records: Vec<ProviderRecord> = records
            .into_iter()
            .filter(|r| !r.name.trim().is_empty())
            .collect();

        if records.len() != before {
            tracing::debug!("Dropped {} records with empty name", before - records.len());
        }

        Self {
            records,
            origin,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::from_records(Vec::new(), CatalogOrigin::Empty)
    }

    pub fn records(&self) -> &[ProviderRecord] {
        &self.records
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records by raw category (no name inference)
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total: self.records.len(),
            ..CatalogStats::default()
        };

        for record in &self.records {
            let category = record.category.to_uppercase();
            if category.contains("SINDICAL") {
                stats.sindicales += 1;
            }
            if category.contains("PREPAGA") {
                stats.prepagas += 1;
            }
            if category.contains("ESTATAL") {
                stats.estatales += 1;
            }
        }

        stats
    }
}

impl std::fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} obras sociales • {} sindicales • {} prepagas • {} estatales",
            self.total, self.sindicales, self.prepagas, self.estatales
        )
    }
}

//! # Obras Sociales Search
//!
//! Lookup engine for Argentine health-insurance providers ("obras sociales"):
//! - Accent/case-insensitive text normalization
//! - Tiered ranking over names and comma-separated acronyms
//! - Catalog loading from an API server with local-file fallback
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use obras_sociales_search::{Catalog, CatalogOrigin, LookupEngine, ProviderRecord, SearchOptions};
//!
//! let catalog = Catalog::from_records(
//!     vec![
//!         ProviderRecord::new("Obra Social del Personal de la Sanidad", "OSPS, SANIDAD"),
//!         ProviderRecord::new("OSDE", ""),
//!     ],
//!     CatalogOrigin::InMemory,
//! );
//! let engine = LookupEngine::new(Arc::new(catalog), SearchOptions::default());
//!
//! let best = engine.resolve("ósde").unwrap();
//! assert_eq!(best.name, "OSDE");
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod sources;

// Re-export primary types
pub use config::LookupConfig;
pub use self::core::{Catalog, CatalogOrigin, CatalogStats, CategoryKind, MatchKind, MatchResult, ProviderRecord, Suggestion};
pub use engine::{LookupEngine, SearchOptions};
pub use error::{LookupError, Result};
pub use ranking::{normalize, search, Ranker, TieredRanker};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

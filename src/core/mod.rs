pub mod catalog;
pub mod match_result;
pub mod provider_record;

pub use catalog::{Catalog, CatalogOrigin, CatalogStats};
pub use match_result::{MatchKind, MatchResult, Suggestion};
pub use provider_record::{CategoryKind, ProviderRecord};

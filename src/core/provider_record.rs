use serde::{Deserialize, Serialize};

/// Display label for records without a category
pub const UNSPECIFIED_CATEGORY: &str = "NO ESPECIFICADO";

/// Display label for records without acronyms
pub const NO_ACRONYMS: &str = "Sin siglas registradas";

const PREPAGA_NAME_HINTS: &[&str] = &["OSDE", "SWISS", "MEDICUS", "GALENO"];
const ESTATAL_NAME_HINTS: &[&str] = &["PAMI", "IOMA", "PROFE"];

/// Broad classification used to badge a provider on a result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Union-run obra social
    Sindical,
    /// Private prepaid medicine
    Prepaga,
    /// State-run provider
    Estatal,
    /// Any other non-empty category
    Other,
}

/// One health-insurance provider as loaded from the dataset.
///
/// JSON keys follow the dataset file (`nombre`, `sigla`, `tipo`,
/// `provincia`); the English field names are accepted as aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderRecord {
    /// Legal/display name
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: String,

    /// Raw comma-separated aliases, e.g. `"OSPS, SANIDAD"`
    #[serde(rename = "sigla", alias = "acronyms", default)]
    pub acronyms: String,

    /// Free-text classification (`SINDICAL`, `PREPAGA`, ...)
    #[serde(rename = "tipo", alias = "category", default)]
    pub category: String,

    /// Province or location
    #[serde(rename = "provincia", alias = "region", default)]
    pub region: String,
}

impl ProviderRecord {
    /// Create a new record with name and acronyms
    pub fn new(name: impl Into<String>, acronyms: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            acronyms: acronyms.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Whether the category is missing or explicitly unspecified
    pub fn is_unspecified(&self) -> bool {
        self.category.is_empty() || self.category == UNSPECIFIED_CATEGORY
    }

    /// Classify the record, inferring from well-known names when the
    /// category is unspecified.
    pub fn classify(&self) -> CategoryKind {
        let category = self.category.to_uppercase();
        if category.contains("SINDICAL") {
            CategoryKind::Sindical
        } else if category.contains("PREPAGA") {
            CategoryKind::Prepaga
        } else if category.contains("ESTATAL") {
            CategoryKind::Estatal
        } else if self.is_unspecified() {
            self.infer_from_name().unwrap_or(CategoryKind::Sindical)
        } else {
            CategoryKind::Other
        }
    }

    /// Category text shown next to the name
    pub fn category_label(&self) -> String {
        if !self.is_unspecified() {
            return self.category.clone();
        }
        match self.infer_from_name() {
            Some(CategoryKind::Prepaga) => "PREPAGA".to_string(),
            Some(CategoryKind::Estatal) => "ESTATAL".to_string(),
            _ => UNSPECIFIED_CATEGORY.to_string(),
        }
    }

    /// Raw acronym list, or a placeholder when there is none
    pub fn acronyms_label(&self) -> &str {
        if self.acronyms.is_empty() {
            NO_ACRONYMS
        } else {
            &self.acronyms
        }
    }

    fn infer_from_name(&self) -> Option<CategoryKind> {
        let name = self.name.to_uppercase();
        if PREPAGA_NAME_HINTS.iter().any(|hint| name.contains(hint)) {
            Some(CategoryKind::Prepaga)
        } else if ESTATAL_NAME_HINTS.iter().any(|hint| name.contains(hint)) {
            Some(CategoryKind::Estatal)
        } else {
            None
        }
    }
}

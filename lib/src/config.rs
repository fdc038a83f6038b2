//! Connection and seed configuration.

use std::path::PathBuf;

/// Default MongoDB endpoint when neither `--uri` nor `MONGODB_URI` is set.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
/// Default database name.
pub const DEFAULT_DATABASE: &str = "product_db";
/// Default collection name.
pub const DEFAULT_COLLECTION: &str = "products";
/// Default seed file path, relative to the working directory.
pub const DEFAULT_SEED_FILE: &str = "data/products_catalog.json";

/// Configuration for a catalog run.
///
/// Use the builder pattern to override individual fields; the defaults
/// match a local development MongoDB.
///
/// ## Examples
///
/// ```
/// use catalog_lib::CatalogConfig;
///
/// let config = CatalogConfig::new()
///     .uri("mongodb://db.internal:27017")
///     .database("staging_products");
/// assert_eq!(config.database, "staging_products");
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// MongoDB connection string.
    pub uri: String,
    /// Database to select.
    pub database: String,
    /// Collection holding product documents.
    pub collection: String,
    /// Path to the JSON seed file.
    pub seed_file: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            seed_file: PathBuf::from(DEFAULT_SEED_FILE),
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection string.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Set the database name.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the collection name.
    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the seed file path.
    pub fn seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_file = path.into();
        self
    }
}

/// Resolve the connection string from an explicit value, the `MONGODB_URI`
/// environment variable, or the localhost default, in that order.
pub fn resolve_uri(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var("MONGODB_URI").ok())
        .unwrap_or_else(|| DEFAULT_URI.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_development() {
        let config = CatalogConfig::new();
        assert_eq!(config.uri, DEFAULT_URI);
        assert_eq!(config.database, "product_db");
        assert_eq!(config.collection, "products");
        assert_eq!(config.seed_file, PathBuf::from(DEFAULT_SEED_FILE));
    }

    #[test]
    fn builder_overrides_fields() {
        let config = CatalogConfig::new()
            .uri("mongodb://example:27018")
            .database("other_db")
            .collection("items")
            .seed_file("/tmp/items.json");

        assert_eq!(config.uri, "mongodb://example:27018");
        assert_eq!(config.database, "other_db");
        assert_eq!(config.collection, "items");
        assert_eq!(config.seed_file, PathBuf::from("/tmp/items.json"));
    }

    #[test]
    fn resolve_uri_prefers_explicit_value() {
        let uri = resolve_uri(Some("mongodb://explicit:27017".to_string()));
        assert_eq!(uri, "mongodb://explicit:27017");
    }

    #[test]
    fn resolve_uri_falls_back_to_default() {
        // The test environment may set MONGODB_URI; only assert the default
        // when it does not.
        if std::env::var("MONGODB_URI").is_err() {
            assert_eq!(resolve_uri(None), DEFAULT_URI);
        }
    }
}

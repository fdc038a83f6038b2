//! Error types for the catalog library.

use std::path::PathBuf;

/// Errors that can occur while seeding or querying the catalog.
///
/// Each failure kind the tool can hit is its own variant so callers can
/// tell connectivity problems apart from bad seed data. The CLI logs the
/// error and exits nonzero; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The MongoDB driver reported an error (connection, query, write).
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid JSON.
    #[error("failed to parse seed file: {0}")]
    SeedParse(#[from] serde_json::Error),

    /// The seed file parsed, but its top level is not an array of products.
    #[error("seed file {0} must contain a JSON array of products")]
    SeedShape(PathBuf),

    /// A seed record could not be converted to a BSON document.
    #[error("failed to encode seed record as a document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    /// A result document from the server did not match the expected shape.
    #[error("failed to decode result document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),
}

/// Convenience Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

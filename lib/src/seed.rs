//! Seed-file loading.
//!
//! The seed file is a JSON array of product records. Records are converted
//! to BSON documents verbatim, the way the catalog was originally populated:
//! no validation or transformation beyond requiring the top-level array, so
//! whatever the file says is what the collection gets.

use std::fs;
use std::path::Path;

use mongodb::bson::{Document, to_document};
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Read a seed file and convert each record to a BSON document.
///
/// Fails if the file is missing, is not valid JSON, its top level is not an
/// array, or any element is not a JSON object.
pub fn load_products(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let records = value
        .as_array()
        .ok_or_else(|| CatalogError::SeedShape(path.to_path_buf()))?;

    let docs = records
        .iter()
        .map(|record| to_document(record).map_err(CatalogError::from))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = docs.len(), path = %path.display(), "loaded seed records");
    Ok(docs)
}

//! Catalog library for seeding and reporting on a MongoDB product catalog.
//!
//! This library holds the types, configuration, error taxonomy, seed-file
//! loading, and database access for the `catalog` CLI.
//!
//! ## Core Types
//!
//! - [`Product`] / [`Review`] - The product document model
//! - [`CatalogConfig`] - Connection and seed-file configuration
//! - [`CatalogStore`] - The collection wrapper owning every operation
//!
//! ## Operations
//!
//! - [`CatalogStore::seed_if_empty`] - Bulk-insert the seed file into an
//!   empty collection; skip otherwise
//! - [`CatalogStore::products_under`] - Filtered projection query
//! - [`CatalogStore::high_rated_products`] - Mean-rating aggregation
//! - [`CatalogStore::append_review`] - Targeted append-update
//! - [`CatalogStore::category_summaries`] - Per-category price aggregation
//!
//! ## Result Rows
//!
//! - [`SeedOutcome`] - What the seed step did
//! - [`ProductListing`] / [`RatedProduct`] / [`CategorySummary`] - Typed
//!   rows decoded from query and aggregation output

mod config;
mod error;
mod seed;
mod store;
mod types;

pub use config::{
    CatalogConfig, DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_SEED_FILE, DEFAULT_URI,
    resolve_uri,
};
pub use error::{CatalogError, Result};
pub use seed::load_products;
pub use store::{CatalogStore, category_summary_pipeline, rated_products_pipeline};
pub use types::{
    CategorySummary, NewReview, Product, ProductListing, RatedProduct, Review, SeedOutcome,
};

//! The catalog store: a thin wrapper over a MongoDB collection that owns
//! the tool's five fixed operations.
//!
//! Aggregation pipelines are built by free functions so their shape can be
//! checked without a running server.

use std::path::Path;

use futures::TryStreamExt;
use mongodb::bson::{DateTime, Document, doc, from_document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::seed;
use crate::types::{CategorySummary, NewReview, ProductListing, RatedProduct, SeedOutcome};

/// Connection to the product catalog collection.
///
/// All database access in the tool goes through this type. Every method
/// issues one driver call and awaits it to completion; nothing runs
/// concurrently with anything else.
pub struct CatalogStore {
    client: Client,
    collection: Collection<Document>,
}

impl CatalogStore {
    /// Connect to the configured endpoint and select the catalog collection.
    ///
    /// Issues a `ping` so an unreachable endpoint fails here rather than on
    /// the first real operation.
    pub async fn connect(config: &CatalogConfig) -> Result<Self> {
        debug!(uri = %config.uri, "connecting");
        let client = Client::with_uri_str(&config.uri).await?;

        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await?;

        let collection = database.collection::<Document>(&config.collection);
        info!(
            database = %config.database,
            collection = %config.collection,
            "connected to MongoDB"
        );

        Ok(Self { client, collection })
    }

    /// Create the unique index on `product_id` (idempotent).
    ///
    /// The business key is unique by convention; the index makes the
    /// convention hold on the server too.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let model = IndexModel::builder()
            .keys(doc! { "product_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(model).await?;
        debug!("unique product_id index ensured");
        Ok(())
    }

    /// Seed the collection from `path` if and only if it is empty.
    ///
    /// The count-then-insert sequence is not atomic; two overlapping runs
    /// against an empty collection can both pass the emptiness check. That
    /// race is accepted for this single-run tool, and the unique index from
    /// [`ensure_indexes`](Self::ensure_indexes) makes the second insert fail
    /// loudly rather than duplicate.
    pub async fn seed_if_empty(&self, path: &Path) -> Result<SeedOutcome> {
        let existing = self.collection.count_documents(doc! {}).await?;
        if existing > 0 {
            debug!(existing, "collection already populated, skipping seed");
            return Ok(SeedOutcome::Skipped { existing });
        }

        let docs = seed::load_products(path)?;
        if docs.is_empty() {
            info!("seed file holds no records, nothing to insert");
            return Ok(SeedOutcome::Seeded { inserted: 0 });
        }

        let result = self.collection.insert_many(&docs).await?;
        let inserted = result.inserted_ids.len();
        info!(inserted, "seeded product catalog");
        Ok(SeedOutcome::Seeded { inserted })
    }

    /// Products in `category` priced strictly under `max_price`, projected
    /// to name, price, and stock. Result order is whatever the server
    /// returns.
    pub async fn products_under(
        &self,
        category: &str,
        max_price: f64,
    ) -> Result<Vec<ProductListing>> {
        let filter = doc! { "category": category, "price": { "$lt": max_price } };
        let projection = doc! { "_id": 0, "name": 1, "price": 1, "stock": 1 };

        let mut cursor = self.collection.find(filter).projection(projection).await?;
        let mut listings = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            listings.push(from_document(document)?);
        }

        debug!(matched = listings.len(), category, max_price, "filtered projection query");
        Ok(listings)
    }

    /// Products whose mean review rating is at least `min_avg`.
    ///
    /// Products with no reviews are dropped by the unwind stage and never
    /// appear in the result.
    pub async fn high_rated_products(&self, min_avg: f64) -> Result<Vec<RatedProduct>> {
        let mut cursor = self
            .collection
            .aggregate(rated_products_pipeline(min_avg))
            .await?;

        let mut rated = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            rated.push(from_document(document)?);
        }

        debug!(matched = rated.len(), min_avg, "rated-products aggregation");
        Ok(rated)
    }

    /// Append one review (stamped with the current time) to the product with
    /// the given business id.
    ///
    /// Returns `true` if a product matched. No match is a silent no-op; if
    /// the uniqueness invariant were ever violated, exactly one unspecified
    /// match would be updated.
    pub async fn append_review(&self, product_id: &str, review: &NewReview) -> Result<bool> {
        let update = doc! {
            "$push": {
                "reviews": {
                    "user": review.user.as_str(),
                    "rating": review.rating,
                    "comment": review.comment.as_str(),
                    "date": DateTime::now(),
                }
            }
        };

        let result = self
            .collection
            .update_one(doc! { "product_id": product_id }, update)
            .await?;

        debug!(
            product_id,
            matched = result.matched_count,
            modified = result.modified_count,
            "append-review update"
        );
        Ok(result.matched_count > 0)
    }

    /// Mean price and product count per category, ordered by mean price
    /// descending. Tie order is left to the server.
    pub async fn category_summaries(&self) -> Result<Vec<CategorySummary>> {
        let mut cursor = self
            .collection
            .aggregate(category_summary_pipeline())
            .await?;

        let mut summaries = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            summaries.push(from_document(document)?);
        }

        debug!(categories = summaries.len(), "category aggregation");
        Ok(summaries)
    }

    /// Total number of documents in the collection.
    pub async fn count(&self) -> Result<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    /// Release the connection. Called exactly once at the end of a run,
    /// whether or not the operations succeeded; dropping the client covers
    /// any path that never reaches this.
    pub async fn shutdown(self) {
        debug!("shutting down MongoDB client");
        self.client.shutdown().await;
    }
}

/// Pipeline for the rated-products aggregation: expand reviews to one row
/// each, group by product keeping the first-seen name and the mean rating,
/// then keep groups at or above `min_avg`.
pub fn rated_products_pipeline(min_avg: f64) -> Vec<Document> {
    vec![
        doc! { "$unwind": "$reviews" },
        doc! { "$group": {
            "_id": "$product_id",
            "name": { "$first": "$name" },
            "avg_rating": { "$avg": "$reviews.rating" },
        }},
        doc! { "$match": { "avg_rating": { "$gte": min_avg } } },
    ]
}

/// Pipeline for the per-category summary: group by category with mean price
/// and document count, sorted by mean price descending.
pub fn category_summary_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": {
            "_id": "$category",
            "avg_price": { "$avg": "$price" },
            "product_count": { "$sum": 1 },
        }},
        doc! { "$sort": { "avg_price": -1 } },
    ]
}

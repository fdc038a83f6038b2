//! Core data types for the product catalog.

use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer identifier (e.g. "U999").
    pub user: String,
    /// Rating given, typically 1-5.
    pub rating: f64,
    /// Free-text comment.
    pub comment: String,
    /// When the review was left.
    ///
    /// Seed files carry this as a plain JSON string while reviews appended
    /// by the tool store a real BSON datetime, so the field has to admit
    /// both representations.
    pub date: Bson,
}

/// A product document as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique business key (e.g. "ELEC001").
    pub product_id: String,
    /// Display name.
    pub name: String,
    /// Category used for grouping and filtering.
    pub category: String,
    /// Price in the catalog's currency unit.
    pub price: f64,
    /// Units in stock.
    pub stock: i64,
    /// Reviews left for this product, oldest first.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A review to append to an existing product.
///
/// The stored review gets the current timestamp at write time, so this
/// carries only the caller-supplied fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    /// Reviewer identifier.
    pub user: String,
    /// Rating given.
    pub rating: f64,
    /// Free-text comment.
    pub comment: String,
}

/// Outcome of the seed-if-empty step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SeedOutcome {
    /// The collection was empty and was seeded from the file.
    Seeded {
        /// Number of documents inserted.
        inserted: usize,
    },
    /// The collection already held documents; nothing was inserted.
    Skipped {
        /// Number of documents already present.
        existing: u64,
    },
}

/// One row of the filtered projection query: name, price, and stock of a
/// matching product. The identity field is projected away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// One group from the rated-products aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedProduct {
    /// The grouping key is the product's business id.
    #[serde(rename = "_id")]
    pub product_id: String,
    /// First-seen name within the group.
    pub name: String,
    /// Arithmetic mean of the product's review ratings.
    pub avg_rating: f64,
}

/// One group from the per-category price aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The grouping key is the category name.
    #[serde(rename = "_id")]
    pub category: String,
    /// Arithmetic mean price across the category.
    pub avg_price: f64,
    /// Number of products in the category.
    pub product_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document};

    #[test]
    fn product_deserializes_from_seed_json() {
        let json = r#"{
            "product_id": "ELEC001",
            "name": "Laptop",
            "category": "Electronics",
            "price": 45000,
            "stock": 10,
            "reviews": [
                { "user": "U100", "rating": 5, "comment": "Great", "date": "2024-01-15" }
            ]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_id, "ELEC001");
        assert_eq!(product.price, 45000.0);
        assert_eq!(product.stock, 10);
        assert_eq!(product.reviews.len(), 1);
        assert_eq!(product.reviews[0].rating, 5.0);
        assert_eq!(product.reviews[0].date, Bson::String("2024-01-15".into()));
    }

    #[test]
    fn product_reviews_default_to_empty() {
        let json = r#"{
            "product_id": "FURN001",
            "name": "Desk",
            "category": "Furniture",
            "price": 12000,
            "stock": 4
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.reviews.is_empty());
    }

    #[test]
    fn listing_decodes_from_projected_document() {
        // The server returns integer price/stock for integer source data;
        // the listing still decodes into its numeric fields.
        let doc = doc! { "name": "Laptop", "price": 45000_i64, "stock": 10_i32 };
        let listing: ProductListing = from_document(doc).unwrap();
        assert_eq!(listing.name, "Laptop");
        assert_eq!(listing.price, 45000.0);
        assert_eq!(listing.stock, 10);
    }

    #[test]
    fn rated_product_maps_group_key_to_product_id() {
        let doc = doc! { "_id": "ELEC001", "name": "Laptop", "avg_rating": 4.5 };
        let rated: RatedProduct = from_document(doc).unwrap();
        assert_eq!(rated.product_id, "ELEC001");
        assert_eq!(rated.avg_rating, 4.5);
    }

    #[test]
    fn category_summary_maps_group_key_to_category() {
        let doc = doc! { "_id": "Electronics", "avg_price": 52500.0, "product_count": 2_i32 };
        let summary: CategorySummary = from_document(doc).unwrap();
        assert_eq!(summary.category, "Electronics");
        assert_eq!(summary.avg_price, 52500.0);
        assert_eq!(summary.product_count, 2);
    }

    #[test]
    fn seed_outcome_serializes_with_tag() {
        let json = serde_json::to_string(&SeedOutcome::Seeded { inserted: 7 }).unwrap();
        assert_eq!(json, r#"{"outcome":"seeded","inserted":7}"#);

        let json = serde_json::to_string(&SeedOutcome::Skipped { existing: 12 }).unwrap();
        assert_eq!(json, r#"{"outcome":"skipped","existing":12}"#);
    }
}

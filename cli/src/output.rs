//! Console rendering for each operation's result.
//!
//! Text mode prints a heading line plus a table where a table helps; JSON
//! mode prints one JSON object per operation so the run can be piped.

use catalog_lib::{CategorySummary, ProductListing, RatedProduct, SeedOutcome};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use serde_json::json;

/// Report what the seed step did.
pub fn report_seed(outcome: &SeedOutcome, as_json: bool) {
    if as_json {
        println!("{}", json!({ "step": "seed", "result": outcome }));
        return;
    }

    match outcome {
        SeedOutcome::Seeded { inserted } => {
            println!("Imported {inserted} products into the catalog.");
        }
        SeedOutcome::Skipped { existing } => {
            println!("Products already exist ({existing} documents). Skipping import.");
        }
    }
}

/// Report the filtered projection query.
pub fn report_listings(category: &str, ceiling: f64, listings: &[ProductListing], as_json: bool) {
    if as_json {
        println!(
            "{}",
            json!({ "step": "filtered_query", "category": category,
                    "price_under": ceiling, "products": listings })
        );
        return;
    }

    println!("{category} under {ceiling:.0}:");
    if listings.is_empty() {
        println!("  (no products matched)");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["NAME", "PRICE", "STOCK"]);
    for listing in listings {
        table.add_row([
            listing.name.clone(),
            format!("{:.2}", listing.price),
            listing.stock.to_string(),
        ]);
    }
    println!("{table}");
}

/// Report the rated-products aggregation.
pub fn report_rated(min_avg: f64, rated: &[RatedProduct], as_json: bool) {
    if as_json {
        println!(
            "{}",
            json!({ "step": "high_rated", "min_avg_rating": min_avg, "products": rated })
        );
        return;
    }

    println!("Products with average rating >= {min_avg:.1}:");
    if rated.is_empty() {
        println!("  (no products have a qualifying rating)");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["PRODUCT", "NAME", "AVG RATING"]);
    for product in rated {
        table.add_row([
            product.product_id.clone(),
            product.name.clone(),
            format!("{:.2}", product.avg_rating),
        ]);
    }
    println!("{table}");
}

/// Report the append-review update.
pub fn report_review(product_id: &str, appended: bool, as_json: bool) {
    if as_json {
        println!(
            "{}",
            json!({ "step": "append_review", "product_id": product_id, "appended": appended })
        );
        return;
    }

    if appended {
        println!("New review added to {product_id}.");
    } else {
        println!("No product {product_id} found; no review added.");
    }
}

/// Report the per-category price aggregation.
pub fn report_categories(summaries: &[CategorySummary], as_json: bool) {
    if as_json {
        println!(
            "{}",
            json!({ "step": "category_summary", "categories": summaries })
        );
        return;
    }

    println!("Average price by category:");
    if summaries.is_empty() {
        println!("  (catalog is empty)");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["CATEGORY", "AVG PRICE", "PRODUCTS"]);
    for summary in summaries {
        table.add_row([
            summary.category.clone(),
            format!("{:.2}", summary.avg_price),
            summary.product_count.to_string(),
        ]);
    }
    println!("{table}");
}

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use catalog_lib::{
    CatalogConfig, CatalogError, CatalogStore, DEFAULT_COLLECTION, DEFAULT_DATABASE,
    DEFAULT_SEED_FILE, NewReview, resolve_uri,
};
use clap::Parser;
use tracing::error;

/// Category filter used by the projection query.
const FILTER_CATEGORY: &str = "Electronics";
/// Exclusive upper price bound for the projection query.
const PRICE_CEILING: f64 = 50_000.0;
/// Minimum mean rating for the rated-products aggregation.
const MIN_AVG_RATING: f64 = 4.0;
/// Product that receives the appended review.
const REVIEWED_PRODUCT: &str = "ELEC001";

/// Seed the product catalog and report on it.
///
/// Connects to MongoDB, seeds the collection from a JSON file when it is
/// empty, then runs the fixed query, aggregation, and update operations,
/// printing each result.
#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(version)]
#[command(about = "Seed a MongoDB product catalog and report on it")]
struct Cli {
    /// MongoDB connection string (falls back to MONGODB_URI, then localhost).
    #[arg(long, value_name = "URI")]
    uri: Option<String>,

    /// Database name.
    #[arg(long, default_value = DEFAULT_DATABASE)]
    database: String,

    /// Collection name.
    #[arg(long, default_value = DEFAULT_COLLECTION)]
    collection: String,

    /// Path to the JSON seed file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SEED_FILE)]
    seed_file: PathBuf,

    /// Emit results as JSON lines instead of text.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> CatalogConfig {
        CatalogConfig::new()
            .uri(resolve_uri(self.uri.clone()))
            .database(&self.database)
            .collection(&self.collection)
            .seed_file(&self.seed_file)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Connect, run the five operations, and release the connection.
///
/// The shutdown runs on the success path and the reported-error path alike;
/// a connect failure never reaches it and is covered by the driver's drop.
async fn run(cli: &Cli) -> Result<(), CatalogError> {
    let config = cli.config();
    let store = CatalogStore::connect(&config).await?;

    let result = run_operations(&store, &config, cli.json).await;
    store.shutdown().await;
    result
}

/// The fixed operation sequence, each awaited to completion before the next.
async fn run_operations(
    store: &CatalogStore,
    config: &CatalogConfig,
    json: bool,
) -> Result<(), CatalogError> {
    store.ensure_indexes().await?;

    let outcome = store.seed_if_empty(&config.seed_file).await?;
    output::report_seed(&outcome, json);

    let listings = store.products_under(FILTER_CATEGORY, PRICE_CEILING).await?;
    output::report_listings(FILTER_CATEGORY, PRICE_CEILING, &listings, json);

    let rated = store.high_rated_products(MIN_AVG_RATING).await?;
    output::report_rated(MIN_AVG_RATING, &rated, json);

    let review = NewReview {
        user: "U999".to_string(),
        rating: 4.0,
        comment: "Good value".to_string(),
    };
    let appended = store.append_review(REVIEWED_PRODUCT, &review).await?;
    output::report_review(REVIEWED_PRODUCT, appended, json);

    let summaries = store.category_summaries().await?;
    output::report_categories(&summaries, json);

    Ok(())
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

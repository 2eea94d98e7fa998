use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guide_engine::catalog::{browse, fetch_or_empty, AreaFilter, BrowseQuery, SortMode};
use guide_engine::config::Config;
use guide_engine::db::{init_db, Database, ListingStore};
use guide_engine::domain::Category;
use guide_engine::generator::{run_generation, RunOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(about = "Description synthesis and listing ranking for the local guide")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate descriptions for every listing (the default).
    Generate,
    /// Print one category page as JSON lines, ranked and filtered.
    List {
        category: String,
        #[arg(long, default_value = "all")]
        area: String,
        #[arg(long, default_value = "default")]
        sort: String,
        #[arg(long, default_value = "")]
        query: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    // The only hard stop: storage must be reachable before anything runs.
    let db = Database::new(config.database_path.clone());
    init_db(&db, &config.schema_path).context("Failed to initialize database")?;
    db.ping().context("Failed to connect to database")?;

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => generate(&db, &config),
        Command::List {
            category,
            area,
            sort,
            query,
        } => list(&db, &category, &area, &sort, query),
    }
}

fn generate(db: &Database, config: &Config) -> Result<()> {
    let opts = RunOptions {
        workers: config.workers,
        progress_every: config.progress_every,
        sample_count: config.sample_count,
    };
    let report = run_generation(db, &opts).context("Failed to fetch listings")?;

    println!(
        "Generated descriptions for {}/{} listings ({} failed).",
        report.updated, report.total, report.failed
    );
    if !report.is_clean() {
        for failure in &report.failures {
            println!("  failed: {} ({})", failure.id, failure.error);
        }
        println!("Rerun to retry the failed listings.");
    }

    if !report.samples.is_empty() {
        println!("\n-- Sample outputs --\n");
    }
    for sample in &report.samples {
        println!("=== {} ({}) ===", sample.name, sample.category);
        println!("{}\n", sample.description);
    }

    Ok(())
}

fn list(db: &Database, category: &str, area: &str, sort: &str, query: String) -> Result<()> {
    let q = BrowseQuery::new(
        &Category::from_slug(category),
        SortMode::parse(sort),
        AreaFilter::parse(area),
        query,
    );
    let cards = browse(fetch_or_empty(db, category), &q);
    tracing::info!(category, count = cards.len(), "listing category");

    for card in &cards {
        println!("{}", serde_json::to_string(card).context("Failed to encode card")?);
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use policy_catalogue::{
    catalogue::{self, CatalogueStore},
    config::Config,
    filter::{self, FilterQuery},
    loader,
};

#[derive(Parser)]
struct Opts {
    /// YAML config file; built-in defaults apply when omitted.
    #[clap(short, long, env = "POLICY_CATALOGUE_CONFIG")]
    config: Option<PathBuf>,
    /// Free-text query over title and summary.
    #[clap(short, long)]
    query: Option<String>,
    /// Category filter; repeat to select several.
    #[clap(short = 'C', long = "category")]
    categories: Vec<String>,
    /// Emit matching records as a JSON array.
    #[clap(long)]
    json: bool,
}

async fn run(opts: Opts) -> anyhow::Result<()> {
    let config = match &opts.config {
        Some(path) => Config::load(path).await.with_context(|| "load config")?,
        None => Config::default(),
    };

    let store = CatalogueStore::new();
    let source = loader::load_into(&store, &config).await;
    let records = store.snapshot();

    let query = FilterQuery {
        text: opts.query.unwrap_or_default(),
        categories: opts.categories.into_iter().collect(),
    };
    let matches = filter::filter(&records, &query);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    println!(
        "{} of {} records (source: {source})",
        matches.len(),
        records.len()
    );
    for record in &matches {
        let cost = if record.cost_label.is_empty() {
            "—"
        } else {
            record.cost_label.as_str()
        };
        println!("- {} [{}] {}", record.title, record.category, cost);
        if !record.summary.is_empty() {
            println!("  {}", record.summary);
        }
    }
    println!(
        "categories: {}",
        catalogue::categories(&records).join(", ")
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    if let Err(e) = run(opts).await {
        error!(?e, "critical error");
    }
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use competeintel_core::{
    load_app_config, lookup_cnpj, AppConfig, Coordinates, SearchRequest, CATEGORIES, CITIES,
    DEFAULT_MAX_RESULTS, DEFAULT_RADIUS_KM,
};
use competeintel_mock::{run_search, MockCatalog};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "competeintel-cli")]
#[command(about = "Competitor search and market analytics over the mock catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search competitors and print the analysed result as JSON.
    Search(SearchArgs),
    /// List supported business categories.
    Categories,
    /// List supported cities.
    Cities,
    /// Validate a CNPJ and print sample registry data.
    Cnpj { cnpj: String },
}

#[derive(Debug, clap::Args)]
struct SearchArgs {
    category: String,
    city: String,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    neighborhood: Option<String>,
    #[arg(long)]
    cep: Option<String>,
    #[arg(long)]
    business_name: Option<String>,
    #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
    radius_km: f64,
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS, allow_negative_numbers = true)]
    max_results: i64,
    /// Search origin latitude; defaults to the city centre.
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
    /// Catalog seed; defaults to `COMPETEINTEL_MOCK_SEED`.
    #[arg(long)]
    seed: Option<u64>,
    /// Competitors per segment; defaults to `COMPETEINTEL_MOCK_SEGMENT_SIZE`.
    #[arg(long)]
    segment_size: Option<usize>,
}

impl SearchArgs {
    fn to_request(&self) -> SearchRequest {
        SearchRequest {
            business_name: self.business_name.clone(),
            state: self.state.clone(),
            neighborhood: self.neighborhood.clone(),
            cep: self.cep.clone(),
            coordinates: self.lat.zip(self.lng).map(|(latitude, longitude)| Coordinates {
                latitude,
                longitude,
            }),
            radius_km: self.radius_km,
            max_results: self.max_results,
            ..SearchRequest::new(self.category.clone(), self.city.clone())
        }
    }
}

fn execute(command: &Commands, config: &AppConfig) -> anyhow::Result<Value> {
    match command {
        Commands::Search(args) => {
            let seed = args.seed.unwrap_or(config.mock_seed);
            let segment_size = args.segment_size.unwrap_or(config.mock_segment_size);
            anyhow::ensure!(segment_size > 0, "--segment-size must be at least 1");
            let query = args.to_request().validate().context("invalid search")?;
            let catalog = MockCatalog::generate(seed, segment_size);
            let response = run_search(&catalog, &query);
            tracing::info!(
                category = %query.category,
                city = query.city.name,
                total_found = response.total_found,
                "search completed"
            );
            Ok(serde_json::to_value(response)?)
        }
        Commands::Categories => Ok(json!({
            "categories": CATEGORIES
                .into_iter()
                .map(|c| json!({
                    "name": c.name(),
                    "cnae_code": c.cnae_code(),
                    "description": c.description(),
                }))
                .collect::<Vec<_>>()
        })),
        Commands::Cities => Ok(json!({
            "cities": CITIES
                .iter()
                .map(|c| json!({
                    "name": c.name,
                    "state": c.state,
                    "coordinates": c.center(),
                }))
                .collect::<Vec<_>>()
        })),
        Commands::Cnpj { cnpj } => {
            let record = lookup_cnpj(cnpj).with_context(|| format!("invalid CNPJ {cnpj:?}"))?;
            Ok(serde_json::to_value(record)?)
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_app_config().context("invalid configuration")?;
    let output = execute(&cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests;

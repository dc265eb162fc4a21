//! menu-find: fuzzy search, suggestions and recommendations over a menu catalog.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use menu_search::{
    best_relevance, levenshtein_distance, normalize, rank, recommend, search, Catalog,
    CategoryField, Product, ProductField, SearchError, SearchResult, Vocabulary,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;

mod config;
mod output;

/// Typo-tolerant menu search
#[derive(Parser)]
#[command(name = "menu-find")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to ./menu-search.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find products (or categories) matching a possibly mistyped query
    Search {
        /// Search query
        query: String,

        /// Catalog JSON file
        #[arg(long, env = "MENU_CATALOG")]
        catalog: PathBuf,

        /// Field to search: name or description (repeatable; defaults to
        /// the config for products, both fields for categories)
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,

        /// Edit tolerance
        #[arg(short, long)]
        threshold: Option<u32>,

        /// Search categories instead of products
        #[arg(long)]
        categories: bool,

        /// Order results by relevance
        #[arg(long)]
        rank: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest corrected queries
    Suggest {
        /// Possibly mistyped query
        query: String,

        /// Catalog JSON file
        #[arg(long, env = "MENU_CATALOG")]
        catalog: PathBuf,

        /// Maximum suggestions
        #[arg(short, long)]
        max: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List products related to a product
    Recommend {
        /// Product ID
        id: i64,

        /// Catalog JSON file
        #[arg(long, env = "MENU_CATALOG")]
        catalog: PathBuf,

        /// Maximum recommendations
        #[arg(short, long)]
        max: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the normalized form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Show the edit distance between two strings after normalization
    Distance {
        /// First string
        a: String,
        /// Second string
        b: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    config::init_logging(cli.verbose)?;
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Search { query, catalog, fields, threshold, categories, rank: rank_results, json } => {
            let catalog = load_catalog(&catalog)?;
            let threshold = threshold.unwrap_or(config.search.threshold);
            let rank_results = rank_results || config.search.rank;

            if categories {
                let fields: Vec<CategoryField> = if fields.is_empty() {
                    CategoryField::ALL.to_vec()
                } else {
                    parse_fields(&fields)?
                };
                let mut found = search(&catalog.categories, &query, &fields, threshold);
                if rank_results {
                    rank(&mut found, &query, &fields, threshold);
                }
                if json {
                    println!("{}", serde_json::to_string_pretty(&found)?);
                } else {
                    output::categories(&found, &query);
                }
                return Ok(());
            }

            let fields: Vec<ProductField> = if fields.is_empty() {
                config.search.fields.clone()
            } else {
                parse_fields(&fields)?
            };
            let mut found = search(&catalog.products, &query, &fields, threshold);
            if rank_results {
                rank(&mut found, &query, &fields, threshold);
            }

            if json {
                let results: Vec<SearchResult<&Product>> = found
                    .into_iter()
                    .map(|item| SearchResult {
                        score: best_relevance(item, &query, &fields, threshold),
                        item,
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if found.is_empty() {
                output::info(&format!("No products match \"{}\"", query));
                let vocabulary = Vocabulary::build(&catalog.products, ProductField::Name, ProductField::Description);
                let fixes = vocabulary.suggest(&query, config.suggestions.threshold, config.suggestions.max);
                if !fixes.is_empty() {
                    output::info(&format!("Did you mean: {}", fixes.join(", ")));
                }
            } else {
                output::products(&found, Some(query.as_str()));
            }
        }

        Commands::Suggest { query, catalog, max, json } => {
            let catalog = load_catalog(&catalog)?;
            let max = max.unwrap_or(config.suggestions.max);
            let vocabulary = Vocabulary::build(&catalog.products, ProductField::Name, ProductField::Description);
            let fixes = vocabulary.suggest(&query, config.suggestions.threshold, max);

            if json {
                println!("{}", serde_json::to_string_pretty(&fixes)?);
            } else {
                output::suggestions(&fixes);
            }
        }

        Commands::Recommend { id, catalog, max, json } => {
            let catalog = load_catalog(&catalog)?;
            let max = max.unwrap_or(config.recommendations.max);
            let Some(target) = catalog.product(id) else {
                bail!("No product with id {} in catalog", id);
            };
            let related = recommend(target, &catalog.products, max);

            if json {
                println!("{}", serde_json::to_string_pretty(&related)?);
            } else {
                output::products(&related, None);
            }
        }

        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
        }

        Commands::Distance { a, b } => {
            println!("{}", levenshtein_distance(&normalize(&a), &normalize(&b)));
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let catalog = Catalog::from_path(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;
    tracing::debug!(
        products = catalog.products.len(),
        categories = catalog.categories.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn parse_fields<F>(names: &[String]) -> Result<Vec<F>, SearchError>
where
    F: FromStr<Err = SearchError>,
{
    names.iter().map(|name| name.parse()).collect()
}

//! fnref: search documented functions and the code examples that use them.
//!
//! Datasets come from `--functions` and `--codeblocks` (local paths, globs,
//! or `http(s)` URLs), or from `FNREF_FUNCTIONS` / `FNREF_CODEBLOCKS`.
//!
//! - `fnref search flter -p dplyr`
//! - `fnref search filter --exact -f csv -o results.csv`
//! - `fnref shell`

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fnref::config::{DEFAULT_LIMIT, DEFAULT_RETRIES, DEFAULT_SCORE_CUTOFF, DEFAULT_TIMEOUT_SECS};
use fnref::render::markdown::MarkdownRenderer;
use fnref::render::{self, Renderer};
use fnref::stats::{self, WordCounts};
use fnref::{
    lookup, source, CatalogConfig, CatalogHandle, FetchOptions, LookupMode,
    LookupOptions, MatchMode, Source,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "fnref",
    about = "Search documented functions and the code examples that use them"
)]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DataArgs {
    /// Function dataset: JSON file or http(s) URL
    #[arg(long, env = "FNREF_FUNCTIONS", global = true)]
    functions: Option<String>,

    /// Code-block datasets (comma separated; globs allowed for files)
    #[arg(long, env = "FNREF_CODEBLOCKS", value_delimiter = ',', global = true)]
    codeblocks: Vec<String>,

    /// How a code block must mention a function to be linked to it
    #[arg(long, value_enum, default_value_t = MatchMode::Substring, global = true)]
    match_mode: MatchMode,

    /// Per-request timeout for URL datasets, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout: u64,

    /// Extra attempts for failed URL fetches
    #[arg(long, default_value_t = DEFAULT_RETRIES, global = true)]
    retries: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Search functions by name
    Search {
        /// Function name or approximation of it
        query: String,

        /// Only consider functions from this package
        #[arg(short, long)]
        package: Option<String>,

        /// Exact name lookup instead of fuzzy matching
        #[arg(long)]
        exact: bool,

        /// Maximum number of fuzzy results
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Minimum fuzzy score (0-100)
        #[arg(short = 'c', long, default_value_t = DEFAULT_SCORE_CUTOFF)]
        cutoff: f64,

        /// Output format: markdown (default), json, csv
        #[arg(short = 'f', long, default_value = "markdown")]
        format: String,

        /// Write results to a file instead of stdout. A directory gets
        /// `search_results.<ext>` inside it.
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Show one function by exact name
    Show {
        name: String,
    },

    /// List the packages present in the catalog
    Packages,

    /// Compute a TF-IDF weight
    Tfidf {
        /// Occurrences of the term in the document
        #[arg(long)]
        term_count: u64,
        /// Total tokens in the document
        #[arg(long)]
        total_tokens: u64,
        /// Documents in the corpus
        #[arg(long)]
        total_docs: u64,
        /// Documents containing the term
        #[arg(long)]
        docs_with_term: u64,
    },

    /// Compute a type-token ratio from counts, --text, or stdin
    Ttr {
        /// Distinct words
        #[arg(long, requires = "tokens", conflicts_with = "text")]
        types: Option<u64>,
        /// Total words
        #[arg(long, requires = "types", conflicts_with = "text")]
        tokens: Option<u64>,
        /// Text to analyse
        #[arg(long)]
        text: Option<String>,
    },

    /// Interactive search session
    Shell {
        /// Initial package filter
        #[arg(short, long)]
        package: Option<String>,

        #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        #[arg(short = 'c', long, default_value_t = DEFAULT_SCORE_CUTOFF)]
        cutoff: f64,
    },
}

fn main() -> Result<()> {
    // stdout carries results; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fnref=warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            package,
            exact,
            limit,
            cutoff,
            format,
            output,
        } => {
            let renderer = render::create_renderer(&format)?;
            let catalog = catalog_config(&cli.data)?.build()?;
            let options = LookupOptions {
                package: package.as_deref(),
                mode: if exact { LookupMode::Exact } else { LookupMode::Fuzzy },
                limit,
                score_cutoff: cutoff,
            };
            let hits = lookup(&catalog, &query, &options);
            if hits.is_empty() {
                eprintln!("No matches found. Try another keyword.");
                return Ok(());
            }
            let rendered = renderer.render(&hits);
            match output {
                Some(path) => {
                    let path = export_path(path, renderer.as_ref());
                    fs::write(&path, &rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("wrote {} results to {}", hits.len(), path.display());
                }
                None => print!("{}", rendered),
            }
        }
        Commands::Show { name } => {
            let catalog = catalog_config(&cli.data)?.build()?;
            let options = LookupOptions {
                mode: LookupMode::Exact,
                ..Default::default()
            };
            let hits = lookup(&catalog, &name, &options);
            if hits.is_empty() {
                anyhow::bail!("no function named `{}`", name);
            }
            print!("{}", MarkdownRenderer.render(&hits));
        }
        Commands::Packages => {
            let catalog = catalog_config(&cli.data)?.build()?;
            for package in catalog.packages() {
                println!("{}", package);
            }
        }
        Commands::Tfidf {
            term_count,
            total_tokens,
            total_docs,
            docs_with_term,
        } => {
            let value = stats::tf_idf(term_count, total_tokens, total_docs, docs_with_term)?;
            println!("tf-idf: {:.7}", value);
        }
        Commands::Ttr {
            types,
            tokens,
            text,
        } => {
            let counts = match (types, tokens) {
                (Some(types), Some(tokens)) => WordCounts { tokens, types },
                _ => WordCounts::of(&read_text(text)?),
            };
            let value = counts.ttr()?;
            println!("tokens: {}", counts.tokens);
            println!("types: {}", counts.types);
            println!("ttr: {:.4}", value);
        }
        Commands::Shell {
            package,
            limit,
            cutoff,
        } => {
            let config = catalog_config(&cli.data)?;
            let handle = CatalogHandle::new(config.build()?);
            let stdin = io::stdin();
            let stdout = io::stdout();
            fnref::shell::Shell::new(&handle, || config.build(), limit, cutoff)
                .with_package(package)
                .run(stdin.lock(), stdout.lock())
                .context("shell I/O failed")?;
        }
    }

    Ok(())
}

/// Resolve dataset arguments into a build configuration.
fn catalog_config(data: &DataArgs) -> Result<CatalogConfig> {
    let functions = data
        .functions
        .as_deref()
        .context("--functions is required (or set FNREF_FUNCTIONS)")?;
    Ok(CatalogConfig {
        functions: Source::parse(functions),
        codeblocks: source::expand(&data.codeblocks)?,
        match_mode: data.match_mode,
        fetch: FetchOptions {
            timeout: Duration::from_secs(data.timeout),
            retries: data.retries,
        },
    })
}

/// Export target for `-o`: the path itself, or a default file name when it
/// names a directory.
fn export_path(path: PathBuf, renderer: &dyn Renderer) -> PathBuf {
    if path.is_dir() {
        path.join(format!("search_results.{}", renderer.file_extension()))
    } else {
        path
    }
}

/// Text from `--text`, or all of stdin.
fn read_text(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use grounded_chunker::ChunkingConfig;
use grounded_ingest::Ingestor;
use grounded_providers::{Provider, ProviderKind};
use grounded_retrieval::{Retriever, DEFAULT_TOP_K};
use grounded_vector_store::{SharedVectorStore, StoreConfig, VectorStore};
use serde_json::json;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::flags::EmbedModeFlag;

mod config;
mod flags;

#[derive(Parser)]
#[command(name = "grounded")]
#[command(about = "Document Q&A grounded in a local vector store", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Directory holding the store artifacts (index.bin, meta.json)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Embedding vector width; must match the persisted index
    #[arg(long, global = true)]
    embed_dim: Option<usize>,

    /// Embedding backend
    #[arg(long, global = true, value_enum)]
    embed_mode: Option<EmbedModeFlag>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a document into the vector store
    Ingest(IngestArgs),

    /// Ask a question grounded in the ingested documents
    Query(QueryArgs),

    /// Show store statistics
    Stats,
}

#[derive(Args)]
struct IngestArgs {
    /// Document to ingest (.txt or .md)
    file: PathBuf,

    /// Words per chunk
    #[arg(long, default_value_t = 400)]
    max_tokens: usize,

    /// Words shared between consecutive chunks
    #[arg(long, default_value_t = 60)]
    overlap: usize,
}

#[derive(Args)]
struct QueryArgs {
    /// The question to answer
    text: String,

    /// How many chunks to ground the answer on
    #[arg(short, default_value_t = DEFAULT_TOP_K)]
    k: usize,

    /// Provider key (groq, llama, openai, gpt-4)
    #[arg(long)]
    provider: Option<String>,

    /// Print the retrieved hits without calling a language model
    #[arg(long)]
    retrieve_only: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = AppConfig::resolve(
        cli.data_dir,
        cli.embed_dim,
        cli.embed_mode.map(EmbedModeFlag::as_domain),
    )?;

    let store = VectorStore::open(StoreConfig::new(config.embed_dim, &config.data_dir)).await?;
    let store = SharedVectorStore::new(store);

    match cli.command {
        Commands::Ingest(args) => {
            let chunking = ChunkingConfig::new(args.max_tokens, args.overlap)?;
            let embedder = config.build_embedder()?;
            let ingestor = Ingestor::new(store, embedder, chunking);
            let report = ingestor.ingest_file(&args.file).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Query(args) => {
            let embedder = config.build_embedder()?;
            let retriever = Retriever::new(store, embedder);

            if args.retrieve_only {
                let hits = retriever.retrieve(&args.text, args.k).await?;
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                let kind = match args.provider.or(config.provider_key) {
                    Some(key) => ProviderKind::from_key(&key)?,
                    None => ProviderKind::default(),
                };
                let provider = Provider::from_env(kind)?;
                let grounded = retriever.answer(&args.text, args.k, &provider).await?;
                println!("{}", serde_json::to_string_pretty(&grounded)?);
            }
        }
        Commands::Stats => {
            let stats = json!({
                "data_dir": config.data_dir,
                "dim": store.dim().await,
                "chunks": store.len().await,
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

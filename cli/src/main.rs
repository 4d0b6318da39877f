use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::load_engine;
use search_core::batch::process_queries;
use search_core::duplicates::remove_duplicates;
use search_core::request_queue::RequestQueue;
use search_core::{DocId, DocumentStatus, Execution};
use serde_json::json;
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Query an in-memory TF-IDF index built from JSON/JSONL documents", long_about = None)]
struct Cli {
    /// Input path (file or directory)
    #[arg(long, global = true, default_value = "./sample_data")]
    input: PathBuf,
    /// Whitespace-separated stop words
    #[arg(long, global = true, default_value = "")]
    stop_words: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more queries and print the top documents for each
    Query {
        queries: Vec<String>,
        /// Only return documents with this status
        #[arg(long, default_value_t = DocumentStatus::Actual)]
        status: DocumentStatus,
        /// Score each query with the parallel strategy
        #[arg(long, default_value_t = false)]
        parallel: bool,
        /// Dispatch all queries across worker threads
        #[arg(long, default_value_t = false)]
        batch: bool,
        /// Size of the request log window
        #[arg(long, default_value_t = search_core::request_queue::MIN_IN_DAY)]
        window: usize,
    },
    /// Show which query words a document matches
    Match {
        #[arg(long)]
        id: DocId,
        query: String,
    },
    /// Remove documents with identical vocabularies
    Dedup,
    /// Print document count and per-document word frequencies
    Stats,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let mut engine = load_engine(&cli.input, &cli.stop_words)?;

    let output = match cli.command {
        Commands::Query { queries, status, parallel, batch, window } => {
            if batch {
                let results = process_queries(&engine, queries.as_slice())?;
                json!(queries.iter().zip(results).map(|(q, r)| json!({ "query": q, "results": r })).collect::<Vec<_>>())
            } else {
                let execution = if parallel { Execution::Parallel } else { Execution::Sequential };
                let mut log = RequestQueue::with_capacity(&engine, window);
                let mut out = Vec::new();
                for q in &queries {
                    let results = log.add_find_request_exec(execution, q, status)?;
                    out.push(json!({ "query": q, "results": results }));
                }
                tracing::info!(no_result_requests = log.no_result_requests(), "queries complete");
                tracing::debug!(recent = ?log.recent_queries().collect::<Vec<_>>(), "request window");
                json!(out)
            }
        }
        Commands::Match { id, query } => {
            let (words, status) = engine.match_document(&query, id)?;
            json!({ "id": id, "words": words, "status": status })
        }
        Commands::Dedup => {
            let removed = remove_duplicates(&mut engine);
            json!({ "removed": removed, "remaining": engine.document_count() })
        }
        Commands::Stats => {
            let docs: Vec<_> = engine
                .document_ids()
                .map(|id| json!({ "id": id, "frequencies": engine.word_frequencies(id) }))
                .collect();
            json!({ "document_count": engine.document_count(), "documents": docs })
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

//! Libris catalog server.
//!
//! On startup the catalog is refreshed from the delimited source files in
//! the data directory (wipe and reinsert per entity kind), then the HTTP
//! API is served until the process is stopped.
//!
//! Usage:
//!   libris --data-dir data --port 8080

use anyhow::{Context, Result};
use clap::Parser;
use libris_ingest::{CatalogLoader, CatalogSources};
use libris_server::{AppState, CatalogService, build_router};
use libris_store::DocumentStore;
use std::path::PathBuf;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Library catalog service")]
struct Args {
    /// Path to the catalog database file
    #[arg(long, default_value = "catalog.db")]
    database: PathBuf,

    /// Directory holding the delimited source files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// HTTP port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Libris catalog server starting...");

    let store = DocumentStore::open(&args.database)
        .with_context(|| format!("failed to open catalog database {:?}", args.database))?;
    let authors = store.collection("authors", "email")?;
    let books = store.collection("books", "isbn")?;
    let magazines = store.collection("magazines", "isbn")?;

    let loader = CatalogLoader::new(
        authors,
        books.clone(),
        magazines.clone(),
        CatalogSources::in_dir(&args.data_dir),
    );
    let report = loader.load_all();
    if report.books.is_none() || report.magazines.is_none() || report.authors.is_none() {
        warn!("one or more catalog sources failed to load; serving what loaded");
    }

    let state = AppState {
        books: CatalogService::new(books),
        magazines: CatalogService::new(magazines),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .with_context(|| format!("failed to bind HTTP port {}", args.port))?;
    info!("catalog API listening on port {}", args.port);
    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}

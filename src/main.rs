use axum::Json;
use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use pdfdex::ingestion::handlers::{handle_ingest_url, handle_upload_documents};
use pdfdex::search::handlers::{
    handle_occurrences, handle_rank, handle_search_all, handle_search_document, handle_top_words,
};
use pdfdex::storage::blobs::BlobStore;
use pdfdex::storage::documents::DocumentStore;
use pdfdex::storage::handlers::{
    handle_delete_document, handle_download_document, handle_get_document, handle_list_documents,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;

/// Uploads above this size are rejected before extraction.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:3000".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                if i + 1 >= args.len() {
                    eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                    eprintln!("Example: {} --bind 0.0.0.0:8080", args[0]);
                    std::process::exit(1);
                }
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let documents = Arc::new(DocumentStore::new());
    let blobs = Arc::new(BlobStore::new());

    let app = Router::new()
        .route("/health", get(handle_health))
        .route(
            "/documents",
            post(handle_upload_documents).get(handle_list_documents),
        )
        .route(
            "/documents/:id",
            get(handle_get_document).delete(handle_delete_document),
        )
        .route("/documents/:id/download", get(handle_download_document))
        .route("/documents/:id/search", get(handle_search_document))
        .route("/documents/:id/occurrences", get(handle_occurrences))
        .route("/documents/:id/top-words", get(handle_top_words))
        .route("/ingest", post(handle_ingest_url))
        .route("/search", get(handle_search_all))
        .route("/rank", get(handle_rank))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(Extension(documents))
        .layer(Extension(blobs));

    tracing::info!("Document service listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    documents: usize,
}

async fn handle_health(
    Extension(documents): Extension<Arc<DocumentStore>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        documents: documents.len(),
    })
}

use duoledger::api::{build_app, handlers::AppService};
use duoledger::config::CONFIG;
use duoledger::core::services::LedgerService;
use duoledger::infrastructure::{
    logging::in_memory::InMemoryLogging,
    storage::{Storage, json_file::JsonFileStorage},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter = EnvFilter::try_new(&CONFIG.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!("Starting with {:?}", *CONFIG);

    let storage = JsonFileStorage::new(&CONFIG.data_file);
    storage.init().await?;
    info!("Ledger stored at {}", storage.path().display());
    let storage: Arc<dyn Storage> = Arc::new(storage);
    let service: AppService = LedgerService::new(storage, InMemoryLogging::new());

    let app = build_app(Arc::new(service), CONFIG.request_timeout);

    // Start server
    let addr = SocketAddr::new(CONFIG.host, CONFIG.port);
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

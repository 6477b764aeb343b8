use anyhow::Result;
use clap::Parser;
use rummage::{CollationKind, SearchService, ServerConfig, ServiceConfig};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rummage")]
#[command(about = "Multi-tenant in-memory keyword search service", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, env = "RUMMAGE_BIND_ADDR", default_value = "0.0.0.0")]
    bind_addr: String,

    /// HTTP API port
    #[arg(long, env = "RUMMAGE_HTTP_PORT", default_value = "8080")]
    http_port: u16,

    /// Maximum number of indices
    #[arg(long, env = "RUMMAGE_INDEX_CAPACITY", default_value = "32")]
    index_capacity: usize,

    /// Largest page size a query may request
    #[arg(long, env = "RUMMAGE_MAX_PAGE_SIZE", default_value = "200")]
    max_page_size: usize,

    /// Page size used when the request is out of range
    #[arg(long, env = "RUMMAGE_DEFAULT_PAGE_SIZE", default_value = "10")]
    default_page_size: usize,

    /// Collation for sorting (locale, binary)
    #[arg(long, env = "RUMMAGE_COLLATION", default_value = "locale")]
    collation: String,

    /// BCP-47 locale used by the locale collation
    #[arg(long, env = "RUMMAGE_LOCALE", default_value = "en")]
    locale: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting Rummage v{}", rummage::VERSION);

    let collation = match CollationKind::try_from(args.collation.as_str()) {
        Ok(kind) => kind,
        Err(_) => {
            warn!("Unknown collation '{}', using 'locale'", args.collation);
            CollationKind::Locale
        }
    };

    let service_config = ServiceConfig::default()
        .with_capacity(args.index_capacity)
        .with_page_limits(args.default_page_size, args.max_page_size)
        .with_collation(collation)
        .with_locale(args.locale);

    info!("Service configuration:");
    info!("  Index capacity: {}", service_config.index_capacity);
    info!(
        "  Page size: default {}, max {}",
        service_config.default_page_size, service_config.max_page_size
    );
    info!(
        "  Collation: {} ({})",
        service_config.collation.name(),
        service_config.locale
    );

    let service = Arc::new(SearchService::new(service_config)?);
    info!("Search service initialized");

    let server_config = ServerConfig::new(args.bind_addr, args.http_port);
    let app = rummage::create_router(rummage::AppState { service });
    let listener = tokio::net::TcpListener::bind(server_config.listen_addr()).await?;
    info!("HTTP API server listening on {}", server_config.listen_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Received shutdown signal, gracefully shutting down");
        })
        .await?;

    Ok(())
}

//! BioGateway Server - Main entry point

use anyhow::{Context, Result};
use bgw_common::logging::{init_logging, LogConfig};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing::info;

use bgw_server::{
    api,
    catalog::Collection,
    config::Config,
    features::FeatureState,
    query::Limits,
    store::{DocumentStore, PgDocumentStore, SharedStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with configuration from environment
    let log_config = LogConfig::builder()
        .log_file_prefix("bgw-server")
        .filter_directives("bgw_server=debug,tower_http=debug,sqlx=warn")
        .build();

    // Environment variables take precedence
    let log_config = log_config.merge_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting BioGateway Server");

    // Load configuration
    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let graph = PgDocumentStore::connect(&config.database.url, &config.database)
        .await
        .context("Failed to connect to the graph store")?;
    info!("Graph store connection pool established");

    if config.database.run_migrations {
        graph
            .migrate()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
        info!("Database migrations completed");
    }

    let graph = Arc::new(graph);
    let evidence: SharedStore = if config.database.evidence_url() == config.database.url {
        graph.clone() as SharedStore
    } else {
        let store = PgDocumentStore::connect(config.database.evidence_url(), &config.database)
            .await
            .context("Failed to connect to the evidence store")?;
        info!("Evidence store connection pool established");
        Arc::new(store)
    };

    match graph.count(Collection::Protein.storage_name()).await {
        Ok(count) => info!(proteins = count, "Graph store ready"),
        Err(e) => tracing::warn!("Could not count proteins: {}", e),
    }

    let state = FeatureState {
        store: graph,
        evidence,
        limits: Limits {
            default: config.query.default_limit,
            max: config.query.max_limit,
        },
        fetch_timeout: config.query.fetch_timeout(),
    };

    let app = api::create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let base_path = if config.server.base_path.is_empty() {
        "/"
    } else {
        config.server.base_path.as_str()
    };
    info!("Server listening on {} under {}", addr, base_path);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

    // Give ongoing requests time to complete
    info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}

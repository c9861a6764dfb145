use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use module_registry::{
    api::{create_router, openapi::ApiDoc},
    config::{LogFormat, StorageBackend},
    ApplicationBuilder, Config,
};

/// Module registry HTTP service
#[derive(Debug, Parser)]
#[command(name = "module-registry", version, about)]
struct Cli {
    /// Address to bind, overrides LISTEN_ADDR
    #[arg(long)]
    listen_addr: Option<String>,

    /// Storage backend, overrides STORAGE_BACKEND
    #[arg(long, value_enum)]
    storage_backend: Option<StorageBackend>,

    /// Print the OpenAPI document as JSON and exit
    #[arg(long)]
    dump_openapi: bool,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.dump_openapi {
        println!("{}", ApiDoc::openapi().to_pretty_json()?);
        return Ok(());
    }

    let mut config = Config::from_env();
    if let Some(addr) = cli.listen_addr {
        config.listen_addr = addr;
    }
    if let Some(backend) = cli.storage_backend {
        config.storage_backend = backend;
    }

    init_tracing(config.log_format);
    info!("Starting module registry service");

    config.validate().map_err(anyhow::Error::msg)?;
    info!(
        storage_backend = %config.storage_backend,
        listen_addr = %config.listen_addr,
        "Configuration loaded and validated"
    );

    let listen_addr = config.listen_addr.clone();
    let state = ApplicationBuilder::new(config)
        .with_configured_storage()
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to initialise storage")?
        .build()
        .map_err(|e| anyhow::anyhow!(e))?;

    let app = create_router(state);

    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", listen_addr))?;
    info!("Listening on {}", listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

//! Overdue speaker logger.
//!
//! # Architecture Overview
//!
//! ```text
//!     POST /log_overdue_speaker
//!     ─────────────────────────▶ ┌──────────┐    ┌──────────┐    ┌──────────────┐
//!                                │   http   │───▶│ overdue  │───▶│ overdue log  │
//!     {"message": ...}           │  server  │    │ decode + │    │ (append-only │
//!     ◀───────────────────────── │ handlers │◀───│  format  │    │  text file)  │
//!                                └──────────┘    └──────────┘    └──────────────┘
//!
//!     cross-cutting: config (TOML + CLI), observability (tracing, metrics),
//!                    lifecycle (signals, graceful shutdown)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use overdue_logger::config::{self, ConfigOverrides, LoggerConfig};
use overdue_logger::lifecycle::{wait_for_shutdown, Shutdown};
use overdue_logger::observability;
use overdue_logger::HttpServer;

#[derive(Parser)]
#[command(name = "overdue-logger")]
#[command(about = "Records overdue speakers to an append-only log file", long_about = None)]
struct Args {
    /// TOML configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    /// Override log_file.path
    #[arg(short, long)]
    log_file: Option<String>,
}

impl Args {
    fn load(&self) -> Result<LoggerConfig, config::ConfigError> {
        let overrides = ConfigOverrides {
            bind_address: self.bind.clone(),
            log_file: self.log_file.clone(),
        };
        config::load_with_overrides(self.config.as_deref(), &overrides)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.load()?;

    observability::logging::init(&config.observability.log_level)?;

    tracing::info!("overdue-logger v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        log_file = %config.log_file.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Already validated as a socket address.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let stopped = shutdown.signalled();

    let mut serving = tokio::spawn(server.run(listener, stopped));

    tokio::select! {
        result = &mut serving => {
            result??;
            return Ok(());
        }
        _ = wait_for_shutdown() => {}
    }

    tracing::info!(
        listeners = shutdown.receiver_count(),
        "Draining in-flight requests"
    );
    shutdown.trigger();
    serving.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}

//! Pokedex - an interactive client for the PokeAPI catalog
//!
//! Reads commands from stdin and writes results to stdout. Logs go to
//! stderr, filtered by `RUST_LOG`.

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::engine::default_source;
use pokedex::repl::spawn_stdin_reader;
use pokedex::{spawn_sweep_task, Config, PokeApiClient, ResponseCache, Session};

/// Main entry point for the Pokedex client.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start its sweep task
/// 4. Run the interactive session until `exit`, end of input or a signal
/// 5. Stop the sweep task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base_url={}, cache_interval={}ms, seeded={}",
        config.api_base_url,
        config.cache_interval_ms,
        config.seed.is_some()
    );

    let cache = ResponseCache::new(config.cache_interval());
    let sweeper = spawn_sweep_task(cache.clone());

    let client = PokeApiClient::from_config(&config, cache);
    let mut session = Session::new(
        client,
        Some(default_source(config.seed)),
        std::io::stdout(),
    );
    // Stdin is read on its own thread so a pending read cannot hold up exit
    let input = spawn_stdin_reader();

    let result = tokio::select! {
        result = session.run_lines(input) => result,
        _ = shutdown_signal() => Ok(()),
    };

    sweeper.stop().await;
    result?;
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}

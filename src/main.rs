//! Library Catalogue - console front end
//!
//! Wires the in-memory store, the book service and the interactive menu.

use std::io;
use std::sync::Arc;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalogue::{
    config::{AppConfig, LogRotation, LoggingConfig},
    console::Console,
    repository::InMemoryBookStore,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_tracing(&config.logging)?;

    tracing::info!("Starting Library Catalogue v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(InMemoryBookStore::new());
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(store)),
    };

    let stdin = io::stdin();
    let mut console = Console::new(
        state.services.books.clone(),
        state.config.console.banner.clone(),
        stdin.lock(),
        io::stdout(),
    );
    console.run().await?;

    tracing::info!("Library Catalogue stopped");
    Ok(())
}

/// Log to a rolling file only, so log lines never interleave with the menu
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&logging.directory)?;

    let appender = match logging.rotation {
        LogRotation::Daily => rolling::daily(&logging.directory, &logging.file_prefix),
        LogRotation::Hourly => rolling::hourly(&logging.directory, &logging.file_prefix),
        LogRotation::Never => rolling::never(&logging.directory, &logging.file_prefix),
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalogue={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
            .init();
    }

    tracing::info!(
        "Logging to {}/{} (rotation: {})",
        logging.directory,
        logging.file_prefix,
        logging.rotation.as_str()
    );
    Ok(guard)
}

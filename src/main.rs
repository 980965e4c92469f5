//! Tickerdeck - a terminal dashboard for a multi-agent stock analysis
//! service, built with ratatui.

use tickerdeck::{config, App, Config, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to a file; stdout belongs to the TUI. The file also
    // carries the watchlist flow's per-symbol diagnostics.
    let log_dir = config::log_dir().unwrap_or_else(|_| std::path::PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(log_dir, "tickerdeck.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickerdeck=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application
    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}

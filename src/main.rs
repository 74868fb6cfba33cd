//! App Shell - Main Entry Point

use app_shell::app::application::run_app;
use app_shell::app::composer::RootComposer;
use app_shell::app::registry::ViewRegistry;
use app_shell::constants::LOG_FILE_PREFIX;
use app_shell::render::to_markup;
use app_shell::utils::config_store::{load_config, log_dir};
use tracing_subscriber::filter::{Builder, LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    // Console logging, plus a daily log file when a log directory is available
    let (file_layer, _guard) = match log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(default_filter())
        .with(fmt::layer())
        .with(file_layer)
        .init();

    tracing::info!("Starting App Shell...");

    let config = load_config().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Failed to load config, using defaults");
        Default::default()
    });

    let registry = ViewRegistry::with_defaults(&config.content);
    let composer = RootComposer::from_registry(&registry)?;
    tracing::debug!(markup = %to_markup(&composer.compose()), "Initial view tree");

    // Run the GPUI application
    run_app(config, composer);
    Ok(())
}

/// `info` unless `RUST_LOG` says otherwise
fn default_filter() -> EnvFilter {
    filter_builder().from_env_lossy()
}

fn filter_builder() -> Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

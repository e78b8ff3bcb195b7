mod app_state;
mod cli;

use std::path::Path;

use insetbridge_config::schema::{InsetBridgeConfig, LogLevel};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter};
use winit::event_loop::EventLoop;

/// The level directive layered over `RUST_LOG`: `--log-level` wins over config.
fn level_directive(cli_level: Option<&str>, config_level: LogLevel) -> Directive {
    let configured = || {
        config_level
            .directive()
            .parse()
            .unwrap_or_else(|_| Directive::from(LevelFilter::INFO))
    };
    match cli_level {
        Some(level) if !level.contains('=') => format!("insetbridge={level}")
            .parse()
            .unwrap_or_else(|_| configured()),
        Some(directive) => directive.parse().unwrap_or_else(|_| configured()),
        None => configured(),
    }
}

/// Build the log filter from `RUST_LOG` (if set) plus the level directive.
fn log_filter(env: Option<&str>, cli_level: Option<&str>, config_level: LogLevel) -> EnvFilter {
    env.map(EnvFilter::new)
        .unwrap_or_default()
        .add_directive(level_directive(cli_level, config_level))
}

fn main() {
    let args = cli::parse();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Logging starts at the CLI/default level so config loading is visible;
    // the filter is swapped once the config's own level is known.
    let (filter, reload_handle) = reload::Layer::new(log_filter(
        rust_log.as_deref(),
        args.log_level.as_deref(),
        LogLevel::default(),
    ));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loaded = match &args.config {
        Some(path) => insetbridge_config::load_config_from(Path::new(path)),
        None => insetbridge_config::load_config(),
    };
    if let Ok(config) = &loaded {
        let filter = log_filter(
            rust_log.as_deref(),
            args.log_level.as_deref(),
            config.logging.level,
        );
        if let Err(e) = reload_handle.reload(filter) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }

    tracing::info!("insetbridge v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        InsetBridgeConfig::default()
    });
    if let Some(url) = args.url {
        config.surface.url = Some(url);
        config.surface.html = None;
    }

    if args.print_config {
        println!("{}", insetbridge_config::config_to_json(&config));
        return;
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::InsetBridgeApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

mod cli;
mod run;

use std::sync::Arc;

use oaf_bridge::{fixed_window, OafClient, SimulatedHost};
use oaf_common::OafError;
use oaf_config::OafConfig;
use oaf_layout::OafPanel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> (OafConfig, Option<oaf_common::ConfigError>) {
    let loaded = match &args.config {
        Some(path) => oaf_config::load_config_from(path),
        None => oaf_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (OafConfig::default(), Some(e)),
    }
}

#[tokio::main]
async fn main() -> Result<(), OafError> {
    let args = cli::parse();

    // Config first: it may carry the log level.
    let (config, config_error) = load_config(&args);

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("oaf-panel v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let window = fixed_window(args.window.window());
    let client = if args.standalone {
        OafClient::standalone(window)
    } else {
        let host = config
            .bridge
            .normalized_host()
            .unwrap_or_else(|| config.bridge.host.clone());
        tracing::info!(
            app_id = %config.bridge.app_id,
            host = %host,
            iframe_id = %config.bridge.resolve_iframe_id(),
            "connecting to simulated host"
        );
        let viewport = args.viewport.viewport();
        OafClient::from_init(
            || Ok(Arc::new(SimulatedHost::new(viewport)) as Arc<dyn oaf_bridge::HostBridge>),
            window,
        )
    };
    let client = client.with_navigation(config.bridge.navigation);

    let panel = OafPanel::new(client, config.layout);
    let _diagnostics = run::log_host_diagnostics(&panel);
    let report = run::run(&panel, &args.steps).await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    tracing::info!("Done");
    Ok(())
}

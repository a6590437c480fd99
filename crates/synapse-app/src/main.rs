//! Synapse application binary - composition root.
//!
//! 1. Parse CLI flags
//! 2. Load configuration from TOML (falling back to defaults)
//! 3. Install the tracing subscriber
//! 4. Build the shared state and start the axum server

mod cli;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use synapse_api::routes;
use synapse_api::state::AppState;
use synapse_core::config::SynapseConfig;
use synapse_core::error::SynapseError;

use crate::cli::CliArgs;

/// Where the effective configuration came from.
#[derive(Debug)]
enum ConfigSource {
    File,
    Missing,
    Invalid(SynapseError),
}

/// Read the config file, falling back to defaults when it is absent or bad.
fn load_config(path: &Path) -> (SynapseConfig, ConfigSource) {
    if !path.exists() {
        return (SynapseConfig::default(), ConfigSource::Missing);
    }
    match SynapseConfig::load(path) {
        Ok(config) => (config, ConfigSource::File),
        Err(e) => (SynapseConfig::default(), ConfigSource::Invalid(e)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing is up so the file's log level can apply;
    // the outcome is reported once the subscriber exists.
    let config_file = args.resolve_config_path();
    let (mut config, source) = load_config(&config_file);

    let filter = args.resolve_log_filter(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Synapse v{}", env!("CARGO_PKG_VERSION"));
    match source {
        ConfigSource::File => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        ConfigSource::Missing => {
            tracing::info!(path = %config_file.display(), "No configuration file, using defaults")
        }
        ConfigSource::Invalid(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Invalid configuration, using defaults"
        ),
    }

    config.general.port = args.resolve_port(config.general.port);
    tracing::debug!(
        port = config.general.port,
        reply_delay_ms = config.chat.reply_delay_ms,
        session_timeout_minutes = config.chat.session_timeout_minutes,
        "Effective configuration"
    );

    let state = AppState::new(config.clone());

    if let Err(e) = routes::start_server(&config, state).await {
        tracing::error!(error = %e, "Server stopped");
        tracing::error!("Try: SYNAPSE_PORT={} synapse", config.general.port.saturating_add(1));
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = load_config(&dir.path().join("config.toml"));
        assert!(matches!(source, ConfigSource::Missing));
        assert_eq!(config.general.port, 3040);
    }

    #[test]
    fn test_load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nreply_delay_ms = 10\n").unwrap();
        let (config, source) = load_config(&path);
        assert!(matches!(source, ConfigSource::File));
        assert_eq!(config.chat.reply_delay_ms, 10);
    }

    #[test]
    fn test_load_config_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = [").unwrap();
        let (config, source) = load_config(&path);
        assert!(matches!(source, ConfigSource::Invalid(SynapseError::Config(_))));
        assert_eq!(config.chat.reply_delay_ms, 1500);
    }
}

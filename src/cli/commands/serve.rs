//! `orbit serve`: run the HTTP backend.

use anyhow::{Context, Result};
use clap::Args;
use std::sync::Arc;

use crate::adapters::http::{EditorHttpConfig, EditorHttpServer};
use crate::adapters::sqlite::{initialize_database, SqliteEssayRepository};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::services::{EditorService, ScoringEngine};

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Essay archive location (overrides database.path)
    #[arg(long)]
    pub db_path: Option<String>,
}

impl ServeArgs {
    /// Layer command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.db_path {
            config.database.path.clone_from(path);
        }
    }
}

pub async fn execute(args: &ServeArgs, mut config: Config) -> Result<()> {
    args.apply(&mut config);
    ConfigLoader::validate(&config).context("Invalid server options")?;

    let pool = initialize_database(&config.database)
        .await
        .with_context(|| format!("Failed to open essay archive at {}", config.database.path))?;

    let engine = ScoringEngine::from_config(config.scoring.clone());
    let service = EditorService::new(engine, Arc::new(SqliteEssayRepository::new(pool)));
    let server = EditorHttpServer::new(service, EditorHttpConfig::from(&config.server));

    server.serve_with_shutdown(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        let args = ServeArgs {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
            db_path: None,
        };
        args.apply(&mut config);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, ".orbit/essays.db");
    }

    #[tokio::test]
    async fn test_execute_rejects_port_zero() {
        let args = ServeArgs {
            port: Some(0),
            ..ServeArgs::default()
        };
        let err = execute(&args, Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("Invalid server options"));
    }
}

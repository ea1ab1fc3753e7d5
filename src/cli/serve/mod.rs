//! Serve command - runs the assistant API

use std::net::SocketAddr;

use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::api::create_router;
use crate::config::AppConfig;
use crate::infrastructure::logging;

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Bind address, overriding `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, overriding `server.port`
    #[arg(long)]
    pub port: Option<u16>,
}

/// Run the API server until Ctrl+C or SIGTERM
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    apply_overrides(&mut config, &args);
    logging::init_logging(&config.logging)?;

    let state = crate::create_app_state_with_config(&config).await?;
    let app = create_router(state, config.uploads.max_body_bytes);

    let addr = build_socket_addr(&config)?;
    info!(%addr, "Starting Cuisine Connect assistant");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn apply_overrides(config: &mut AppConfig, args: &ServeArgs) {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config() {
        let mut config = AppConfig::default();
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(3000),
        };

        apply_overrides(&mut config, &args);
        let addr = build_socket_addr(&config).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_no_overrides_keep_defaults() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &ServeArgs::default());
        assert_eq!(build_socket_addr(&config).unwrap().port(), 8080);
    }

    #[test]
    fn test_invalid_host() {
        let mut config = AppConfig::default();
        config.server.host = "not-an-ip".to_string();
        assert!(build_socket_addr(&config).is_err());
    }
}

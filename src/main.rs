mod config;
mod error;
mod server;
mod status;
mod ticker;
mod timing;

use std::{env, process::ExitCode, sync::Arc};

use config::{Config, CONFIG_ENV};
use error::ConfigError;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use server::server::Server;
use ticker::ticker::StatusTicker;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialise the fmt subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let path = env::args().nth(1).or_else(|| env::var(CONFIG_ENV).ok());
    let config = match Config::load(path) {
        Ok(config) => config,
        Err(err) => {
            init_tracing("info");
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_level);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), ConfigError> {
    let timezone = config.timezone()?;
    let address = config.bind_address()?;
    let period = config.refresh_interval();
    let schedule = Arc::new(config.schedule);

    let ticker = StatusTicker::setup(schedule.clone(), timezone, period);
    let server = Server::setup(schedule, timezone);

    tokio::spawn(async move {
        ticker.run().await;
    });

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ConfigError::Bind { address, source })?;
    info!(%address, timezone = %timezone, "Serving studio status");

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(connection) => connection,
            Err(err) => {
                warn!("Could not accept connection: {}", err);
                continue;
            }
        };
        let io = TokioIo::new(stream);
        let server_clone = server.clone();
        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .serve_connection(io, server_clone)
                .await
            {
                warn!(%peer, "Connection error: {}", err);
            }
        });
    }
}

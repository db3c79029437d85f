//! # Hello Service
//!
//! Binary entrypoint: sets up logging, reads configuration, and serves the greeting and health
//! routes. See the crate-level documentation of the library for the route table.
use hello_service::{config, startup, telemetry};
use std::{error::Error, net::TcpListener};

/// Entrypoint for the application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let subscriber =
        telemetry::get_subscriber("hello-service".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let configuration = config::get_configuration()?;
    let address = configuration.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!(%address, "Listening");
    startup::run(listener)?.await?;
    Ok(())
}

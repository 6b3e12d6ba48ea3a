//! Nimbus weather relay daemon

use clap::Parser;
use nimbus_connector_weatherapi::{WeatherApiConfig, WeatherApiProvider};
use nimbus_core::prelude::*;
use nimbus_http::{HttpServer, HttpServerConfig};
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn, Level};

mod cli;
mod config;

use cli::Cli;
use config::NimbusdConfig;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Load configuration
    let config = match NimbusdConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Override config with CLI args
    let config = config.with_overrides(&args);

    if config.weather_api_key.is_empty() {
        warn!("NIMBUS_WEATHER_API_KEY is not set; upstream calls will fail with the weather API's own auth error");
    }

    let bind_address = match config.bind_address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid bind address {}: {}", config.bind_address, e);
            process::exit(1);
        }
    };

    let provider_config = WeatherApiConfig::new(config.weather_api_key.clone())
        .with_base_url(config.weather_api_base.clone())
        .with_timeout(config.timeout * 1000);

    let provider = match WeatherApiProvider::new(provider_config) {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            error!("Failed to create weather provider: {}", e);
            process::exit(1);
        }
    };

    let server = HttpServer::new(HttpServerConfig {
        bind_address,
        enable_cors: config.enable_cors,
    });

    info!("Starting nimbusd on {}", bind_address);

    if let Err(e) = server.start(provider).await {
        error!("Server failed: {}", e);
        process::exit(1);
    }
}

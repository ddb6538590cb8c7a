#[macro_use]
extern crate tracing;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer};
use anyhow::Context;
use rustls::{Certificate, PrivateKey, ServerConfig};
use rustls_pemfile::{certs, pkcs8_private_keys};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use ewallet_lib::config::{Config, SSLConfig};

const SERVICE_NAME: &str = "ewallet-server";

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    let tracing_guard = tracing::subscriber::set_default(subscriber);
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(?config_path, "Reading config file");
            Config::from_file(config_path)?
        }
        None => {
            warn!("Config file not found, reading config from environment");
            Config::from_env()?
        }
    };

    drop(tracing_guard);
    ewallet_lib::tracing::init_tracing(SERVICE_NAME, config.telemetry.as_ref())?;

    let repos =
        ewallet_repo::sqlx_repo::create_repos(&config.database_url, config.max_pool_size).await?;

    let allowed_origins = config.cors_allowed_origins.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .configure(ewallet_lib::app_config_func(repos.clone()))
            .wrap(ewallet_lib::tracing::create_middleware())
            .wrap(build_cors(&allowed_origins))
    });
    server = match config.ssl {
        None => {
            warn!("Using http");
            server.bind(&config.bind_address)?
        }
        Some(ssl_config) => {
            info!("Using https");
            let tls_config = load_tls_config(ssl_config)?;
            server.bind_rustls(&config.bind_address, tls_config)?
        }
    };
    info!(bind_address = %config.bind_address, "Starting server");
    server.run().await?;

    opentelemetry::global::shutdown_tracer_provider();
    Ok(())
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins.iter().fold(
        Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}

fn load_tls_config(ssl_config: SSLConfig) -> Result<ServerConfig, Box<dyn Error>> {
    let config = ServerConfig::builder()
        .with_safe_defaults()
        .with_no_client_auth();

    let mut cert_file = BufReader::new(
        File::open(ssl_config.certificate_chain_file)
            .context("Error opening certificate chain file")?,
    );
    let mut key_file = BufReader::new(
        File::open(ssl_config.private_key_file).context("Error opening private key file")?,
    );

    let cert_chain = certs(&mut cert_file)
        .context("Unable to read certificate chain file")?
        .into_iter()
        .map(Certificate)
        .collect();
    let mut keys: Vec<PrivateKey> = pkcs8_private_keys(&mut key_file)
        .context("Unable to read private key file")?
        .into_iter()
        .map(PrivateKey)
        .collect();

    if keys.is_empty() {
        return Err("No private key found in file".into());
    }

    Ok(config.with_single_cert(cert_chain, keys.remove(0))?)
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::{env, fs};

#[derive(Deserialize, Debug)]
pub struct SSLConfig {
    pub private_key_file: PathBuf,
    pub certificate_chain_file: PathBuf,
}

/// OTLP trace export. The api key, if any, is sent as gRPC metadata.
#[derive(Deserialize, Debug)]
pub struct TelemetryConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_header")]
    pub api_key_header: String,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
    pub telemetry: Option<TelemetryConfig>,
    pub ssl: Option<SSLConfig>,
}

fn default_max_pool_size() -> u32 {
    10
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_owned()
}

fn default_api_key_header() -> String {
    "x-honeycomb-team".to_owned()
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        let config: Config =
            toml::from_str(config.as_str()).with_context(|| "Unable to parse config")?;
        Ok(config)
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read_env = |key: &str| {
            lookup(key).with_context(|| format!("Unable to read env var: {}", key))
        };

        let database_url = read_env("DATABASE_URL")?;
        let max_pool_size = match lookup("MAX_POOL_SIZE") {
            Some(size) => size
                .parse()
                .context("Unable to parse MAX_POOL_SIZE value")?,
            None => default_max_pool_size(),
        };
        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(default_bind_address);
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        let telemetry = lookup("OTLP_ENDPOINT").map(|endpoint| TelemetryConfig {
            endpoint,
            api_key: lookup("OTLP_API_KEY"),
            api_key_header: lookup("OTLP_API_KEY_HEADER").unwrap_or_else(default_api_key_header),
        });

        let config = Config {
            database_url,
            max_pool_size,
            bind_address,
            cors_allowed_origins,
            telemetry,
            ssl: None,
        };
        Ok(config)
    }
}

pub mod generator;
pub mod test_user;

use ewallet_repo::Repos;
use serde::Deserialize;
use std::fs;
use tracing::warn;

const TEST_CONFIG_FILE: &str = "config_test.toml";

#[derive(Deserialize)]
struct TestConfig {
    database_url: String,
}

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

/// Returns `None` for [RepoType::SQLx] when no test database is configured.
pub async fn build_repos(repo_type: RepoType) -> Option<Repos> {
    match repo_type {
        RepoType::SQLx => {
            let Ok(config) = fs::read_to_string(TEST_CONFIG_FILE) else {
                warn!("{} not found, skipping SQLx case", TEST_CONFIG_FILE);
                return None;
            };
            let config: TestConfig = toml::from_str(config.as_str()).unwrap();
            Some(
                ewallet_repo::sqlx_repo::create_repos(&config.database_url, 1)
                    .await
                    .unwrap(),
            )
        }
        RepoType::Mem => Some(ewallet_repo::mem_repo::create_repos()),
    }
}

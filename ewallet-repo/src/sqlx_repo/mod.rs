mod account_repo;
mod transaction_repo;
mod transfer_repo;
mod user_repo;

use crate::{HealthCheck, Repos};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use tracing::{info, instrument, warn};

pub async fn create_repos(database_url: &str, max_pool_size: u32) -> Result<Repos, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(database_url)
        .await
        .context("Unable to connect to database")?;

    info!("Running migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Unable to run migrations")?;

    Ok(Repos::from_store(SQLxRepo::new(pool)))
}

pub struct SQLxRepo {
    pool: Pool<Postgres>,
}

impl SQLxRepo {
    pub fn new(pool: Pool<Postgres>) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

#[async_trait]
impl HealthCheck for SQLxRepo {
    #[instrument(skip(self))]
    async fn check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!(%e, "Database health check failed");
                false
            }
        }
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(e) if e.is_unique_violation())
}

/// Name of the violated foreign key constraint, if that is what the error is.
fn foreign_key_violation(error: &sqlx::Error) -> Option<String> {
    match error {
        sqlx::Error::Database(e) if e.is_foreign_key_violation() => {
            Some(e.constraint().unwrap_or_default().to_owned())
        }
        _ => None,
    }
}

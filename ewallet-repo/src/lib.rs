use crate::account_repo::AccountRepo;
use crate::transaction_repo::TransactionRepo;
use crate::transfer_repo::TransferRepo;
use crate::user_repo::UserRepo;
use async_trait::async_trait;
use std::sync::Arc;

pub mod account_repo;
pub mod transaction_repo;
pub mod transfer_repo;
pub mod user_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlx_repo;

#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn check(&self) -> bool;
}

/// Handles to every repository, all backed by the same store.
#[derive(Clone)]
pub struct Repos {
    pub user_repo: Arc<dyn UserRepo>,
    pub account_repo: Arc<dyn AccountRepo>,
    pub transaction_repo: Arc<dyn TransactionRepo>,
    pub transfer_repo: Arc<dyn TransferRepo>,
    pub health_check: Arc<dyn HealthCheck>,
}

impl Repos {
    fn from_store<R>(store: R) -> Repos
    where
        R: UserRepo + AccountRepo + TransactionRepo + TransferRepo + HealthCheck + 'static,
    {
        let store = Arc::new(store);
        Repos {
            user_repo: store.clone(),
            account_repo: store.clone(),
            transaction_repo: store.clone(),
            transfer_repo: store.clone(),
            health_check: store,
        }
    }
}

use crate::account_repo::Account;
use crate::transaction_repo::Transaction;
use crate::transfer_repo::Transfer;
use crate::user_repo::User;
use crate::{HealthCheck, Repos};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

mod account_repo;
mod transaction_repo;
mod transfer_repo;
mod user_repo;

pub fn create_repos() -> Repos {
    Repos::from_store(MemRepo::new())
}

/// Ids start at 1, so 0 is never assigned.
struct IdSequence(i64);

impl IdSequence {
    fn next(&mut self) -> i64 {
        self.0 += 1;
        self.0
    }
}

struct State {
    users: BTreeMap<i64, User>,
    accounts: BTreeMap<i64, Account>,
    transactions: BTreeMap<i64, Transaction>,
    transfers: BTreeMap<i64, Transfer>,
    user_ids: IdSequence,
    account_ids: IdSequence,
    transaction_ids: IdSequence,
    transfer_ids: IdSequence,
}

impl State {
    /// Removes the account and everything referencing it.
    fn remove_account(&mut self, account_id: i64) -> Option<Account> {
        let account = self.accounts.remove(&account_id)?;
        self.transactions.retain(|_, t| t.account_id != account_id);
        self.transfers
            .retain(|_, t| t.from_id != account_id && t.to_id != account_id);
        Some(account)
    }
}

pub struct MemRepo {
    state: RwLock<State>,
}

impl MemRepo {
    pub fn new() -> MemRepo {
        let state = State {
            users: BTreeMap::new(),
            accounts: BTreeMap::new(),
            transactions: BTreeMap::new(),
            transfers: BTreeMap::new(),
            user_ids: IdSequence(0),
            account_ids: IdSequence(0),
            transaction_ids: IdSequence(0),
            transfer_ids: IdSequence(0),
        };
        MemRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemRepo {
    fn default() -> Self {
        MemRepo::new()
    }
}

#[async_trait]
impl HealthCheck for MemRepo {
    async fn check(&self) -> bool {
        self.read_lock().is_ok()
    }
}

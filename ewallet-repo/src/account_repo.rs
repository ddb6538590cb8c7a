use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait AccountRepo: Sync + Send {
    async fn get_account(&self, account_id: i64) -> Result<Account, AccountRepoError>;

    /// Accounts owned by the user, ordered by id. Empty if the user does not exist.
    async fn get_accounts_for_user(&self, user_id: i64) -> Result<Vec<Account>, AccountRepoError>;

    async fn create_new_account(&self, new_account: NewAccount)
        -> Result<Account, AccountRepoError>;

    async fn update_account(
        &self,
        account_id: i64,
        update: AccountUpdate,
    ) -> Result<Account, AccountRepoError>;

    /// Deletes the account along with its transactions and every transfer from or to it.
    async fn delete_account(&self, account_id: i64) -> Result<Account, AccountRepoError>;
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
}

impl Account {
    pub fn new(id: i64, user_id: i64, name: String) -> Account {
        Account { id, user_id, name }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub user_id: i64,
    pub name: String,
}

impl NewAccount {
    pub fn new(user_id: i64, name: String) -> NewAccount {
        NewAccount { user_id, name }
    }

    pub fn to_account(self, id: i64) -> Account {
        Account::new(id, self.user_id, self.name)
    }
}

/// Fields copied onto an existing account. The owner never changes.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AccountUpdate {
    pub name: String,
}

#[derive(Error, Debug)]
pub enum AccountRepoError {
    #[error("Account with id {0} not found")]
    AccountNotFound(i64),
    #[error("User with id {0} not found")]
    UserNotFound(i64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

use crate::account_repo::AccountRepoError::{AccountNotFound, UserNotFound};
use crate::account_repo::{Account, AccountRepo, AccountRepoError, AccountUpdate, NewAccount};
use crate::sqlx_repo::{foreign_key_violation, SQLxRepo};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::query_as;
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct AccountEntry {
    id: i64,
    user_id: i64,
    name: String,
}

impl From<AccountEntry> for Account {
    fn from(value: AccountEntry) -> Self {
        Account::new(value.id, value.user_id, value.name)
    }
}

#[async_trait]
impl AccountRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_account(&self, account_id: i64) -> Result<Account, AccountRepoError> {
        let account: Option<AccountEntry> =
            query_as("SELECT id, user_id, name FROM accounts WHERE id = $1")
                .bind(account_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get account {}", account_id))?;
        account.map(|a| a.into()).ok_or(AccountNotFound(account_id))
    }

    #[instrument(skip(self))]
    async fn get_accounts_for_user(&self, user_id: i64) -> Result<Vec<Account>, AccountRepoError> {
        let accounts: Vec<AccountEntry> =
            query_as("SELECT id, user_id, name FROM accounts WHERE user_id = $1 ORDER BY id")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .with_context(|| format!("Unable to get accounts for user {}", user_id))?;
        Ok(accounts.into_iter().map(|a| a.into()).collect())
    }

    #[instrument(skip(self))]
    async fn create_new_account(
        &self,
        new_account: NewAccount,
    ) -> Result<Account, AccountRepoError> {
        let result: Result<AccountEntry, sqlx::Error> = query_as(
            "INSERT INTO accounts(user_id, name) VALUES ($1, $2) RETURNING id, user_id, name",
        )
        .bind(new_account.user_id)
        .bind(&new_account.name)
        .fetch_one(&self.pool)
        .await;
        match result {
            Ok(account) => Ok(account.into()),
            Err(e) if foreign_key_violation(&e).is_some() => {
                Err(UserNotFound(new_account.user_id))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context("Unable to insert account")
                .into()),
        }
    }

    #[instrument(skip(self))]
    async fn update_account(
        &self,
        account_id: i64,
        update: AccountUpdate,
    ) -> Result<Account, AccountRepoError> {
        let account: Option<AccountEntry> =
            query_as("UPDATE accounts SET name = $1 WHERE id = $2 RETURNING id, user_id, name")
                .bind(&update.name)
                .bind(account_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to update account {}", account_id))?;
        account.map(|a| a.into()).ok_or(AccountNotFound(account_id))
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, account_id: i64) -> Result<Account, AccountRepoError> {
        let account: Option<AccountEntry> =
            query_as("DELETE FROM accounts WHERE id = $1 RETURNING id, user_id, name")
                .bind(account_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to delete account {}", account_id))?;
        account.map(|a| a.into()).ok_or(AccountNotFound(account_id))
    }
}

use crate::sqlx_repo::{foreign_key_violation, SQLxRepo};
use crate::transaction_repo::TransactionRepoError::{AccountNotFound, TransactionNotFound};
use crate::transaction_repo::{
    NewTransaction, Transaction, TransactionRepo, TransactionRepoError, TransactionUpdate,
};
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::query_as;
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct TransactionEntry {
    id: i64,
    account_id: i64,
    category: String,
    date: NaiveDate,
    note: Option<String>,
    value: Decimal,
}

impl From<TransactionEntry> for Transaction {
    fn from(value: TransactionEntry) -> Self {
        Transaction::new(
            value.id,
            value.account_id,
            value.category,
            value.date,
            value.note,
            value.value,
        )
    }
}

const COLUMNS: &str = "id, account_id, category, date, note, value";

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction_entry: Option<TransactionEntry> =
            query_as(&format!("SELECT {COLUMNS} FROM transactions WHERE id = $1"))
                .bind(transaction_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get transaction {}", transaction_id))?;
        transaction_entry
            .map(|t| t.into())
            .ok_or(TransactionNotFound(transaction_id))
    }

    #[instrument(skip(self))]
    async fn get_transactions_for_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let transaction_entries: Vec<TransactionEntry> = query_as(&format!(
            "SELECT {COLUMNS} FROM transactions WHERE account_id = $1 ORDER BY date DESC, id DESC"
        ))
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Unable to get transactions for account {}", account_id))?;
        Ok(transaction_entries.into_iter().map(|t| t.into()).collect())
    }

    #[instrument(skip(self))]
    async fn get_transactions_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let transaction_entries: Vec<TransactionEntry> = query_as(
            r#"
            SELECT t.id, t.account_id, t.category, t.date, t.note, t.value
            FROM transactions t
                     JOIN accounts a ON a.id = t.account_id
            WHERE a.user_id = $1
            ORDER BY t.date DESC, t.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Unable to get transactions for user {}", user_id))?;
        Ok(transaction_entries.into_iter().map(|t| t.into()).collect())
    }

    #[instrument(skip(self))]
    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let result: Result<TransactionEntry, sqlx::Error> = query_as(&format!(
            "INSERT INTO transactions(account_id, category, date, note, value) VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(new_transaction.account_id)
        .bind(&new_transaction.category)
        .bind(new_transaction.date)
        .bind(&new_transaction.note)
        .bind(new_transaction.value)
        .fetch_one(&self.pool)
        .await;
        match result {
            Ok(transaction_entry) => Ok(transaction_entry.into()),
            Err(e) if foreign_key_violation(&e).is_some() => {
                Err(AccountNotFound(new_transaction.account_id))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context("Unable to insert transaction")
                .into()),
        }
    }

    #[instrument(skip(self))]
    async fn update_transaction(
        &self,
        transaction_id: i64,
        update: TransactionUpdate,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction_entry: Option<TransactionEntry> = query_as(&format!(
            "UPDATE transactions SET category = $1, date = $2, note = $3, value = $4 WHERE id = $5 RETURNING {COLUMNS}"
        ))
        .bind(&update.category)
        .bind(update.date)
        .bind(&update.note)
        .bind(update.value)
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to update transaction {}", transaction_id))?;
        transaction_entry
            .map(|t| t.into())
            .ok_or(TransactionNotFound(transaction_id))
    }

    #[instrument(skip(self))]
    async fn delete_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction_entry: Option<TransactionEntry> = query_as(&format!(
            "DELETE FROM transactions WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to delete transaction {}", transaction_id))?;
        transaction_entry
            .map(|t| t.into())
            .ok_or(TransactionNotFound(transaction_id))
    }
}

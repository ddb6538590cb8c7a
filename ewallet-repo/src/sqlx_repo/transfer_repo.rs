use crate::sqlx_repo::{foreign_key_violation, SQLxRepo};
use crate::transfer_repo::TransferRepoError::{AccountNotFound, TransferNotFound};
use crate::transfer_repo::{NewTransfer, Transfer, TransferRepo, TransferRepoError, TransferUpdate};
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::query_as;
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct TransferEntry {
    id: i64,
    from_account_id: i64,
    to_account_id: i64,
    note: Option<String>,
    value: Decimal,
    date: NaiveDate,
}

impl From<TransferEntry> for Transfer {
    fn from(value: TransferEntry) -> Self {
        Transfer::new(
            value.id,
            value.from_account_id,
            value.to_account_id,
            value.note,
            value.value,
            value.date,
        )
    }
}

const COLUMNS: &str = "id, from_account_id, to_account_id, note, value, date";
const TO_ACCOUNT_CONSTRAINT: &str = "transfers_to_account_id_fkey";

impl SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transfer_entries(
        &self,
        account_column: &'static str,
        account_id: i64,
    ) -> Result<Vec<TransferEntry>, TransferRepoError> {
        let transfer_entries = query_as(&format!(
            "SELECT {COLUMNS} FROM transfers WHERE {account_column} = $1 ORDER BY date DESC, id DESC"
        ))
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Unable to get transfers for account {}", account_id))?;
        Ok(transfer_entries)
    }
}

#[async_trait]
impl TransferRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transfer(&self, transfer_id: i64) -> Result<Transfer, TransferRepoError> {
        let transfer_entry: Option<TransferEntry> =
            query_as(&format!("SELECT {COLUMNS} FROM transfers WHERE id = $1"))
                .bind(transfer_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get transfer {}", transfer_id))?;
        transfer_entry
            .map(|t| t.into())
            .ok_or(TransferNotFound(transfer_id))
    }

    #[instrument(skip(self))]
    async fn get_transfers_from(
        &self,
        account_id: i64,
    ) -> Result<Vec<Transfer>, TransferRepoError> {
        let transfers = self
            .get_transfer_entries("from_account_id", account_id)
            .await?
            .into_iter()
            .map(|t| t.into())
            .collect();
        Ok(transfers)
    }

    #[instrument(skip(self))]
    async fn get_transfers_to(&self, account_id: i64) -> Result<Vec<Transfer>, TransferRepoError> {
        let transfers = self
            .get_transfer_entries("to_account_id", account_id)
            .await?
            .into_iter()
            .map(|t| t.into())
            .collect();
        Ok(transfers)
    }

    #[instrument(skip(self))]
    async fn create_new_transfer(
        &self,
        new_transfer: NewTransfer,
    ) -> Result<Transfer, TransferRepoError> {
        let result: Result<TransferEntry, sqlx::Error> = query_as(&format!(
            "INSERT INTO transfers(from_account_id, to_account_id, note, value, date) VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(new_transfer.from_id)
        .bind(new_transfer.to_id)
        .bind(&new_transfer.note)
        .bind(new_transfer.value)
        .bind(new_transfer.date)
        .fetch_one(&self.pool)
        .await;
        match result {
            Ok(transfer_entry) => Ok(transfer_entry.into()),
            Err(e) => match foreign_key_violation(&e) {
                Some(constraint) if constraint == TO_ACCOUNT_CONSTRAINT => {
                    Err(AccountNotFound(new_transfer.to_id))
                }
                Some(_) => Err(AccountNotFound(new_transfer.from_id)),
                None => Err(anyhow::Error::new(e)
                    .context("Unable to insert transfer")
                    .into()),
            },
        }
    }

    #[instrument(skip(self))]
    async fn update_transfer(
        &self,
        transfer_id: i64,
        update: TransferUpdate,
    ) -> Result<Transfer, TransferRepoError> {
        let transfer_entry: Option<TransferEntry> = query_as(&format!(
            "UPDATE transfers SET note = $1, value = $2, date = $3 WHERE id = $4 RETURNING {COLUMNS}"
        ))
        .bind(&update.note)
        .bind(update.value)
        .bind(update.date)
        .bind(transfer_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to update transfer {}", transfer_id))?;
        transfer_entry
            .map(|t| t.into())
            .ok_or(TransferNotFound(transfer_id))
    }

    #[instrument(skip(self))]
    async fn delete_transfer(&self, transfer_id: i64) -> Result<Transfer, TransferRepoError> {
        let transfer_entry: Option<TransferEntry> = query_as(&format!(
            "DELETE FROM transfers WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(transfer_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to delete transfer {}", transfer_id))?;
        transfer_entry
            .map(|t| t.into())
            .ok_or(TransferNotFound(transfer_id))
    }
}

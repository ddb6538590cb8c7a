use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait TransferRepo: Sync + Send {
    async fn get_transfer(&self, transfer_id: i64) -> Result<Transfer, TransferRepoError>;

    /// Outgoing transfers of the account, newest first.
    async fn get_transfers_from(&self, account_id: i64)
        -> Result<Vec<Transfer>, TransferRepoError>;

    /// Incoming transfers of the account, newest first.
    async fn get_transfers_to(&self, account_id: i64) -> Result<Vec<Transfer>, TransferRepoError>;

    async fn create_new_transfer(
        &self,
        new_transfer: NewTransfer,
    ) -> Result<Transfer, TransferRepoError>;

    async fn update_transfer(
        &self,
        transfer_id: i64,
        update: TransferUpdate,
    ) -> Result<Transfer, TransferRepoError>;

    async fn delete_transfer(&self, transfer_id: i64) -> Result<Transfer, TransferRepoError>;
}

#[derive(Error, Debug)]
pub enum TransferRepoError {
    #[error("Transfer with id {0} not found")]
    TransferNotFound(i64),
    #[error("Account with id {0} not found")]
    AccountNotFound(i64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: i64,
    pub from_id: i64,
    pub to_id: i64,
    pub note: Option<String>,
    pub value: Decimal,
    pub date: NaiveDate,
}

impl Transfer {
    pub const fn new(
        id: i64,
        from_id: i64,
        to_id: i64,
        note: Option<String>,
        value: Decimal,
        date: NaiveDate,
    ) -> Transfer {
        Transfer {
            id,
            from_id,
            to_id,
            note,
            value,
            date,
        }
    }

    /// Copies the updatable fields. Both endpoints stay as they are.
    pub fn apply(&mut self, update: TransferUpdate) {
        self.note = update.note;
        self.value = update.value;
        self.date = update.date;
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewTransfer {
    pub from_id: i64,
    pub to_id: i64,
    pub note: Option<String>,
    pub value: Decimal,
    pub date: NaiveDate,
}

impl NewTransfer {
    pub const fn new(
        from_id: i64,
        to_id: i64,
        note: Option<String>,
        value: Decimal,
        date: NaiveDate,
    ) -> NewTransfer {
        NewTransfer {
            from_id,
            to_id,
            note,
            value,
            date,
        }
    }

    pub fn to_transfer(self, id: i64) -> Transfer {
        Transfer::new(
            id,
            self.from_id,
            self.to_id,
            self.note,
            self.value,
            self.date,
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransferUpdate {
    pub note: Option<String>,
    pub value: Decimal,
    pub date: NaiveDate,
}

impl TransferUpdate {
    pub const fn new(note: Option<String>, value: Decimal, date: NaiveDate) -> TransferUpdate {
        TransferUpdate { note, value, date }
    }
}

impl From<Transfer> for TransferUpdate {
    fn from(value: Transfer) -> Self {
        TransferUpdate::new(value.note, value.value, value.date)
    }
}

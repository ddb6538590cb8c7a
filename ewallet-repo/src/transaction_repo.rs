use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lists are returned newest first: `date DESC, id DESC`.
#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn get_transaction(&self, transaction_id: i64)
        -> Result<Transaction, TransactionRepoError>;

    async fn get_transactions_for_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<Transaction>, TransactionRepoError>;

    /// Transactions of every account owned by the user.
    async fn get_transactions_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Transaction>, TransactionRepoError>;

    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn update_transaction(
        &self,
        transaction_id: i64,
        update: TransactionUpdate,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn delete_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("Transaction with id {0} not found")]
    TransactionNotFound(i64),
    #[error("Account with id {0} not found")]
    AccountNotFound(i64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub value: Decimal,
}

impl Transaction {
    pub const fn new(
        id: i64,
        account_id: i64,
        category: String,
        date: NaiveDate,
        note: Option<String>,
        value: Decimal,
    ) -> Transaction {
        Transaction {
            id,
            account_id,
            category,
            date,
            note,
            value,
        }
    }

    /// Copies the updatable fields onto this transaction.
    pub fn apply(&mut self, update: TransactionUpdate) {
        self.category = update.category;
        self.date = update.date;
        self.note = update.note;
        self.value = update.value;
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub account_id: i64,
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub value: Decimal,
}

impl NewTransaction {
    pub const fn new(
        account_id: i64,
        category: String,
        date: NaiveDate,
        note: Option<String>,
        value: Decimal,
    ) -> NewTransaction {
        NewTransaction {
            account_id,
            category,
            date,
            note,
            value,
        }
    }

    pub fn to_transaction(self, id: i64) -> Transaction {
        Transaction::new(
            id,
            self.account_id,
            self.category,
            self.date,
            self.note,
            self.value,
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransactionUpdate {
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub value: Decimal,
}

impl TransactionUpdate {
    pub const fn new(
        category: String,
        date: NaiveDate,
        note: Option<String>,
        value: Decimal,
    ) -> TransactionUpdate {
        TransactionUpdate {
            category,
            date,
            note,
            value,
        }
    }
}

impl From<Transaction> for TransactionUpdate {
    fn from(value: Transaction) -> Self {
        TransactionUpdate::new(value.category, value.date, value.note, value.value)
    }
}

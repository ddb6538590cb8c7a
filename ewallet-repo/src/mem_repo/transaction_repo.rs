use crate::mem_repo::MemRepo;
use crate::transaction_repo::TransactionRepoError::{AccountNotFound, TransactionNotFound};
use crate::transaction_repo::{
    NewTransaction, Transaction, TransactionRepo, TransactionRepoError, TransactionUpdate,
};
use async_trait::async_trait;
use std::collections::HashSet;

fn newest_first(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
    transactions
}

#[async_trait]
impl TransactionRepo for MemRepo {
    async fn get_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .transactions
            .get(&transaction_id)
            .cloned()
            .ok_or(TransactionNotFound(transaction_id))
    }

    async fn get_transactions_for_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let transactions = read_guard
            .transactions
            .values()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect();
        Ok(newest_first(transactions))
    }

    async fn get_transactions_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let account_ids: HashSet<i64> = read_guard
            .accounts
            .values()
            .filter(|a| a.user_id == user_id)
            .map(|a| a.id)
            .collect();

        let transactions = read_guard
            .transactions
            .values()
            .filter(|t| account_ids.contains(&t.account_id))
            .cloned()
            .collect();
        Ok(newest_first(transactions))
    }

    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        if !write_guard
            .accounts
            .contains_key(&new_transaction.account_id)
        {
            return Err(AccountNotFound(new_transaction.account_id));
        }

        let id = write_guard.transaction_ids.next();
        let transaction = new_transaction.to_transaction(id);
        write_guard.transactions.insert(id, transaction.clone());

        Ok(transaction)
    }

    async fn update_transaction(
        &self,
        transaction_id: i64,
        update: TransactionUpdate,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(transaction) = write_guard.transactions.get_mut(&transaction_id) else {
            return Err(TransactionNotFound(transaction_id));
        };
        transaction.apply(update);

        Ok(transaction.clone())
    }

    async fn delete_transaction(
        &self,
        transaction_id: i64,
    ) -> Result<Transaction, TransactionRepoError> {
        let mut write_guard = self.write_lock()?;

        write_guard
            .transactions
            .remove(&transaction_id)
            .ok_or(TransactionNotFound(transaction_id))
    }
}

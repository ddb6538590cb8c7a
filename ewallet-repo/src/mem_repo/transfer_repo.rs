use crate::mem_repo::MemRepo;
use crate::transfer_repo::TransferRepoError::{AccountNotFound, TransferNotFound};
use crate::transfer_repo::{NewTransfer, Transfer, TransferRepo, TransferRepoError, TransferUpdate};
use async_trait::async_trait;

impl MemRepo {
    fn find_transfers<P>(&self, predicate: P) -> Result<Vec<Transfer>, TransferRepoError>
    where
        P: Fn(&Transfer) -> bool,
    {
        let read_guard = self.read_lock()?;

        let mut transfers: Vec<Transfer> = read_guard
            .transfers
            .values()
            .filter(|t| predicate(t))
            .cloned()
            .collect();
        transfers.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
        Ok(transfers)
    }
}

#[async_trait]
impl TransferRepo for MemRepo {
    async fn get_transfer(&self, transfer_id: i64) -> Result<Transfer, TransferRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .transfers
            .get(&transfer_id)
            .cloned()
            .ok_or(TransferNotFound(transfer_id))
    }

    async fn get_transfers_from(
        &self,
        account_id: i64,
    ) -> Result<Vec<Transfer>, TransferRepoError> {
        self.find_transfers(|t| t.from_id == account_id)
    }

    async fn get_transfers_to(&self, account_id: i64) -> Result<Vec<Transfer>, TransferRepoError> {
        self.find_transfers(|t| t.to_id == account_id)
    }

    async fn create_new_transfer(
        &self,
        new_transfer: NewTransfer,
    ) -> Result<Transfer, TransferRepoError> {
        let mut write_guard = self.write_lock()?;

        for account_id in [new_transfer.from_id, new_transfer.to_id] {
            if !write_guard.accounts.contains_key(&account_id) {
                return Err(AccountNotFound(account_id));
            }
        }

        let id = write_guard.transfer_ids.next();
        let transfer = new_transfer.to_transfer(id);
        write_guard.transfers.insert(id, transfer.clone());

        Ok(transfer)
    }

    async fn update_transfer(
        &self,
        transfer_id: i64,
        update: TransferUpdate,
    ) -> Result<Transfer, TransferRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(transfer) = write_guard.transfers.get_mut(&transfer_id) else {
            return Err(TransferNotFound(transfer_id));
        };
        transfer.apply(update);

        Ok(transfer.clone())
    }

    async fn delete_transfer(&self, transfer_id: i64) -> Result<Transfer, TransferRepoError> {
        let mut write_guard = self.write_lock()?;

        write_guard
            .transfers
            .remove(&transfer_id)
            .ok_or(TransferNotFound(transfer_id))
    }
}

use crate::account_repo::AccountRepoError::{AccountNotFound, UserNotFound};
use crate::account_repo::{Account, AccountRepo, AccountRepoError, AccountUpdate, NewAccount};
use crate::mem_repo::MemRepo;
use async_trait::async_trait;

#[async_trait]
impl AccountRepo for MemRepo {
    async fn get_account(&self, account_id: i64) -> Result<Account, AccountRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .accounts
            .get(&account_id)
            .cloned()
            .ok_or(AccountNotFound(account_id))
    }

    async fn get_accounts_for_user(&self, user_id: i64) -> Result<Vec<Account>, AccountRepoError> {
        let read_guard = self.read_lock()?;

        // BTreeMap iteration is already ordered by id
        let accounts = read_guard
            .accounts
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        Ok(accounts)
    }

    async fn create_new_account(
        &self,
        new_account: NewAccount,
    ) -> Result<Account, AccountRepoError> {
        let mut write_guard = self.write_lock()?;

        if !write_guard.users.contains_key(&new_account.user_id) {
            return Err(UserNotFound(new_account.user_id));
        }

        let id = write_guard.account_ids.next();
        let account = new_account.to_account(id);
        write_guard.accounts.insert(id, account.clone());

        Ok(account)
    }

    async fn update_account(
        &self,
        account_id: i64,
        update: AccountUpdate,
    ) -> Result<Account, AccountRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(account) = write_guard.accounts.get_mut(&account_id) else {
            return Err(AccountNotFound(account_id));
        };
        account.name = update.name;

        Ok(account.clone())
    }

    async fn delete_account(&self, account_id: i64) -> Result<Account, AccountRepoError> {
        let mut write_guard = self.write_lock()?;

        write_guard
            .remove_account(account_id)
            .ok_or(AccountNotFound(account_id))
    }
}

use crate::mem_repo::MemRepo;
use crate::user_repo::UserRepoError::{LoginAlreadyExists, LoginNotFound, UserNotFound};
use crate::user_repo::{NewUser, User, UserRepo, UserRepoError};
use async_trait::async_trait;

#[async_trait]
impl UserRepo for MemRepo {
    async fn get_user(&self, user_id: i64) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .users
            .get(&user_id)
            .cloned()
            .ok_or(UserNotFound(user_id))
    }

    async fn get_user_by_login(&self, login: &str) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .users
            .values()
            .find(|u| u.login == login)
            .cloned()
            .ok_or_else(|| LoginNotFound(login.to_owned()))
    }

    async fn create_new_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.users.values().any(|u| u.login == new_user.login) {
            return Err(LoginAlreadyExists(new_user.login));
        }

        let id = write_guard.user_ids.next();
        let user = new_user.to_user(id);
        write_guard.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: i64,
        updated_user: NewUser,
    ) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        if !write_guard.users.contains_key(&user_id) {
            return Err(UserNotFound(user_id));
        }
        if write_guard
            .users
            .values()
            .any(|u| u.login == updated_user.login && u.id != user_id)
        {
            return Err(LoginAlreadyExists(updated_user.login));
        }

        let Some(user) = write_guard.users.get_mut(&user_id) else {
            return Err(UserNotFound(user_id));
        };
        user.login = updated_user.login;

        Ok(user.clone())
    }

    async fn delete_user(&self, user_id: i64) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(user) = write_guard.users.remove(&user_id) else {
            return Err(UserNotFound(user_id));
        };

        let account_ids: Vec<i64> = write_guard
            .accounts
            .values()
            .filter(|a| a.user_id == user_id)
            .map(|a| a.id)
            .collect();
        for account_id in account_ids {
            write_guard.remove_account(account_id);
        }

        Ok(user)
    }
}

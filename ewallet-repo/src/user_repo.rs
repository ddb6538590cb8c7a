use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait UserRepo: Sync + Send {
    async fn get_user(&self, user_id: i64) -> Result<User, UserRepoError>;

    async fn get_user_by_login(&self, login: &str) -> Result<User, UserRepoError>;

    async fn create_new_user(&self, new_user: NewUser) -> Result<User, UserRepoError>;

    async fn update_user(&self, user_id: i64, updated_user: NewUser)
        -> Result<User, UserRepoError>;

    /// Deletes the user together with all of its accounts.
    async fn delete_user(&self, user_id: i64) -> Result<User, UserRepoError>;
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct User {
    pub id: i64,
    pub login: String,
}

impl User {
    pub fn new(id: i64, login: String) -> User {
        User { id, login }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewUser {
    pub login: String,
}

impl NewUser {
    pub fn new(login: String) -> NewUser {
        NewUser { login }
    }

    pub fn to_user(self, id: i64) -> User {
        User::new(id, self.login)
    }
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("User with id {0} not found")]
    UserNotFound(i64),
    #[error("User with login {0} not found")]
    LoginNotFound(String),
    #[error("User with login {0} already exists")]
    LoginAlreadyExists(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

use crate::sqlx_repo::{is_unique_violation, SQLxRepo};
use crate::user_repo::UserRepoError::{LoginAlreadyExists, LoginNotFound, UserNotFound};
use crate::user_repo::{NewUser, User, UserRepo, UserRepoError};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::query_as;
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct UserEntry {
    id: i64,
    login: String,
}

impl From<UserEntry> for User {
    fn from(value: UserEntry) -> Self {
        User::new(value.id, value.login)
    }
}

#[async_trait]
impl UserRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_user(&self, user_id: i64) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> = query_as("SELECT id, login FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get user {}", user_id))?;
        user.map(|u| u.into()).ok_or(UserNotFound(user_id))
    }

    #[instrument(skip(self))]
    async fn get_user_by_login(&self, login: &str) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> = query_as("SELECT id, login FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get user {}", login))?;
        user.map(|u| u.into())
            .ok_or_else(|| LoginNotFound(login.to_owned()))
    }

    #[instrument(skip(self))]
    async fn create_new_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> = query_as(
            "INSERT INTO users(login) VALUES ($1) ON CONFLICT (login) DO NOTHING RETURNING id, login",
        )
        .bind(&new_user.login)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to create user {}", new_user.login))?;
        user.map(|u| u.into())
            .ok_or(LoginAlreadyExists(new_user.login))
    }

    #[instrument(skip(self))]
    async fn update_user(
        &self,
        user_id: i64,
        updated_user: NewUser,
    ) -> Result<User, UserRepoError> {
        let result: Result<Option<UserEntry>, sqlx::Error> =
            query_as("UPDATE users SET login = $1 WHERE id = $2 RETURNING id, login")
                .bind(&updated_user.login)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await;
        match result {
            Ok(user) => user.map(|u| u.into()).ok_or(UserNotFound(user_id)),
            Err(e) if is_unique_violation(&e) => Err(LoginAlreadyExists(updated_user.login)),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Unable to update user {}", user_id))
                .into()),
        }
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, user_id: i64) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> =
            query_as("DELETE FROM users WHERE id = $1 RETURNING id, login")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to delete user {}", user_id))?;
        user.map(|u| u.into()).ok_or(UserNotFound(user_id))
    }
}

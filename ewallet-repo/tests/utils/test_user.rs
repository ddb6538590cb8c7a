use ewallet_repo::account_repo::{Account, NewAccount};
use ewallet_repo::user_repo::NewUser;
use ewallet_repo::Repos;
use tracing::info;
use uuid::Uuid;

/// A user with two accounts. Deleting the user removes everything it owns.
#[allow(dead_code)]
pub struct TestUser {
    pub id: i64,
    pub login: String,
    pub accounts: Vec<Account>,
    repos: Repos,
}

#[allow(dead_code)]
impl TestUser {
    pub async fn new(repos: &Repos) -> TestUser {
        let login = "test-user-".to_owned() + &Uuid::new_v4().to_string();
        let user = repos
            .user_repo
            .create_new_user(NewUser::new(login.clone()))
            .await
            .unwrap();
        info!(user_id = user.id, %login, "Created user");

        let mut accounts = Vec::new();
        for name in ["Cash", "Savings"] {
            let account = repos
                .account_repo
                .create_new_account(NewAccount::new(user.id, name.to_owned()))
                .await
                .unwrap();
            accounts.push(account);
        }

        TestUser {
            id: user.id,
            login,
            accounts,
            repos: repos.clone(),
        }
    }

    pub fn account_id(&self, index: usize) -> i64 {
        self.accounts[index].id
    }

    pub async fn delete(&self) {
        self.repos.user_repo.delete_user(self.id).await.unwrap();
    }
}

use chrono::NaiveDate;
use ewallet_repo::account_repo::{Account, NewAccount};
use ewallet_repo::transaction_repo::{NewTransaction, Transaction};
use ewallet_repo::transfer_repo::{NewTransfer, Transfer};
use ewallet_repo::user_repo::{NewUser, User};
use ewallet_repo::Repos;
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::seq::SliceRandom;
use rstest::*;
use rust_decimal::Decimal;
use tracing::info;
use tracing::Level;
use uuid::Uuid;

#[allow(unused_macros)]
macro_rules! build_app {
    ($repos:expr) => {{
        let app = App::new()
            .wrap(ewallet_lib::tracing::create_middleware())
            .configure(ewallet_lib::app_config_func($repos));
        tracing::info!("Built app");
        app
    }};
}

/// Sends the request, asserts success and decodes the JSON body.
#[allow(unused_macros)]
macro_rules! call_json {
    (&$service:ident, $request:expr) => {{
        let response = test::call_service(&$service, $request.to_request()).await;
        assert!(
            response.status().is_success(),
            "Got {} response",
            response.status()
        );
        test::read_body_json(response).await
    }};
}

const CATEGORIES: [&str; 4] = ["Food", "Rent", "Salary", "Travel"];

fn fake_value() -> Decimal {
    Decimal::new((100i64..100_000).fake::<i64>(), 2)
}

fn fake_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(
        (2019i32..2024).fake::<i32>(),
        (1u32..13).fake::<u32>(),
        (1u32..29).fake::<u32>(),
    )
    .unwrap()
}

fn fake_note() -> Option<String> {
    if rand::random() {
        Some(Word().fake())
    } else {
        None
    }
}

pub fn new_transaction(account_id: i64) -> NewTransaction {
    NewTransaction::new(
        account_id,
        CATEGORIES
            .choose(&mut rand::thread_rng())
            .unwrap()
            .to_string(),
        fake_date(),
        fake_note(),
        fake_value(),
    )
}

pub fn new_transfer(from_id: i64, to_id: i64) -> NewTransfer {
    NewTransfer::new(from_id, to_id, fake_note(), fake_value(), fake_date())
}

/// A user with a few accounts, each holding transactions, and transfers in both directions.
#[allow(dead_code)]
pub struct TestData {
    pub user: User,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub transfers: Vec<Transfer>,
}

#[allow(dead_code)]
impl TestData {
    pub async fn seed(repos: &Repos) -> TestData {
        let login = "test-user-".to_owned() + &Uuid::new_v4().to_string();
        let user = repos
            .user_repo
            .create_new_user(NewUser::new(login))
            .await
            .unwrap();

        let mut accounts = Vec::new();
        for name in ["Cash", "Card", "Savings"] {
            let account = repos
                .account_repo
                .create_new_account(NewAccount::new(user.id, name.to_owned()))
                .await
                .unwrap();
            accounts.push(account);
        }

        let mut transactions = Vec::new();
        for (account, count) in accounts.iter().zip([3, 2, 1]) {
            for _ in 0..count {
                let transaction = repos
                    .transaction_repo
                    .create_new_transaction(new_transaction(account.id))
                    .await
                    .unwrap();
                transactions.push(transaction);
            }
        }

        let mut transfers = Vec::new();
        for (from, to) in [(0, 1), (0, 2), (1, 0)] {
            let transfer = repos
                .transfer_repo
                .create_new_transfer(new_transfer(accounts[from].id, accounts[to].id))
                .await
                .unwrap();
            transfers.push(transfer);
        }

        info!(user_id = user.id, "Seeded test data");
        TestData {
            user,
            accounts,
            transactions,
            transfers,
        }
    }

    pub fn account_id(&self, index: usize) -> i64 {
        self.accounts[index].id
    }
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repos() -> Repos {
    ewallet_repo::mem_repo::create_repos()
}

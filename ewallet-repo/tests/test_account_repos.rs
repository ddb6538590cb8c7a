mod utils;

use ewallet_repo::account_repo::{AccountRepoError, AccountUpdate, NewAccount};
use ewallet_repo::transaction_repo::TransactionRepoError;
use ewallet_repo::transfer_repo::TransferRepoError;
use rstest::rstest;
use utils::generator::{NewTransactionGenerator, NewTransferGenerator};
use utils::test_user::TestUser;
use utils::RepoType;

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_create_and_get_account(#[case] repo_type: RepoType) {
    let Some(repos) = utils::build_repos(repo_type).await else {
        return;
    };
    let user = TestUser::new(&repos).await;

    let account = repos
        .account_repo
        .create_new_account(NewAccount::new(user.id, "Credit card".to_owned()))
        .await
        .unwrap();
    assert_eq!(account.user_id, user.id);
    assert_eq!(account.name, "Credit card");

    let stored_account = repos.account_repo.get_account(account.id).await.unwrap();
    assert_eq!(account, stored_account);

    user.delete().await;
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_get_accounts_for_user(#[case] repo_type: RepoType) {
    let Some(repos) = utils::build_repos(repo_type).await else {
        return;
    };
    let user = TestUser::new(&repos).await;
    let other_user = TestUser::new(&repos).await;

    let accounts = repos
        .account_repo
        .get_accounts_for_user(user.id)
        .await
        .unwrap();
    assert_eq!(accounts, user.accounts);
    assert!(
        accounts.windows(2).all(|w| w[0].id < w[1].id),
        "accounts not sorted by id"
    );

    user.delete().await;
    other_user.delete().await;
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_get_accounts_for_unknown_user(#[case] repo_type: RepoType) {
    let Some(repos) = utils::build_repos(repo_type).await else {
        return;
    };

    let accounts = repos.account_repo.get_accounts_for_user(-1).await.unwrap();
    assert!(accounts.is_empty());
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_update_account(#[case] repo_type: RepoType) {
    let Some(repos) = utils::build_repos(repo_type).await else {
        return;
    };
    let user = TestUser::new(&repos).await;

    let updated = repos
        .account_repo
        .update_account(
            user.account_id(0),
            AccountUpdate {
                name: "Wallet".to_owned(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, user.account_id(0));
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.name, "Wallet");

    let stored_account = repos
        .account_repo
        .get_account(user.account_id(0))
        .await
        .unwrap();
    assert_eq!(updated, stored_account);

    user.delete().await;
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_update_invalid_account(#[case] repo_type: RepoType) {
    let Some(repos) = utils::build_repos(repo_type).await else {
        return;
    };

    let update_result = repos
        .account_repo
        .update_account(
            -1,
            AccountUpdate {
                name: "Wallet".to_owned(),
            },
        )
        .await;
    assert!(matches!(
        update_result,
        Err(AccountRepoError::AccountNotFound(-1))
    ));
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_delete_account_cascades(#[case] repo_type: RepoType) {
    let Some(repos) = utils::build_repos(repo_type).await else {
        return;
    };
    let user = TestUser::new(&repos).await;
    let (cash, savings) = (user.account_id(0), user.account_id(1));

    let transaction = repos
        .transaction_repo
        .create_new_transaction(NewTransactionGenerator::new(cash).generate())
        .await
        .unwrap();
    let outgoing = repos
        .transfer_repo
        .create_new_transfer(NewTransferGenerator::new(cash, savings).generate())
        .await
        .unwrap();
    let incoming = repos
        .transfer_repo
        .create_new_transfer(NewTransferGenerator::new(savings, cash).generate())
        .await
        .unwrap();

    let deleted = repos.account_repo.delete_account(cash).await.unwrap();
    assert_eq!(deleted.id, cash);

    assert!(matches!(
        repos.account_repo.get_account(cash).await,
        Err(AccountRepoError::AccountNotFound(_))
    ));
    assert!(matches!(
        repos.transaction_repo.get_transaction(transaction.id).await,
        Err(TransactionRepoError::TransactionNotFound(_))
    ));
    for transfer in [outgoing, incoming] {
        assert!(matches!(
            repos.transfer_repo.get_transfer(transfer.id).await,
            Err(TransferRepoError::TransferNotFound(_))
        ));
    }
    // the other account survives
    assert!(repos.account_repo.get_account(savings).await.is_ok());

    user.delete().await;
}

#[rstest]
#[case::sqlx(RepoType::SQLx)]
#[case::mem(RepoType::Mem)]
#[actix_rt::test]
async fn test_delete_invalid_account(#[case] repo_type: RepoType) {
    let Some(repos) = utils::build_repos(repo_type).await else {
        return;
    };

    let delete_result = repos.account_repo.delete_account(-1).await;
    assert!(matches!(
        delete_result,
        Err(AccountRepoError::AccountNotFound(-1))
    ));
}

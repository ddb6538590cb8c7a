use crate::error::HandlerError;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use ewallet_repo::account_repo::AccountRepo;
use ewallet_repo::transaction_repo::{NewTransaction, TransactionRepo, TransactionUpdate};
use std::sync::Arc;
use tracing::{debug, instrument};
use tracing_actix_web::RootSpan;

/// Account id that selects the transactions of every account the user owns.
pub const ALL_ACCOUNTS: i64 = 0;

#[get("/{user_id}/{account_id}")]
#[instrument(skip(transaction_repo, root_span))]
pub async fn get_transactions(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    path: web::Path<(i64, i64)>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let (user_id, account_id) = path.into_inner();
    root_span.record("user_id", &user_id);

    // A specific account is looked up directly, whoever owns it.
    let transactions = if account_id == ALL_ACCOUNTS {
        transaction_repo.get_transactions_for_user(user_id).await?
    } else {
        transaction_repo
            .get_transactions_for_account(account_id)
            .await?
    };
    debug!(count = transactions.len(), "Fetched transactions");
    Ok(HttpResponse::Ok().json(transactions))
}

#[post("")]
#[instrument(skip(account_repo, transaction_repo, root_span))]
pub async fn create_transaction(
    account_repo: web::Data<Arc<dyn AccountRepo>>,
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    new_transaction: web::Json<NewTransaction>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let new_transaction = new_transaction.into_inner();
    let account = account_repo.get_account(new_transaction.account_id).await?;
    root_span.record("user_id", &account.user_id);

    let transaction = transaction_repo
        .create_new_transaction(new_transaction)
        .await?;
    Ok(HttpResponse::Ok().json(transaction))
}

#[put("/{transaction_id}")]
pub async fn update_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<i64>,
    update: web::Json<TransactionUpdate>,
) -> Result<impl Responder, HandlerError> {
    let transaction = transaction_repo
        .update_transaction(transaction_id.into_inner(), update.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(transaction))
}

#[delete("/{transaction_id}")]
pub async fn delete_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    transaction_id: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let transaction = transaction_repo
        .delete_transaction(transaction_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(transaction))
}

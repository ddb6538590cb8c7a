use crate::error::HandlerError;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use ewallet_repo::account_repo::{AccountRepo, AccountUpdate, NewAccount};
use std::sync::Arc;
use tracing_actix_web::RootSpan;

#[get("/user/{user_id}")]
pub async fn get_accounts_for_user(
    account_repo: web::Data<Arc<dyn AccountRepo>>,
    user_id: web::Path<i64>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let user_id = user_id.into_inner();
    root_span.record("user_id", &user_id);
    let accounts = account_repo.get_accounts_for_user(user_id).await?;
    Ok(HttpResponse::Ok().json(accounts))
}

#[get("/{account_id}")]
pub async fn get_account(
    account_repo: web::Data<Arc<dyn AccountRepo>>,
    account_id: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let account = account_repo.get_account(account_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(account))
}

#[post("")]
pub async fn create_account(
    account_repo: web::Data<Arc<dyn AccountRepo>>,
    new_account: web::Json<NewAccount>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let new_account = new_account.into_inner();
    root_span.record("user_id", &new_account.user_id);
    let account = account_repo.create_new_account(new_account).await?;
    Ok(HttpResponse::Ok().json(account))
}

#[put("/{account_id}")]
pub async fn update_account(
    account_repo: web::Data<Arc<dyn AccountRepo>>,
    account_id: web::Path<i64>,
    update: web::Json<AccountUpdate>,
) -> Result<impl Responder, HandlerError> {
    let account = account_repo
        .update_account(account_id.into_inner(), update.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(account))
}

#[delete("/{account_id}")]
pub async fn delete_account(
    account_repo: web::Data<Arc<dyn AccountRepo>>,
    account_id: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let account = account_repo.delete_account(account_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(account))
}

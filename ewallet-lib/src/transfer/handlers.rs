use crate::error::HandlerError;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use ewallet_repo::transfer_repo::{NewTransfer, TransferRepo, TransferUpdate};
use std::sync::Arc;
use tracing::instrument;

#[get("/from/{account_id}")]
pub async fn get_transfers_from(
    transfer_repo: web::Data<Arc<dyn TransferRepo>>,
    account_id: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let transfers = transfer_repo
        .get_transfers_from(account_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(transfers))
}

#[get("/to/{account_id}")]
pub async fn get_transfers_to(
    transfer_repo: web::Data<Arc<dyn TransferRepo>>,
    account_id: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let transfers = transfer_repo
        .get_transfers_to(account_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(transfers))
}

#[post("")]
#[instrument(skip(transfer_repo))]
pub async fn create_transfer(
    transfer_repo: web::Data<Arc<dyn TransferRepo>>,
    new_transfer: web::Json<NewTransfer>,
) -> Result<impl Responder, HandlerError> {
    let transfer = transfer_repo
        .create_new_transfer(new_transfer.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(transfer))
}

#[put("/{transfer_id}")]
pub async fn update_transfer(
    transfer_repo: web::Data<Arc<dyn TransferRepo>>,
    transfer_id: web::Path<i64>,
    update: web::Json<TransferUpdate>,
) -> Result<impl Responder, HandlerError> {
    let transfer = transfer_repo
        .update_transfer(transfer_id.into_inner(), update.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(transfer))
}

#[delete("/{transfer_id}")]
pub async fn delete_transfer(
    transfer_repo: web::Data<Arc<dyn TransferRepo>>,
    transfer_id: web::Path<i64>,
) -> Result<impl Responder, HandlerError> {
    let transfer = transfer_repo
        .delete_transfer(transfer_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(transfer))
}

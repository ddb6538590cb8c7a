use crate::error::HandlerError;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use ewallet_repo::user_repo::{NewUser, UserRepo};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::RootSpan;

#[get("/login/{login}")]
pub async fn get_user_by_login(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    login: web::Path<String>,
) -> Result<impl Responder, HandlerError> {
    let user = user_repo.get_user_by_login(&login.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<i64>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let user_id = user_id.into_inner();
    root_span.record("user_id", &user_id);
    let user = user_repo.get_user(user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[post("")]
pub async fn create_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    new_user: web::Json<NewUser>,
) -> Result<impl Responder, HandlerError> {
    let user = user_repo.create_new_user(new_user.into_inner()).await?;
    info!(user_id = user.id, "Created user");
    Ok(HttpResponse::Ok().json(user))
}

#[put("/{user_id}")]
pub async fn update_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<i64>,
    updated_user: web::Json<NewUser>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let user_id = user_id.into_inner();
    root_span.record("user_id", &user_id);
    let user = user_repo
        .update_user(user_id, updated_user.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::Path<i64>,
    root_span: RootSpan,
) -> Result<impl Responder, HandlerError> {
    let user_id = user_id.into_inner();
    root_span.record("user_id", &user_id);
    let user = user_repo.delete_user(user_id).await?;
    info!(user_id, "Deleted user");
    Ok(HttpResponse::Ok().json(user))
}

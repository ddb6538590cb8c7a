pub mod account;
pub mod config;
mod error;
pub mod health;
pub mod tracing;
pub mod transaction;
pub mod transfer;
pub mod user;

use actix_web::error::JsonPayloadError;
use actix_web::web::{Data, ServiceConfig};
use actix_web::{web, HttpResponse};
use ewallet_repo::Repos;

pub use error::HandlerError;

/// Registers every repository and resource on the app.
pub fn app_config_func(repos: Repos) -> impl Fn(&mut ServiceConfig) + Clone {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(repos.user_repo.clone()))
            .app_data(Data::new(repos.account_repo.clone()))
            .app_data(Data::new(repos.transaction_repo.clone()))
            .app_data(Data::new(repos.transfer_repo.clone()))
            .app_data(Data::new(repos.health_check.clone()))
            .app_data(json_config())
            .service(health::health)
            .service(user::user_service())
            .service(account::account_service())
            .service(transaction::transaction_service())
            .service(transfer::transfer_service());
    }
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        ::tracing::error!(req_path = req.path(), %err);
        match err {
            JsonPayloadError::Deserialize(deserialize_err) => {
                let error_body = serde_json::json!({
                    "error": "Unable to parse JSON payload",
                    "detail": format!("{}", deserialize_err),
                });
                actix_web::error::InternalError::from_response(
                    deserialize_err,
                    HttpResponse::BadRequest()
                        .content_type("application/json")
                        .body(error_body.to_string()),
                )
                .into()
            }
            _ => err.into(),
        }
    })
}

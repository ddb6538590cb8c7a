use actix_web::{get, web, HttpResponse, Responder};
use ewallet_repo::HealthCheck;
use std::sync::Arc;
use tracing::warn;

#[get("/health")]
pub async fn health(health_check: web::Data<Arc<dyn HealthCheck>>) -> impl Responder {
    if health_check.check().await {
        HttpResponse::Ok().body("ok")
    } else {
        warn!("Health check failed");
        HttpResponse::ServiceUnavailable().body("unavailable")
    }
}

use actix_web::{web, Scope};

mod handlers;

pub fn transfer_service() -> Scope {
    web::scope("/transfer")
        .service(handlers::get_transfers_from)
        .service(handlers::get_transfers_to)
        .service(handlers::create_transfer)
        .service(handlers::update_transfer)
        .service(handlers::delete_transfer)
}

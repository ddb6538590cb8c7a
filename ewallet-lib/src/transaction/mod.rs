use actix_web::{web, Scope};

mod handlers;

pub use handlers::ALL_ACCOUNTS;

pub fn transaction_service() -> Scope {
    web::scope("/transaction")
        .service(handlers::get_transactions)
        .service(handlers::create_transaction)
        .service(handlers::update_transaction)
        .service(handlers::delete_transaction)
}

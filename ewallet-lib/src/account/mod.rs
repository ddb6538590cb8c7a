use actix_web::{web, Scope};

mod handlers;

pub fn account_service() -> Scope {
    web::scope("/account")
        .service(handlers::get_accounts_for_user)
        .service(handlers::get_account)
        .service(handlers::create_account)
        .service(handlers::update_account)
        .service(handlers::delete_account)
}

use actix_web::{web, Scope};

mod handlers;

pub fn user_service() -> Scope {
    web::scope("/user")
        .service(handlers::get_user_by_login)
        .service(handlers::get_user)
        .service(handlers::create_user)
        .service(handlers::update_user)
        .service(handlers::delete_user)
}

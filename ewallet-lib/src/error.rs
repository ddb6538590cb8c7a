use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use ewallet_repo::account_repo::AccountRepoError;
use ewallet_repo::transaction_repo::TransactionRepoError;
use ewallet_repo::transfer_repo::TransferRepoError;
use ewallet_repo::user_repo::UserRepoError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    User(#[from] UserRepoError),
    #[error(transparent)]
    Account(#[from] AccountRepoError),
    #[error(transparent)]
    Transaction(#[from] TransactionRepoError),
    #[error(transparent)]
    Transfer(#[from] TransferRepoError),
}

impl HandlerError {
    fn is_internal(&self) -> bool {
        matches!(
            self,
            HandlerError::User(UserRepoError::Other(_))
                | HandlerError::Account(AccountRepoError::Other(_))
                | HandlerError::Transaction(TransactionRepoError::Other(_))
                | HandlerError::Transfer(TransferRepoError::Other(_))
        )
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            _ if self.is_internal() => StatusCode::INTERNAL_SERVER_ERROR,
            HandlerError::User(UserRepoError::LoginAlreadyExists(_)) => StatusCode::CONFLICT,
            _ => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let message = if self.is_internal() {
            error!(error = ?self, "Request failed");
            "Internal server error".to_owned()
        } else {
            self.to_string()
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}

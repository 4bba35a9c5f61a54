use crate::{auth::MissingRoleError, repository};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not exist")]
    TicketNotExist,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("payment signature rejected")]
    PaymentRejected,

    #[error("ticket belongs to another user")]
    TicketForbidden,

    #[error("ticket status transition rejected")]
    StatusTransitionRejected,

    #[error("auth error: {0}")]
    Auth(#[from] MissingRoleError),

    #[error("signing error: {0}")]
    Signing(#[from] qr_protocol::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::TicketNotExist => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::PaymentRejected => StatusCode::PAYMENT_REQUIRED,
            Error::TicketForbidden => StatusCode::FORBIDDEN,
            Error::StatusTransitionRejected => StatusCode::CONFLICT,
            Error::Auth(_) => StatusCode::FORBIDDEN,
            Error::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::sync::PoisonError;
use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the catalog store and the request pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// No item with the given id exists in the store.
    #[error("item not found: {0}")]
    ItemNotFound(Uuid),

    /// An item with the given id is already stored.
    #[error("item already exists: {0}")]
    DuplicateItem(Uuid),

    /// No handler was registered for the request type.
    #[error("handler not found for request: {0}")]
    HandlerNotFound(&'static str),

    /// The handler registered for the request produces another response type.
    #[error("unexpected response type for request: {0}")]
    ResponseTypeMismatch(&'static str),

    /// A shared lock was poisoned by a panicking thread.
    #[error("lock poisoned: {0}")]
    Poisoned(String),
}

impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Error::Poisoned(err.to_string())
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::ItemNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Responding with {}: {}", status, self);
        }

        // Not found carries no body, same as every other failure here.
        HttpResponse::build(status).finish()
    }
}

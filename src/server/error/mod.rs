//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by services and controllers. It wraps
//! the domain errors of each entity and implements `IntoResponse`, so handlers can use `?`
//! and get the HTTP mapping for free.
//!
//! Domain and validation failures become `400 Bad Request` with a plain-text body of the
//! form `<ErrorKind>: Not valid due to validation error: <message>`. Storage and other
//! internal failures are logged and answered with a generic `500`.

pub mod config;
pub mod course;
pub mod relation;
pub mod student;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::server::error::{
    config::ConfigError, course::CourseError, relation::RelationError, student::StudentError,
};

/// Kind reported for request validation failures.
pub const CONSTRAINT_VIOLATION: &str = "ConstraintViolationException";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Student lookup or uniqueness failure.
    ///
    /// Results in 400 Bad Request with a `StudentNotFoundException` or
    /// `StudentAlreadyExistsException` kind.
    #[error(transparent)]
    StudentErr(#[from] StudentError),

    /// Course lookup or uniqueness failure.
    ///
    /// Results in 400 Bad Request with a `CourseNotFoundException` or
    /// `CourseAlreadyExistsException` kind.
    #[error(transparent)]
    CourseErr(#[from] CourseError),

    /// Student to course relation failure.
    #[error(transparent)]
    RelationErr(#[from] RelationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O error, raised while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request input failed field-level validation.
    ///
    /// Results in 400 Bad Request with the `ConstraintViolationException` kind.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Error kind reported to clients for 400-class errors, `None` for internal failures.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Self::StudentErr(err) => Some(err.kind()),
            Self::CourseErr(err) => Some(err.kind()),
            Self::RelationErr(err) => Some(err.kind()),
            Self::Validation(_) => Some(CONSTRAINT_VIOLATION),
            _ => None,
        }
    }

    /// Returns true when the error is a unique or primary key conflict raised by the store.
    ///
    /// Services use this to report a lost check-then-insert race with the same domain
    /// error the up-front check would have produced.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            Self::DbErr(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        )
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For domain errors and validation failures, plain-text body
/// - 500 Internal Server Error - For everything else, generic body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.kind() {
            Some(kind) => {
                tracing::debug!("Rejected request with {}: {}", kind, self);
                (
                    StatusCode::BAD_REQUEST,
                    format!("{}: Not valid due to validation error: {}", kind, self),
                )
                    .into_response()
            }
            None => InternalServerError(self).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach
/// the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
            .into_response()
    }
}

//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce uniqueness of
//! business keys, check that every referenced entity exists before relating, and run every
//! multi-step write inside one database transaction. They work with domain models from
//! `server::model` and return `AppError` for every failure.

pub mod course;
pub mod course_paged;
pub mod student;
pub mod student_paged;

use sea_orm::DbErr;

use crate::server::error::AppError;

/// Converts a storage error, reporting a unique or primary key conflict as `conflict`.
///
/// The up-front existence checks make conflicts rare; this covers a concurrent writer
/// that committed between the check and the insert.
fn on_unique_violation(err: DbErr, conflict: impl Into<AppError>) -> AppError {
    let err = AppError::from(err);

    if err.is_unique_violation() {
        conflict.into()
    } else {
        err
    }
}

#[cfg(test)]
mod test;

//! HTTP request handlers for the `/api/v1` API.
//!
//! Handlers extract and validate input, convert DTOs to service parameters, call one service
//! operation and convert the resulting domain model back to a DTO. Domain errors propagate
//! as `AppError` and are rendered by its `IntoResponse` implementation.

pub mod course;
pub mod courses;
pub mod courses_paged;
pub mod student;
pub mod students;
pub mod students_paged;

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// Query carrying a student e-mail address.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailParams {
    /// Student e-mail address
    #[validate(
        email(message = "Email must be a valid e-mail address"),
        custom(function = "crate::model::not_blank", message = "Email is mandatory")
    )]
    pub email: String,
}

/// Query carrying a student e-mail as a plain lookup key; its format is not checked.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentEmailParams {
    /// Student e-mail address
    #[validate(
        length(min = 1, max = 35, message = "Email must be 1 to 35 characters"),
        custom(function = "crate::model::not_blank", message = "Email is mandatory")
    )]
    pub email: String,
}

/// Query carrying a course name.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseNameParams {
    /// Exact course name
    #[serde(rename = "courseName")]
    #[validate(
        length(min = 1, max = 35, message = "Course name must be 1 to 35 characters"),
        custom(function = "crate::model::not_blank", message = "Course name is mandatory")
    )]
    pub course_name: String,
}

/// Comma-separated course ids, e.g. `courseIds=1,2,3`.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseIdsParams {
    /// Comma-separated course ids
    #[serde(rename = "courseIds")]
    pub course_ids: String,
}

/// Comma-separated student ids, e.g. `studentIds=1,2,3`.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentIdsParams {
    /// Comma-separated student ids
    #[serde(rename = "studentIds")]
    pub student_ids: String,
}

#[cfg(test)]
mod test;

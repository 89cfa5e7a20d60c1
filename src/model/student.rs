use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::course::CourseSummaryDto;

/// Input form for a student that does not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewStudentDto {
    #[validate(
        length(min = 1, max = 20, message = "First name must be 1 to 20 characters"),
        custom(function = "crate::model::not_blank", message = "First name is mandatory")
    )]
    pub firstname: String,
    #[validate(
        length(min = 1, max = 20, message = "Last name must be 1 to 20 characters"),
        custom(function = "crate::model::not_blank", message = "Last name is mandatory")
    )]
    pub lastname: String,
    #[validate(
        email(message = "Email must be a valid e-mail address"),
        custom(function = "crate::model::not_blank", message = "Email is mandatory")
    )]
    pub email: String,
}

/// Student with its related courses in summary form.
///
/// Also accepted as request body by the id- and email-addressed student endpoints.
/// Nested courses carry only `id` and `name`; unknown nested fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct StudentDto {
    #[validate(range(min = 1, message = "Id must be positive"))]
    pub id: i32,
    #[validate(
        length(min = 1, max = 20, message = "First name must be 1 to 20 characters"),
        custom(function = "crate::model::not_blank", message = "First name is mandatory")
    )]
    pub firstname: String,
    #[validate(
        length(min = 1, max = 20, message = "Last name must be 1 to 20 characters"),
        custom(function = "crate::model::not_blank", message = "Last name is mandatory")
    )]
    pub lastname: String,
    #[validate(
        email(message = "Email must be a valid e-mail address"),
        custom(function = "crate::model::not_blank", message = "Email is mandatory")
    )]
    pub email: String,
    #[serde(default)]
    pub courses: Vec<CourseSummaryDto>,
}

/// Student without relations, used when nested inside a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentSummaryDto {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

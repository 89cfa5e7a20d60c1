use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::student::StudentSummaryDto;

/// Input form for a course that does not exist yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewCourseDto {
    #[validate(
        length(min = 1, max = 35, message = "Course name must be 1 to 35 characters"),
        custom(function = "crate::model::not_blank", message = "Course name is mandatory")
    )]
    pub name: String,
}

/// Course with its related students in summary form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CourseDto {
    #[validate(range(min = 1, message = "Id must be positive"))]
    pub id: i32,
    #[validate(
        length(min = 1, max = 35, message = "Course name must be 1 to 35 characters"),
        custom(function = "crate::model::not_blank", message = "Course name is mandatory")
    )]
    pub name: String,
    #[serde(default)]
    pub students: Vec<StudentSummaryDto>,
}

/// Course without relations, used when nested inside a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseSummaryDto {
    pub id: i32,
    pub name: String,
}

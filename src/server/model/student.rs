//! Student domain models and parameters.

use std::collections::BTreeSet;

use crate::{
    model::student::{NewStudentDto, StudentDto, StudentSummaryDto},
    server::model::course::CourseSummary,
};

/// Student without its relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl StudentSummary {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            firstname: entity.firstname,
            lastname: entity.lastname,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> StudentSummaryDto {
        StudentSummaryDto {
            id: self.id,
            firstname: self.firstname,
            lastname: self.lastname,
            email: self.email,
        }
    }
}

/// Student with the summaries of every course it is related to.
///
/// Courses are ordered by name, then id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub courses: Vec<CourseSummary>,
}

impl Student {
    /// Builds the detail view from the student row and its related course rows.
    pub fn from_entity(
        entity: entity::student::Model,
        courses: Vec<entity::course::Model>,
    ) -> Self {
        let mut courses: Vec<CourseSummary> =
            courses.into_iter().map(CourseSummary::from_entity).collect();
        courses.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Self {
            id: entity.id,
            firstname: entity.firstname,
            lastname: entity.lastname,
            email: entity.email,
            courses,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            firstname: self.firstname,
            lastname: self.lastname,
            email: self.email,
            courses: self.courses.into_iter().map(CourseSummary::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new student.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl CreateStudentParams {
    pub fn from_dto(dto: NewStudentDto) -> Self {
        Self {
            firstname: dto.firstname,
            lastname: dto.lastname,
            email: dto.email,
        }
    }
}

/// Parameters for overwriting an existing student.
///
/// `course_ids` is the complete relation set after the update; relations not listed are
/// removed.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub course_ids: BTreeSet<i32>,
}

impl UpdateStudentParams {
    pub fn from_dto(dto: StudentDto) -> Self {
        Self {
            id: dto.id,
            firstname: dto.firstname,
            lastname: dto.lastname,
            email: dto.email,
            course_ids: dto.courses.into_iter().map(|c| c.id).collect(),
        }
    }
}

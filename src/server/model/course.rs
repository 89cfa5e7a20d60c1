//! Course domain models and parameters.

use std::collections::BTreeSet;

use crate::{
    model::course::{CourseDto, CourseSummaryDto, NewCourseDto},
    server::model::student::StudentSummary,
};

/// Course without its relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub id: i32,
    pub name: String,
}

impl CourseSummary {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CourseSummaryDto {
        CourseSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Course with the summaries of every related student.
///
/// Students are ordered by firstname, lastname, then id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub students: Vec<StudentSummary>,
}

impl Course {
    pub fn from_entity(
        entity: entity::course::Model,
        students: Vec<entity::student::Model>,
    ) -> Self {
        let mut students: Vec<StudentSummary> = students
            .into_iter()
            .map(StudentSummary::from_entity)
            .collect();
        students.sort_by(|a, b| {
            a.firstname
                .cmp(&b.firstname)
                .then(a.lastname.cmp(&b.lastname))
                .then(a.id.cmp(&b.id))
        });

        Self {
            id: entity.id,
            name: entity.name,
            students,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            students: self
                .students
                .into_iter()
                .map(StudentSummary::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub name: String,
}

impl CreateCourseParams {
    pub fn from_dto(dto: NewCourseDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for overwriting an existing course, including its complete student set.
#[derive(Debug, Clone)]
pub struct UpdateCourseParams {
    pub id: i32,
    pub name: String,
    pub student_ids: BTreeSet<i32>,
}

impl UpdateCourseParams {
    pub fn from_dto(dto: CourseDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            student_ids: dto.students.into_iter().map(|s| s.id).collect(),
        }
    }
}

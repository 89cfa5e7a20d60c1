use std::collections::BTreeSet;

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{course::CourseError, relation::RelationError, student::StudentError, AppError},
    model::{
        course::{CreateCourseParams, UpdateCourseParams},
        page::PageRequest,
        student::{CreateStudentParams, UpdateStudentParams},
    },
    service::{
        course::CourseService, course_paged::CoursePagedService, student::StudentService,
        student_paged::StudentPagedService,
    },
};


fn ids(values: &[i32]) -> BTreeSet<i32> {
    values.iter().copied().collect()
}

fn new_student(firstname: &str, lastname: &str, email: &str) -> CreateStudentParams {
    CreateStudentParams {
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        email: email.to_string(),
    }
}

fn new_course(name: &str) -> CreateCourseParams {
    CreateCourseParams {
        name: name.to_string(),
    }
}

async fn join_row_count(db: &DatabaseConnection) -> Result<u64, AppError> {
    Ok(entity::prelude::StudentCourse::find().count(db).await?)
}

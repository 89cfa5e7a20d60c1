use std::collections::BTreeSet;

use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{
        course::CourseRepository, course_paged::CoursePagedRepository,
        student::StudentRepository, student_course::StudentCourseRepository,
        escape_like, student_paged::StudentPagedRepository,
    },
    model::{course::CreateCourseParams, page::PageRequest, student::CreateStudentParams},
};

mod course;
mod course_paged;
mod student;
mod student_course;
mod student_paged;

fn ids(values: &[i32]) -> BTreeSet<i32> {
    values.iter().copied().collect()
}

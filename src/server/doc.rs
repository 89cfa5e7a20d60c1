//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every `/api/v1` handler annotated with `#[utoipa::path]` and the DTO
//! schemas they exchange. The document is served as JSON at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::{
    model::{
        course::{CourseDto, CourseSummaryDto, NewCourseDto},
        student::{NewStudentDto, StudentDto, StudentSummaryDto},
    },
    server::controller::{
        course::COURSE_TAG, courses::COURSES_TAG, courses_paged::COURSES_PAGED_TAG,
        student::STUDENT_TAG, students::STUDENTS_TAG, students_paged::STUDENTS_PAGED_TAG,
    },
};

/// OpenAPI document for the student and course API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student CRM API",
        description = "Manage students, courses and the relations between them."
    ),
    paths(
        crate::server::controller::student::create,
        crate::server::controller::student::add_and_relate,
        crate::server::controller::student::find,
        crate::server::controller::student::find_by_email,
        crate::server::controller::student::update,
        crate::server::controller::student::relate_to_courses,
        crate::server::controller::student::delete,
        crate::server::controller::student::delete_by_email,
        crate::server::controller::students::get_all,
        crate::server::controller::students::find_by_course_name,
        crate::server::controller::students_paged::find_by_firstname,
        crate::server::controller::students_paged::find_by_lastname,
        crate::server::controller::students_paged::find_by_name,
        crate::server::controller::students_paged::find_by_course_name,
        crate::server::controller::students_paged::find_by_course_name_native,
        crate::server::controller::course::create,
        crate::server::controller::course::add_and_relate,
        crate::server::controller::course::find,
        crate::server::controller::course::find_by_name,
        crate::server::controller::course::update,
        crate::server::controller::course::relate_to_student,
        crate::server::controller::course::delete,
        crate::server::controller::course::delete_by_name,
        crate::server::controller::courses::get_all,
        crate::server::controller::courses::find_by_student_email,
        crate::server::controller::courses_paged::find_by_student_email,
        crate::server::controller::courses_paged::find_by_student_email_native,
    ),
    components(schemas(
        NewStudentDto,
        StudentDto,
        StudentSummaryDto,
        NewCourseDto,
        CourseDto,
        CourseSummaryDto
    )),
    tags(
        (name = STUDENT_TAG, description = "Single student operations"),
        (name = STUDENTS_TAG, description = "Student lists"),
        (name = STUDENTS_PAGED_TAG, description = "Paged student searches"),
        (name = COURSE_TAG, description = "Single course operations"),
        (name = COURSES_TAG, description = "Course lists"),
        (name = COURSES_PAGED_TAG, description = "Paged course searches")
    )
)]
pub struct ApiDoc;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{course, courses, courses_paged, student, students, students_paged},
    doc::ApiDoc,
    state::AppState,
};

/// Builds the application router: the `/api/v1` API plus the OpenAPI document.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_routes())
        .route("/api-docs/openapi.json", get(openapi))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/student/create", post(student::create))
        .route("/student/addAndRelate", post(student::add_and_relate))
        .route("/student/find", get(student::find))
        .route("/student/findByEmail", get(student::find_by_email))
        .route("/student/update", put(student::update))
        .route("/student/relateToCourses", put(student::relate_to_courses))
        .route("/student/delete", delete(student::delete))
        .route("/student/deleteByEmail", delete(student::delete_by_email))
        .route("/students/getAll", get(students::get_all))
        .route(
            "/students/findByCourseName",
            get(students::find_by_course_name),
        )
        .route(
            "/students/paged/findByFirstname",
            get(students_paged::find_by_firstname),
        )
        .route(
            "/students/paged/findByLastname",
            get(students_paged::find_by_lastname),
        )
        .route(
            "/students/paged/findByName",
            get(students_paged::find_by_name),
        )
        .route(
            "/students/paged/findByCourseName",
            get(students_paged::find_by_course_name),
        )
        .route(
            "/students/paged/findByCourseNameNative",
            get(students_paged::find_by_course_name_native),
        )
        .route("/course/create", post(course::create))
        .route("/course/addAndRelate", post(course::add_and_relate))
        .route("/course/find", get(course::find))
        .route("/course/findByName", get(course::find_by_name))
        .route("/course/update", put(course::update))
        .route("/course/relateToStudent", put(course::relate_to_student))
        .route("/course/delete", delete(course::delete))
        .route("/course/deleteByName", delete(course::delete_by_name))
        .route("/courses/getAll", get(courses::get_all))
        .route(
            "/courses/findByStudentEmail",
            get(courses::find_by_student_email),
        )
        .route(
            "/courses/paged/findByStudentEmail",
            get(courses_paged::find_by_student_email),
        )
        .route(
            "/courses/paged/findByStudentEmailNative",
            get(courses_paged::find_by_student_email_native),
        )
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

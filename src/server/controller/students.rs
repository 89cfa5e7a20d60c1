use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::student::StudentDto,
    server::{
        controller::CourseNameParams, error::AppError, extract::ValidatedQuery,
        service::student::StudentService, state::AppState,
    },
};

/// Tag for grouping student list endpoints in OpenAPI documentation
pub static STUDENTS_TAG: &str = "students";

#[utoipa::path(
    get,
    path = "/api/v1/students/getAll",
    tag = STUDENTS_TAG,
    responses(
        (status = 200, description = "All students with their courses", body = Vec<StudentDto>)
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.find_all().await?;

    Ok(Json(
        students
            .into_iter()
            .map(|s| s.into_dto())
            .collect::<Vec<StudentDto>>(),
    ))
}

/// Get the students of the course with the given name.
///
/// An unknown course yields an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/students/findByCourseName",
    tag = STUDENTS_TAG,
    params(CourseNameParams),
    responses(
        (status = 200, description = "Students of the course", body = Vec<StudentDto>),
        (status = 400, description = "ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_course_name(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CourseNameParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.find_by_course_name(&params.course_name).await?;

    Ok(Json(
        students
            .into_iter()
            .map(|s| s.into_dto())
            .collect::<Vec<StudentDto>>(),
    ))
}

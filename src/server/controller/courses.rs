use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::course::CourseDto,
    server::{
        controller::StudentEmailParams, error::AppError, extract::ValidatedQuery,
        service::course::CourseService, state::AppState,
    },
};

/// Tag for grouping course list endpoints in OpenAPI documentation
pub static COURSES_TAG: &str = "courses";

#[utoipa::path(
    get,
    path = "/api/v1/courses/getAll",
    tag = COURSES_TAG,
    responses(
        (status = 200, description = "All courses with their students", body = Vec<CourseDto>)
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let courses = service.find_all().await?;

    Ok(Json(
        courses
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<CourseDto>>(),
    ))
}

/// Get the courses of the student with the given e-mail, ordered by course name.
#[utoipa::path(
    get,
    path = "/api/v1/courses/findByStudentEmail",
    tag = COURSES_TAG,
    params(StudentEmailParams),
    responses(
        (status = 200, description = "Courses of the student", body = Vec<CourseDto>),
        (status = 400, description = "ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_student_email(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<StudentEmailParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let courses = service.find_by_student_email(&params.email).await?;

    Ok(Json(
        courses
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<CourseDto>>(),
    ))
}

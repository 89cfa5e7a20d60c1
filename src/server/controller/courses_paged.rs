use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::course::CourseDto,
    server::{
        controller::EmailParams,
        error::AppError,
        extract::ValidatedQuery,
        model::{course::Course, page::PageRequest},
        service::course_paged::CoursePagedService,
        state::AppState,
    },
};

/// Tag for grouping paged course searches in OpenAPI documentation
pub static COURSES_PAGED_TAG: &str = "courses-paged";

fn into_dtos(courses: Vec<Course>) -> Json<Vec<CourseDto>> {
    Json(courses.into_iter().map(Course::into_dto).collect())
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/paged/findByStudentEmail",
    tag = COURSES_PAGED_TAG,
    params(EmailParams, PageRequest),
    responses(
        (status = 200, description = "Page of the student's courses ordered by name", body = Vec<CourseDto>),
        (status = 400, description = "ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_student_email(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<EmailParams>,
    ValidatedQuery(page): ValidatedQuery<PageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = CoursePagedService::new(&state.db);

    let courses = service.find_by_student_email(&params.email, page).await?;

    Ok(into_dtos(courses))
}

/// Same page as `findByStudentEmail`, served by hand-written SQL.
#[utoipa::path(
    get,
    path = "/api/v1/courses/paged/findByStudentEmailNative",
    tag = COURSES_PAGED_TAG,
    params(EmailParams, PageRequest),
    responses(
        (status = 200, description = "Page of the student's courses ordered by name", body = Vec<CourseDto>),
        (status = 400, description = "ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_student_email_native(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<EmailParams>,
    ValidatedQuery(page): ValidatedQuery<PageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = CoursePagedService::new(&state.db);

    let courses = service
        .find_by_student_email_native(&params.email, page)
        .await?;

    Ok(into_dtos(courses))
}

use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::student::StudentDto,
    server::{
        controller::CourseNameParams,
        error::AppError,
        extract::ValidatedQuery,
        model::{page::PageRequest, student::Student},
        service::student_paged::StudentPagedService,
        state::AppState,
    },
};

/// Tag for grouping paged student searches in OpenAPI documentation
pub static STUDENTS_PAGED_TAG: &str = "students-paged";

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FirstnameParams {
    /// Substring of the firstname
    #[validate(
        length(min = 1, max = 20, message = "First name must be 1 to 20 characters"),
        custom(function = "crate::model::not_blank", message = "First name is mandatory")
    )]
    pub firstname: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LastnameParams {
    /// Substring of the lastname
    #[validate(
        length(min = 1, max = 20, message = "Last name must be 1 to 20 characters"),
        custom(function = "crate::model::not_blank", message = "Last name is mandatory")
    )]
    pub lastname: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameParams {
    /// Substring of the firstname
    #[validate(
        length(min = 1, max = 20, message = "First name must be 1 to 20 characters"),
        custom(function = "crate::model::not_blank", message = "First name is mandatory")
    )]
    pub firstname: String,
    /// Substring of the lastname
    #[validate(
        length(min = 1, max = 20, message = "Last name must be 1 to 20 characters"),
        custom(function = "crate::model::not_blank", message = "Last name is mandatory")
    )]
    pub lastname: String,
}

fn into_dtos(students: Vec<Student>) -> Json<Vec<StudentDto>> {
    Json(students.into_iter().map(Student::into_dto).collect())
}

#[utoipa::path(
    get,
    path = "/api/v1/students/paged/findByFirstname",
    tag = STUDENTS_PAGED_TAG,
    params(FirstnameParams, PageRequest),
    responses(
        (status = 200, description = "Page of students ordered by firstname, lastname", body = Vec<StudentDto>),
        (status = 400, description = "ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_firstname(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<FirstnameParams>,
    ValidatedQuery(page): ValidatedQuery<PageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentPagedService::new(&state.db);

    let students = service
        .find_by_firstname_containing(&params.firstname, page)
        .await?;

    Ok(into_dtos(students))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/paged/findByLastname",
    tag = STUDENTS_PAGED_TAG,
    params(LastnameParams, PageRequest),
    responses(
        (status = 200, description = "Page of students ordered by lastname, firstname", body = Vec<StudentDto>),
        (status = 400, description = "ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_lastname(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<LastnameParams>,
    ValidatedQuery(page): ValidatedQuery<PageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentPagedService::new(&state.db);

    let students = service
        .find_by_lastname_containing(&params.lastname, page)
        .await?;

    Ok(into_dtos(students))
}

/// Students whose firstname or lastname contains the respective fragment.
#[utoipa::path(
    get,
    path = "/api/v1/students/paged/findByName",
    tag = STUDENTS_PAGED_TAG,
    params(NameParams, PageRequest),
    responses(
        (status = 200, description = "Page of students ordered by firstname, lastname", body = Vec<StudentDto>),
        (status = 400, description = "ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_name(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<NameParams>,
    ValidatedQuery(page): ValidatedQuery<PageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentPagedService::new(&state.db);

    let students = service
        .find_by_firstname_or_lastname_containing(&params.firstname, &params.lastname, page)
        .await?;

    Ok(into_dtos(students))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/paged/findByCourseName",
    tag = STUDENTS_PAGED_TAG,
    params(CourseNameParams, PageRequest),
    responses(
        (status = 200, description = "Page of the course's students", body = Vec<StudentDto>),
        (status = 400, description = "ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_course_name(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CourseNameParams>,
    ValidatedQuery(page): ValidatedQuery<PageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentPagedService::new(&state.db);

    let students = service
        .find_by_course_name(&params.course_name, page)
        .await?;

    Ok(into_dtos(students))
}

/// Same page as `findByCourseName`, served by hand-written SQL.
#[utoipa::path(
    get,
    path = "/api/v1/students/paged/findByCourseNameNative",
    tag = STUDENTS_PAGED_TAG,
    params(CourseNameParams, PageRequest),
    responses(
        (status = 200, description = "Page of the course's students", body = Vec<StudentDto>),
        (status = 400, description = "ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_course_name_native(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CourseNameParams>,
    ValidatedQuery(page): ValidatedQuery<PageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentPagedService::new(&state.db);

    let students = service
        .find_by_course_name_native(&params.course_name, page)
        .await?;

    Ok(into_dtos(students))
}

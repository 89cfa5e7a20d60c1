use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::course::{CourseDto, NewCourseDto},
    server::{
        controller::StudentIdsParams,
        error::AppError,
        extract::{ValidatedJson, ValidatedQuery},
        model::course::{CreateCourseParams, UpdateCourseParams},
        service::course::CourseService,
        state::AppState,
        util::parse::parse_id_set,
    },
};

/// Tag for grouping single-course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameParams {
    /// Exact course name
    #[validate(
        length(min = 1, max = 35, message = "Course name must be 1 to 35 characters"),
        custom(function = "crate::model::not_blank", message = "Course name is mandatory")
    )]
    pub name: String,
}

/// Create a new course.
///
/// # Returns
/// - `200 OK` - The created course with an empty student list
/// - `400 Bad Request` - Invalid input or name already in use
#[utoipa::path(
    post,
    path = "/api/v1/course/create",
    tag = COURSE_TAG,
    request_body = NewCourseDto,
    responses(
        (status = 200, description = "Created course", body = CourseDto),
        (status = 400, description = "CourseAlreadyExistsException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service.create(CreateCourseParams::from_dto(payload)).await?;

    Ok(Json(course.into_dto()))
}

/// Create a new course and relate existing students to it.
#[utoipa::path(
    post,
    path = "/api/v1/course/addAndRelate",
    tag = COURSE_TAG,
    params(StudentIdsParams),
    request_body = NewCourseDto,
    responses(
        (status = 200, description = "Created and related course", body = CourseDto),
        (status = 400, description = "CourseAlreadyExistsException, StudentNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn add_and_relate(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<StudentIdsParams>,
    ValidatedJson(payload): ValidatedJson<NewCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let student_ids = parse_id_set("studentIds", &params.student_ids)?;
    let service = CourseService::new(&state.db);

    let course = service
        .create_and_relate(CreateCourseParams::from_dto(payload), &student_ids)
        .await?;

    Ok(Json(course.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/v1/course/find",
    tag = COURSE_TAG,
    request_body = CourseDto,
    responses(
        (status = 200, description = "Found course", body = CourseDto),
        (status = 400, description = "CourseNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service.find_by_id(payload.id).await?;

    Ok(Json(course.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/v1/course/findByName",
    tag = COURSE_TAG,
    params(NameParams),
    responses(
        (status = 200, description = "Found course", body = CourseDto),
        (status = 400, description = "CourseNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_name(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<NameParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service.find_by_name(&params.name).await?;

    Ok(Json(course.into_dto()))
}

/// Update a course by id, replacing its name and complete student list.
#[utoipa::path(
    put,
    path = "/api/v1/course/update",
    tag = COURSE_TAG,
    request_body = CourseDto,
    responses(
        (status = 200, description = "Updated course", body = CourseDto),
        (status = 400, description = "CourseNotFoundException, CourseAlreadyExistsException, StudentNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service
        .update(UpdateCourseParams::from_dto(payload))
        .await?;

    Ok(Json(course.into_dto()))
}

#[utoipa::path(
    put,
    path = "/api/v1/course/relateToStudent",
    tag = COURSE_TAG,
    params(StudentIdsParams),
    request_body = CourseDto,
    responses(
        (status = 200, description = "Course with its updated student list", body = CourseDto),
        (status = 400, description = "CourseNotFoundException, StudentNotFoundException, EntityAlreadyRelatedException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn relate_to_student(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<StudentIdsParams>,
    ValidatedJson(payload): ValidatedJson<CourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let student_ids = parse_id_set("studentIds", &params.student_ids)?;
    let service = CourseService::new(&state.db);

    let course = service.relate(payload.id, &student_ids).await?;

    Ok(Json(course.into_dto()))
}

/// Delete the course named in the body, unlinking every related student.
#[utoipa::path(
    delete,
    path = "/api/v1/course/delete",
    tag = COURSE_TAG,
    request_body = CourseDto,
    responses(
        (status = 200, description = "Course deleted"),
        (status = 400, description = "CourseNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    service.delete(&payload.name).await?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/v1/course/deleteByName",
    tag = COURSE_TAG,
    request_body = CourseDto,
    responses(
        (status = 200, description = "Course deleted"),
        (status = 400, description = "CourseNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_by_name(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    service.delete_by_name(&payload.name).await?;

    Ok(StatusCode::OK)
}

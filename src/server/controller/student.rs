use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::student::{NewStudentDto, StudentDto},
    server::{
        controller::{CourseIdsParams, EmailParams},
        error::AppError,
        extract::{ValidatedJson, ValidatedQuery},
        model::student::{CreateStudentParams, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
        util::parse::parse_id_set,
    },
};

/// Tag for grouping single-student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Create a new student.
///
/// # Returns
/// - `200 OK` - The created student with an empty course list
/// - `400 Bad Request` - Invalid input or e-mail already in use
#[utoipa::path(
    post,
    path = "/api/v1/student/create",
    tag = STUDENT_TAG,
    request_body = NewStudentDto,
    responses(
        (status = 200, description = "Created student", body = StudentDto),
        (status = 400, description = "StudentAlreadyExistsException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .create(CreateStudentParams::from_dto(payload))
        .await?;

    Ok(Json(student.into_dto()))
}

/// Create a new student and relate it to existing courses.
///
/// Nothing is stored when a course does not exist.
#[utoipa::path(
    post,
    path = "/api/v1/student/addAndRelate",
    tag = STUDENT_TAG,
    params(CourseIdsParams),
    request_body = NewStudentDto,
    responses(
        (status = 200, description = "Created and related student", body = StudentDto),
        (status = 400, description = "StudentAlreadyExistsException, CourseNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn add_and_relate(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CourseIdsParams>,
    ValidatedJson(payload): ValidatedJson<NewStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let course_ids = parse_id_set("courseIds", &params.course_ids)?;
    let service = StudentService::new(&state.db);

    let student = service
        .create_and_relate(CreateStudentParams::from_dto(payload), &course_ids)
        .await?;

    Ok(Json(student.into_dto()))
}

/// Find a student by the id of the student in the request body.
#[utoipa::path(
    get,
    path = "/api/v1/student/find",
    tag = STUDENT_TAG,
    request_body = StudentDto,
    responses(
        (status = 200, description = "Found student", body = StudentDto),
        (status = 400, description = "StudentNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.find_by_id(payload.id).await?;

    Ok(Json(student.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/v1/student/findByEmail",
    tag = STUDENT_TAG,
    params(EmailParams),
    responses(
        (status = 200, description = "Found student", body = StudentDto),
        (status = 400, description = "StudentNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn find_by_email(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<EmailParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.find_by_email(&params.email).await?;

    Ok(Json(student.into_dto()))
}

/// Update a student by id.
///
/// Overwrites names and e-mail, and makes the body's course list the complete relation set.
#[utoipa::path(
    put,
    path = "/api/v1/student/update",
    tag = STUDENT_TAG,
    request_body = StudentDto,
    responses(
        (status = 200, description = "Updated student", body = StudentDto),
        (status = 400, description = "StudentNotFoundException, StudentAlreadyExistsException, CourseNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .update(UpdateStudentParams::from_dto(payload))
        .await?;

    Ok(Json(student.into_dto()))
}

/// Relate the student in the body to additional courses.
#[utoipa::path(
    put,
    path = "/api/v1/student/relateToCourses",
    tag = STUDENT_TAG,
    params(CourseIdsParams),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Student with its updated course list", body = StudentDto),
        (status = 400, description = "StudentNotFoundException, CourseNotFoundException, EntityAlreadyRelatedException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn relate_to_courses(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CourseIdsParams>,
    ValidatedJson(payload): ValidatedJson<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let course_ids = parse_id_set("courseIds", &params.course_ids)?;
    let service = StudentService::new(&state.db);

    let student = service.relate(payload.id, &course_ids).await?;

    Ok(Json(student.into_dto()))
}

/// Delete the student with the e-mail of the body, unlinking it from every course.
#[utoipa::path(
    delete,
    path = "/api/v1/student/delete",
    tag = STUDENT_TAG,
    request_body = StudentDto,
    responses(
        (status = 200, description = "Student deleted"),
        (status = 400, description = "StudentNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    service.delete(&payload.email).await?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/v1/student/deleteByEmail",
    tag = STUDENT_TAG,
    request_body = StudentDto,
    responses(
        (status = 200, description = "Student deleted"),
        (status = 400, description = "StudentNotFoundException or ConstraintViolationException", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_by_email(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    service.delete_by_email(&payload.email).await?;

    Ok(StatusCode::OK)
}

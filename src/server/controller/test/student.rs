use super::*;

#[tokio::test]
async fn creates_student() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/v1/student/create",
        Some(json!({ "firstname": "John", "lastname": "Wick", "email": "john.wick@pacifists.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["email"], "john.wick@pacifists.com");
    assert_eq!(body["courses"], json!([]));
}

/// Expected: 400 with the kind-prefixed plain-text message
#[tokio::test]
async fn duplicate_email_is_bad_request() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await.unwrap();
    let app = app(db);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/student/create",
        Some(json!({ "firstname": "John", "lastname": "Wick", "email": "john.wick@pacifists.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        "StudentAlreadyExistsException: Not valid due to validation error: \
         Student already exists with e-mail john.wick@pacifists.com"
    );
}

#[tokio::test]
async fn invalid_fields_are_constraint_violations() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/student/create",
        Some(json!({ "firstname": "  ", "lastname": "Wick", "email": "john.wick" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("ConstraintViolationException: Not valid due to validation error: "));
    assert!(body.contains("email"));
    assert!(body.contains("firstname"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/student/create",
        Some(json!({ "firstname": "John" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("ConstraintViolationException"));
}

#[tokio::test]
async fn adds_and_relates_student() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let roster = factory::create_roster(db).await.unwrap();
    let app = app(db);

    let uri = format!(
        "/api/v1/student/addAndRelate?courseIds={},{}",
        roster.courses["Veganism"].id, roster.courses["Behaviour"].id
    );
    let (status, body) = send_json(
        &app,
        Method::POST,
        &uri,
        Some(json!({ "firstname": "Bruce", "lastname": "Lee", "email": "bruce.lee@pacifists.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["courses"][0]["name"], "Behaviour");
    assert_eq!(body["courses"][1]["name"], "Veganism");
}

#[tokio::test]
async fn empty_id_list_is_rejected() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/student/addAndRelate?courseIds=",
        Some(json!({ "firstname": "Bruce", "lastname": "Lee", "email": "bruce.lee@pacifists.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("ConstraintViolationException"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/student/addAndRelate",
        Some(json!({ "firstname": "Bruce", "lastname": "Lee", "email": "bruce.lee@pacifists.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn finds_student_by_body_id_and_by_email() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let roster = factory::create_roster(db).await.unwrap();
    let app = app(db);

    let rambo = &roster.students["john.rambo@pacifists.com"];
    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/v1/student/find",
        Some(json!({
            "id": rambo.id,
            "firstname": "John",
            "lastname": "Rambo",
            "email": "john.rambo@pacifists.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["courses"].as_array().unwrap().len(), 4);

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/v1/student/findByEmail?email=mad.max@pacifists.com",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lastname"], "Max");

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/student/findByEmail?email=nobody@pacifists.com",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("StudentNotFoundException: "));
}

#[tokio::test]
async fn relate_to_already_related_course_is_rejected() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let roster = factory::create_roster(db).await.unwrap();
    let app = app(db);

    let wick = &roster.students["john.wick@pacifists.com"];
    let uri = format!(
        "/api/v1/student/relateToCourses?courseIds={}",
        roster.courses["Pacifism"].id
    );
    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({
            "id": wick.id,
            "firstname": "John",
            "lastname": "Wick",
            "email": "john.wick@pacifists.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("EntityAlreadyRelatedException: "));
}

#[tokio::test]
async fn updates_student() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let roster = factory::create_roster(db).await.unwrap();
    let app = app(db);

    let wayne = &roster.students["john.wayne@pacifists.com"];
    let tolerance = &roster.courses["Tolerance"];
    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/v1/student/update",
        Some(json!({
            "id": wayne.id,
            "firstname": "Bruce",
            "lastname": "Wayne",
            "email": "bruce.wayne@pacifists.com",
            "courses": [{ "id": tolerance.id, "name": "Tolerance" }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstname"], "Bruce");
    assert_eq!(body["courses"][0]["name"], "Tolerance");
}

/// Expected: 200 with an empty body, then the student is gone from getAll
#[tokio::test]
async fn deletes_student_by_email() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let roster = factory::create_roster(db).await.unwrap();
    let app = app(db);

    let max = &roster.students["mad.max@pacifists.com"];
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/api/v1/student/deleteByEmail",
        Some(json!({
            "id": max.id,
            "firstname": "Mad",
            "lastname": "Max",
            "email": "mad.max@pacifists.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, students) = send_json(&app, Method::GET, "/api/v1/students/getAll", None).await;
    assert_eq!(students.as_array().unwrap().len(), 6);

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/api/v1/student/delete",
        Some(json!({
            "id": max.id,
            "firstname": "Mad",
            "lastname": "Max",
            "email": "mad.max@pacifists.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("StudentNotFoundException: "));
}

#[tokio::test]
async fn lists_students_of_course() {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await.unwrap();
    let app = app(db);

    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/v1/students/findByCourseName?courseName=Veganism",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let lastnames: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["lastname"].as_str().unwrap())
        .collect();
    assert_eq!(lastnames, vec!["Rambo", "Wick", "Max"]);
}

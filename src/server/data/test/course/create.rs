use super::*;

#[tokio::test]
async fn creates_and_finds_course_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParams {
            name: "Pacifism".to_string(),
        })
        .await?;

    assert_eq!(repo.find_by_name("Pacifism").await?, Some(course.clone()));
    assert_eq!(repo.find_by_id(course.id).await?, Some(course));
    assert!(repo.find_by_name("pacifism ").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_name_at_storage_layer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::create_course_named(db, "Pacifism").await?;

    let duplicate = CourseRepository::new(db)
        .create(CreateCourseParams {
            name: "Pacifism".to_string(),
        })
        .await;

    assert!(duplicate.is_err());

    Ok(())
}

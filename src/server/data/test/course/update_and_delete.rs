use super::*;

#[tokio::test]
async fn updates_and_deletes_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let repo = CourseRepository::new(db);

    let renamed = repo.update(course.id, "Tolerance".to_string()).await?;
    assert_eq!(renamed.name, "Tolerance");

    assert_eq!(repo.delete(course.id).await?, 1);
    assert!(repo.find_all().await?.is_empty());

    Ok(())
}

use super::*;

#[tokio::test]
async fn builder_and_native_student_email_pages_are_equal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await?;

    let repo = CoursePagedRepository::new(db);

    for page in 0..3 {
        let request = PageRequest::new(page, 2);
        let builder = repo
            .find_by_student_email("john.rambo@pacifists.com", request)
            .await?;
        let native = repo
            .find_by_student_email_native("john.rambo@pacifists.com", request)
            .await?;

        assert_eq!(builder, native);
    }

    let second_page = repo
        .find_by_student_email("john.rambo@pacifists.com", PageRequest::new(1, 2))
        .await?;
    let names: Vec<&str> = second_page.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Tolerance", "Veganism"]);

    Ok(())
}

#[tokio::test]
async fn unknown_student_has_no_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await?;

    let courses = CoursePagedRepository::new(db)
        .find_by_student_email_native("nobody@pacifists.com", PageRequest::new(0, 10))
        .await?;

    assert!(courses.is_empty());

    Ok(())
}

#[tokio::test]
async fn extreme_pages_never_panic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await?;

    let repo = CoursePagedRepository::new(db);
    let email = "john.rambo@pacifists.com";

    let request = PageRequest::new(0, i32::MAX as u32);
    let builder = repo.find_by_student_email(email, request).await?;
    assert_eq!(builder.len(), 4);
    assert_eq!(builder, repo.find_by_student_email_native(email, request).await?);

    let request = PageRequest::new(i32::MAX as u32, i32::MAX as u32);
    assert!(repo.find_by_student_email(email, request).await?.is_empty());
    assert!(repo.find_by_student_email_native(email, request).await?.is_empty());

    let request = PageRequest::new(u32::MAX, u32::MAX);
    assert!(repo.find_by_student_email(email, request).await.is_err());
    assert!(repo.find_by_student_email_native(email, request).await.is_err());

    Ok(())
}

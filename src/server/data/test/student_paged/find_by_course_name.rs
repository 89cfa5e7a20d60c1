use super::*;

/// Tests that the query-builder and hand-written SQL forms return identical pages.
///
/// Expected: pages 0 and 1 of size 10 are equal, disjoint and full
#[tokio::test]
async fn builder_and_native_course_pages_are_equal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_computer_science(db).await?;

    let repo = StudentPagedRepository::new(db);

    let mut seen = BTreeSet::new();
    for page in 0..2 {
        let request = PageRequest::new(page, 10);
        let builder = repo
            .find_by_course_name("Computer Science", request)
            .await?;
        let native = repo
            .find_by_course_name_native("Computer Science", request)
            .await?;

        assert_eq!(builder.len(), 10);
        assert_eq!(builder, native);

        for student in builder {
            assert!(seen.insert(student.id));
        }
    }

    Ok(())
}

#[tokio::test]
async fn page_past_the_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_computer_science(db).await?;

    let repo = StudentPagedRepository::new(db);
    let request = PageRequest::new(4, 10);

    assert!(repo
        .find_by_course_name("Computer Science", request)
        .await?
        .is_empty());
    assert!(repo
        .find_by_course_name_native("Computer Science", request)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that the largest accepted page values give equal results from both forms.
///
/// Expected: a far page is empty, a huge size returns every student
#[tokio::test]
async fn largest_pages_agree_between_forms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_computer_science(db).await?;

    let repo = StudentPagedRepository::new(db);
    let largest = i32::MAX as u32;

    for (request, expected) in [
        (PageRequest::new(largest, 10), 0),
        (PageRequest::new(0, largest), 40),
        (PageRequest::new(largest, largest), 0),
    ] {
        let builder = repo
            .find_by_course_name("Computer Science", request)
            .await?;
        let native = repo
            .find_by_course_name_native("Computer Science", request)
            .await?;

        assert_eq!(builder.len(), expected, "{:?}", request);
        assert_eq!(builder, native, "{:?}", request);
    }

    Ok(())
}

/// Expected: an offset past `i64` and a zero size are errors from both forms
#[tokio::test]
async fn unrepresentable_pages_are_errors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed_computer_science(db).await?;

    let repo = StudentPagedRepository::new(db);

    for request in [PageRequest::new(u32::MAX, u32::MAX), PageRequest::new(0, 0)] {
        assert!(repo
            .find_by_course_name("Computer Science", request)
            .await
            .is_err());
        assert!(repo
            .find_by_course_name_native("Computer Science", request)
            .await
            .is_err());
        assert!(repo.find_by_firstname_containing("John", request).await.is_err());
    }

    Ok(())
}

use super::*;

/// Tests that relating inserts one join row per course and that an existing pair is
/// reported by `find_existing_for_student`.
#[tokio::test]
async fn relates_courses_and_finds_existing_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let first = factory::create_course(db).await?;
    let second = factory::create_course(db).await?;
    let third = factory::create_course(db).await?;

    let repo = StudentCourseRepository::new(db);
    repo.relate_courses(student.id, &ids(&[first.id, second.id]))
        .await?;

    assert_eq!(entity::prelude::StudentCourse::find().count(db).await?, 2);

    let existing = repo
        .find_existing_for_student(student.id, &ids(&[second.id, third.id]))
        .await?;
    assert_eq!(existing.len(), 1);
    assert_eq!(existing[0].course_id, second.id);

    let existing = repo
        .find_existing_for_course(third.id, &ids(&[student.id]))
        .await?;
    assert!(existing.is_empty());

    Ok(())
}

/// Tests that the composite primary key rejects a duplicate pair.
#[tokio::test]
async fn duplicate_pair_is_rejected_by_primary_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let course = factory::create_course(db).await?;

    let repo = StudentCourseRepository::new(db);
    repo.insert_pairs(&[(student.id, course.id)]).await?;
    let duplicate = repo.insert_pairs(&[(student.id, course.id)]).await;

    assert!(duplicate.is_err());
    assert_eq!(entity::prelude::StudentCourse::find().count(db).await?, 1);

    Ok(())
}

use super::*;

/// Tests the join query behind `findByCourseName` against the shared roster.
///
/// Expected: Pacifism has Rambo and Wick, ordered by firstname then lastname
#[tokio::test]
async fn finds_students_by_course_name_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await?;

    let students = StudentRepository::new(db)
        .find_by_course_name("Pacifism")
        .await?;

    let names: Vec<&str> = students.iter().map(|s| s.lastname.as_str()).collect();
    assert_eq!(names, vec!["Rambo", "Wick"]);

    assert!(StudentRepository::new(db)
        .find_by_course_name("Knitting")
        .await?
        .is_empty());

    Ok(())
}

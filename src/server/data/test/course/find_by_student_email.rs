use super::*;

/// Expected: all four roster courses for Rambo, ordered by name
#[tokio::test]
async fn finds_courses_by_student_email_in_name_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await?;

    let repo = CourseRepository::new(db);
    let courses = repo
        .find_by_student_email("john.rambo@pacifists.com")
        .await?;

    let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Behaviour", "Pacifism", "Tolerance", "Veganism"]);

    assert!(repo
        .find_by_student_email("john.wayne@pacifists.com")
        .await?
        .is_empty());

    Ok(())
}

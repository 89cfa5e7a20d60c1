use super::*;

/// Tests batch hydration, including a student and a course without relations.
#[tokio::test]
async fn hydrates_relations_for_many_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let roster = factory::create_roster(db).await?;

    let rambo = roster.students["john.rambo@pacifists.com"].id;
    let wayne = roster.students["john.wayne@pacifists.com"].id;

    let repo = StudentCourseRepository::new(db);
    let courses = repo.courses_by_student(&[rambo, wayne]).await?;

    assert_eq!(courses[&rambo].len(), 4);
    assert!(courses[&wayne].is_empty());

    let pacifism = roster.courses["Pacifism"].id;
    let behaviour = roster.courses["Behaviour"].id;
    let students = repo.students_by_course(&[pacifism, behaviour]).await?;

    assert_eq!(students[&pacifism].len(), 2);
    assert_eq!(students[&behaviour].len(), 2);

    Ok(())
}

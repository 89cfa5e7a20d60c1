use super::*;

#[tokio::test]
async fn unlinks_every_row_of_one_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let roster = factory::create_roster(db).await?;

    let repo = StudentCourseRepository::new(db);

    let veganism = &roster.courses["Veganism"];
    assert_eq!(repo.unlink_course(veganism.id).await?, 3);

    let rambo = &roster.students["john.rambo@pacifists.com"];
    assert_eq!(repo.unlink_student(rambo.id).await?, 3);

    // Wick -> Pacifism and Harry -> Behaviour, Tolerance remain
    assert_eq!(entity::prelude::StudentCourse::find().count(db).await?, 3);

    Ok(())
}

use super::*;

#[tokio::test]
async fn replace_for_student_swaps_relation_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let roster = factory::create_roster(db).await?;

    let wick = &roster.students["john.wick@pacifists.com"];
    let tolerance = roster.courses["Tolerance"].id;

    let repo = StudentCourseRepository::new(db);
    repo.replace_for_student(wick.id, &ids(&[tolerance])).await?;

    let courses = repo.courses_by_student(&[wick.id]).await?;
    let names: Vec<&str> = courses[&wick.id].iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Tolerance"]);

    Ok(())
}

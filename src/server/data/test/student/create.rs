use super::*;

/// Tests that a created student gets a generated id and keeps its fields.
#[tokio::test]
async fn creates_student_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            firstname: "John".to_string(),
            lastname: "Wick".to_string(),
            email: "john.wick@pacifists.com".to_string(),
        })
        .await?;

    assert!(student.id > 0);
    assert_eq!(student.firstname, "John");

    let stored = repo.find_by_email("john.wick@pacifists.com").await?;
    assert_eq!(stored, Some(student));

    Ok(())
}

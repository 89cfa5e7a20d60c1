use super::*;

#[tokio::test]
async fn deletes_student_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let repo = StudentRepository::new(db);

    assert_eq!(repo.delete(student.id).await?, 1);
    assert_eq!(repo.delete(student.id).await?, 0);
    assert!(repo.find_by_id(student.id).await?.is_none());

    Ok(())
}

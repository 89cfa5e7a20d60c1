use super::*;

#[tokio::test]
async fn updates_scalar_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let updated = StudentRepository::new(db)
        .update(
            student.id,
            "Mad".to_string(),
            "Max".to_string(),
            "mad.max@pacifists.com".to_string(),
        )
        .await?;

    assert_eq!(updated.id, student.id);
    assert_eq!(updated.email, "mad.max@pacifists.com");

    Ok(())
}

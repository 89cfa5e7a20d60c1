use super::*;

#[tokio::test]
async fn find_by_ids_skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;

    let found = StudentRepository::new(db)
        .find_by_ids(&ids(&[first.id, second.id, 9999]))
        .await?;

    assert_eq!(found.len(), 2);
    assert!(StudentRepository::new(db)
        .find_by_ids(&BTreeSet::new())
        .await?
        .is_empty());

    Ok(())
}

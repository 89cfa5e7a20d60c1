use super::*;

#[tokio::test]
async fn lastname_search_orders_by_lastname_then_firstname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await?;

    let repo = StudentPagedRepository::new(db);

    let students = repo
        .find_by_lastname_containing("Wa", PageRequest::new(0, 10))
        .await?;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].lastname, "Wayne");

    let students = repo
        .find_by_lastname_containing("r", PageRequest::new(0, 2))
        .await?;
    let lastnames: Vec<&str> = students.iter().map(|s| s.lastname.as_str()).collect();
    assert_eq!(lastnames, vec!["Harry", "Potter"]);

    Ok(())
}

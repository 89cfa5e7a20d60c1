use super::*;

/// Expected: John Doe, John Rambo, John Wayne, John Wick, in that order
#[tokio::test]
async fn firstname_search_orders_by_firstname_then_lastname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await?;

    let students = StudentPagedRepository::new(db)
        .find_by_firstname_containing("John", PageRequest::new(0, 10))
        .await?;

    let lastnames: Vec<&str> = students.iter().map(|s| s.lastname.as_str()).collect();
    assert_eq!(lastnames, vec!["Doe", "Rambo", "Wayne", "Wick"]);

    Ok(())
}

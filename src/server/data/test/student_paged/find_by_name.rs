use super::*;

/// Expected: Dirty Harry (lastname match) and Harry Potter (firstname match)
#[tokio::test]
async fn name_search_matches_either_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await?;

    let students = StudentPagedRepository::new(db)
        .find_by_firstname_or_lastname_containing("Harry", "Harry", PageRequest::new(0, 10))
        .await?;

    let emails: Vec<&str> = students.iter().map(|s| s.email.as_str()).collect();
    assert_eq!(
        emails,
        vec!["dirty.harry@pacifists.com", "harry.potter@pacifists.com"]
    );

    Ok(())
}

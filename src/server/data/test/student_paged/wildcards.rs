use super::*;

#[test]
fn like_pattern_escapes_wildcards() {
    assert_eq!(escape_like("John"), "%John%");
    assert_eq!(escape_like("a_b%c\\"), "%a\\_b\\%c\\\\%");
}

/// Expected: `_` and `%` only match names that contain them
#[tokio::test]
async fn wildcard_characters_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_crm_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_roster(db).await?;

    let repo = StudentPagedRepository::new(db);
    let page = PageRequest::new(0, 10);

    assert!(repo.find_by_firstname_containing("_", page).await?.is_empty());
    assert!(repo.find_by_lastname_containing("%", page).await?.is_empty());
    assert!(repo
        .find_by_firstname_or_lastname_containing("_", "%", page)
        .await?
        .is_empty());
    assert!(repo.find_by_firstname_containing("J%n", page).await?.is_empty());

    factory::student::create_student_with(db, "Jo_hn", "Hundred%", "jo_hn@pacifists.com")
        .await?;

    let students = repo.find_by_firstname_containing("o_h", page).await?;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].email, "jo_hn@pacifists.com");

    assert_eq!(repo.find_by_lastname_containing("d%", page).await?.len(), 1);
    assert_eq!(repo.find_by_firstname_containing("_", page).await?.len(), 1);

    Ok(())
}

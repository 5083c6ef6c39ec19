use super::*;

/// Tests that the most recent visible change wins.
///
/// Two users once held the name "old name"; the later change belongs to the second.
///
/// Expected: Ok(Some(change)) for the second user
#[tokio::test]
async fn picks_latest_visible_change() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let now = Utc::now();

    factory::create_username_change(db, &first, "old name", "paid", now - Duration::days(30))
        .await?;
    factory::create_username_change(db, &second, "old name", "support", now).await?;

    let repo = UsernameChangeRepository::new(db);
    let change = repo.latest_visible_from("old name").await?;

    assert_eq!(change.map(|c| c.user_id), Some(second.id));

    Ok(())
}

/// Tests that reverted and inactive-release changes are ignored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_hidden_change_types() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::create_username_change(db, &user, "reverted", "revert", Utc::now()).await?;
    factory::create_username_change(db, &user, "released", "inactive", Utc::now()).await?;

    let repo = UsernameChangeRepository::new(db);

    assert!(repo.latest_visible_from("reverted").await?.is_none());
    assert!(repo.latest_visible_from("released").await?.is_none());

    Ok(())
}

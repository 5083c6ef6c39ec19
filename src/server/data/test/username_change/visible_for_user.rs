use super::*;

/// Tests that visible changes come back oldest first.
///
/// Expected: Ok(Vec) with "first" before "second", the revert left out
#[tokio::test]
async fn lists_visible_changes_oldest_first() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    factory::create_username_change(db, &user, "second", "paid", now - Duration::days(1)).await?;
    factory::create_username_change(db, &user, "first", "admin", now - Duration::days(10)).await?;
    factory::create_username_change(db, &user, "undone", "revert", now).await?;

    let repo = UsernameChangeRepository::new(db);
    let changes = repo.visible_for_user(user.id).await?;

    let names: Vec<_> = changes.iter().map(|c| c.username_last.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);

    Ok(())
}

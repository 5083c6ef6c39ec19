use super::*;

/// Tests batch loading users with their groups.
///
/// Verifies that missing ids are skipped and each user carries its own groups.
///
/// Expected: Ok(HashMap) with two users and their groups
#[tokio::test]
async fn loads_users_with_groups() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let nominator = factory::user::UserFactory::new(db)
        .groups(&["bng", "bot"])
        .build()
        .await?;
    let plain = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(&[nominator.id, plain.id, 9999]).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[&nominator.id].groups, vec!["bng", "bot"]);
    assert!(users[&nominator.id].is_bot());
    assert!(users[&plain.id].groups.is_empty());

    Ok(())
}

use super::*;

/// Tests looking up a user by numeric id.
///
/// Expected: Ok(Some(User)) with matching id
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.lookup(&user.id.to_string(), false).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an all-digit username resolves when no user has that id.
///
/// Expected: Ok(Some(User)) for the user named "12345"
#[tokio::test]
async fn falls_back_to_username_for_digits() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("12345")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.lookup("12345", false).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that spaces and underscores are interchangeable and case is ignored.
///
/// Verifies lookups for "some_mapper" and "SOME MAPPER" both find "Some Mapper".
///
/// Expected: Ok(Some(User)) for both variants
#[tokio::test]
async fn matches_username_variants() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("Some Mapper")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let underscored = repo.lookup("some_mapper", false).await?;
    assert_eq!(underscored.map(|u| u.id), Some(user.id));

    let shouting = repo.lookup("SOME MAPPER", false).await?;
    assert_eq!(shouting.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that restricted and inactive users are only found with `find_all`.
///
/// Expected: Ok(None) without find_all, Ok(Some(User)) with it
#[tokio::test]
async fn hides_restricted_and_inactive_users() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let restricted = factory::user::UserFactory::new(db)
        .username("restricted")
        .restricted(true)
        .build()
        .await?;
    let inactive = factory::user::UserFactory::new(db)
        .username("inactive")
        .inactive(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.lookup("restricted", false).await?.is_none());
    assert!(repo.lookup(&inactive.id.to_string(), false).await?.is_none());

    let found = repo.lookup("restricted", true).await?;
    assert_eq!(found.map(|u| u.id), Some(restricted.id));
    assert!(repo.lookup(&inactive.id.to_string(), true).await?.is_some());

    Ok(())
}

/// Tests that an empty parameter finds nobody.
///
/// Expected: Ok(None)
#[tokio::test]
async fn empty_value_finds_nothing() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.lookup("  ", true).await?.is_none());

    Ok(())
}

/// Tests lookups when "Foo Bar" and "Foo_Bar" both exist.
///
/// Exact names resolve to their own account, other spellings to the oldest one.
///
/// Expected: Ok(Some(User)) with a stable result for every spelling
#[tokio::test]
async fn prefers_exact_name_over_variants() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let underscored = factory::user::UserFactory::new(db)
        .username("Foo_Bar")
        .build()
        .await?;
    let spaced = factory::user::UserFactory::new(db)
        .username("Foo Bar")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.lookup("Foo Bar", false).await?;
    assert_eq!(found.map(|u| u.id), Some(spaced.id));

    let found = repo.lookup("Foo_Bar", false).await?;
    assert_eq!(found.map(|u| u.id), Some(underscored.id));

    let found = repo.lookup("foo bar", false).await?;
    assert_eq!(found.map(|u| u.id), Some(underscored.id));

    Ok(())
}

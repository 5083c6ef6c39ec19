use super::*;

/// Tests resolving a user by id.
///
/// Expected: Ok(Resolution::Target) carrying search params scoped to that user
#[tokio::test]
async fn resolves_user_by_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let app_url = app_url();

    let user = factory::create_user(db).await?;

    let guard = ModdingHistoryGuard::new(db, session, &app_url);
    let resolution = guard
        .resolve(
            ModdingAction::Discussions,
            &user.id.to_string(),
            &query(&[("limit", "10")]),
        )
        .await?;

    let Resolution::Target(ctx) = resolution else {
        panic!("expected target, got {resolution:?}");
    };
    assert_eq!(ctx.user.id, user.id);
    assert_eq!(ctx.params.user, Some(user.id));
    assert_eq!(ctx.params.limit, 10);

    Ok(())
}

/// Tests that a username redirects to the id URL with the query kept.
///
/// Expected: Ok(Resolution::Redirect) to /api/users/{id}/modding/posts?page=2
#[tokio::test]
async fn redirects_username_to_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let app_url = app_url();

    let user = factory::user::UserFactory::new(db)
        .username("Some Mapper")
        .build()
        .await?;

    let guard = ModdingHistoryGuard::new(db, session, &app_url);
    let resolution = guard
        .resolve(ModdingAction::Posts, "some_mapper", &query(&[("page", "2")]))
        .await?;

    let Resolution::Redirect(url) = resolution else {
        panic!("expected redirect, got {resolution:?}");
    };
    assert_eq!(
        url,
        format!("https://osu.example.com/api/users/{}/modding/posts?page=2", user.id)
    );

    Ok(())
}

/// Tests that a previous username redirects to the user who held it.
///
/// Expected: Ok(Resolution::Redirect) to the renamed user's overview
#[tokio::test]
async fn follows_previous_username() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let app_url = app_url();

    let user = factory::user::UserFactory::new(db)
        .username("new name")
        .build()
        .await?;
    factory::create_username_change(db, &user, "old name", "paid", Utc::now()).await?;

    let guard = ModdingHistoryGuard::new(db, session, &app_url);
    let resolution = guard
        .resolve(ModdingAction::Index, "old name", &[])
        .await?;

    let Resolution::Redirect(url) = resolution else {
        panic!("expected redirect, got {resolution:?}");
    };
    assert_eq!(url, format!("https://osu.example.com/api/users/{}/modding", user.id));

    Ok(())
}

/// Tests that an unknown user is not found.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn unknown_user_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let app_url = app_url();

    let guard = ModdingHistoryGuard::new(db, session, &app_url);
    let result = guard.resolve(ModdingAction::Index, "nobody", &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}

/// Tests that bots have no modding history.
///
/// Expected: Err(AuthError::UserIsBot)
#[tokio::test]
async fn bot_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let app_url = app_url();

    let bot = factory::create_user_in_group(db, "bot").await?;

    let guard = ModdingHistoryGuard::new(db, session, &app_url);
    let result = guard
        .resolve(ModdingAction::Index, &bot.id.to_string(), &[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserIsBot(id))) if id == bot.id
    ));

    Ok(())
}

/// Tests that restricted users are hidden from regular viewers.
///
/// Expected: Err(AuthError::UserNotFound) since the lookup skips restricted users
#[tokio::test]
async fn restricted_user_hidden_from_viewers() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let app_url = app_url();

    let restricted = factory::user::UserFactory::new(db)
        .restricted(true)
        .build()
        .await?;
    let viewer = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(viewer.id).await?;

    let guard = ModdingHistoryGuard::new(db, session, &app_url);
    let result = guard
        .resolve(ModdingAction::Index, &restricted.id.to_string(), &[])
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests that moderators can see restricted users.
///
/// Expected: Ok(Resolution::Target) for the restricted user
#[tokio::test]
async fn moderator_sees_restricted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let app_url = app_url();

    let restricted = factory::user::UserFactory::new(db)
        .restricted(true)
        .build()
        .await?;
    let gmt = factory::create_user_in_group(db, "gmt").await?;
    AuthSession::new(session).set_user_id(gmt.id).await?;

    let guard = ModdingHistoryGuard::new(db, session, &app_url);
    let resolution = guard
        .resolve(
            ModdingAction::Events,
            &restricted.id.to_string(),
            &query(&[("with_deleted", "1")]),
        )
        .await?;

    let Resolution::Target(ctx) = resolution else {
        panic!("expected target, got {resolution:?}");
    };
    assert_eq!(ctx.user.id, restricted.id);
    assert!(ctx.params.with_deleted);

    Ok(())
}

/// Tests that an all-digit username still redirects to the owner's id.
///
/// Expected: Ok(Resolution::Redirect) to the user named "777"
#[tokio::test]
async fn numeric_username_redirects() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let app_url = app_url();

    let user = factory::user::UserFactory::new(db)
        .username("777")
        .build()
        .await?;

    let guard = ModdingHistoryGuard::new(db, session, &app_url);
    let resolution = guard
        .resolve(ModdingAction::VotesGiven, "777", &[])
        .await?;

    let Resolution::Redirect(url) = resolution else {
        panic!("expected redirect, got {resolution:?}");
    };
    assert_eq!(
        url,
        format!("https://osu.example.com/api/users/{}/modding/votes-given", user.id)
    );

    Ok(())
}

use super::*;

/// Tests that a session without a user is anonymous.
///
/// Expected: Ok(Privileges) with no viewer and no moderation rights
#[tokio::test]
async fn anonymous_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let privileges = AuthGuard::new(db, session).privileges().await?;

    assert_eq!(privileges.viewer_id, None);
    assert!(!privileges.is_moderator);
    assert!(!privileges.is_kudosu_moderator);

    Ok(())
}

/// Tests privileges derived from the viewer's groups.
///
/// Expected: Ok(Privileges) marking a NAT member as moderator, a BN as kudosu moderator
#[tokio::test]
async fn derives_privileges_from_groups() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let nat = factory::create_user_in_group(db, "nat").await?;
    AuthSession::new(session).set_user_id(nat.id).await?;

    let privileges = AuthGuard::new(db, session).privileges().await?;
    assert_eq!(privileges.viewer_id, Some(nat.id));
    assert!(privileges.is_moderator);

    let bn = factory::create_user_in_group(db, "bng").await?;
    AuthSession::new(session).set_user_id(bn.id).await?;

    let privileges = AuthGuard::new(db, session).privileges().await?;
    assert!(!privileges.is_moderator);
    assert!(privileges.is_kudosu_moderator);

    Ok(())
}

/// Tests that a restricted moderator loses their rights.
///
/// Expected: Ok(Privileges) with the viewer id but no moderation rights
#[tokio::test]
async fn restricted_viewer_has_no_rights() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let gmt = factory::user::UserFactory::new(db)
        .groups(&["gmt"])
        .restricted(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(gmt.id).await?;

    let privileges = AuthGuard::new(db, session).privileges().await?;

    assert!(!privileges.is_moderator);
    assert!(!privileges.is_kudosu_moderator);

    Ok(())
}

/// Tests that a session pointing at a missing user is treated as anonymous.
///
/// Expected: Ok(Privileges::anonymous())
#[tokio::test]
async fn missing_session_user_is_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let privileges = AuthGuard::new(db, session).privileges().await?;

    assert_eq!(privileges.viewer_id, None);

    Ok(())
}

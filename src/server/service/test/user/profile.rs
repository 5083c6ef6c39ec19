use super::*;

/// Tests the profile extras shown alongside the modding history.
///
/// Previous usernames leave out reverts and the current name. Deleted and
/// qualified beatmapsets are not counted.
///
/// Expected: Ok(UserProfile) with one previous name and one set per bucket
#[tokio::test]
async fn loads_previous_names_and_counts() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let mapper = factory::user::UserFactory::new(db)
        .username("mapper")
        .build()
        .await?;
    let now = Utc::now();
    factory::create_username_change(db, &mapper, "old mapper", "paid", now - Duration::days(2))
        .await?;
    factory::create_username_change(db, &mapper, "mapper", "support", now - Duration::days(1))
        .await?;
    factory::create_username_change(db, &mapper, "undone", "revert", now).await?;

    for approved in [1, 3, 4, 0, -2] {
        BeatmapsetFactory::new(db, mapper.id)
            .approved(approved)
            .build()
            .await?;
    }
    BeatmapsetFactory::new(db, mapper.id)
        .approved(1)
        .deleted(true)
        .build()
        .await?;

    let user = context(db, mapper.id, ModdingAction::Index, Privileges::anonymous(), &[])
        .await?
        .user;
    let profile = UserService::new(db).profile(user).await?;

    assert_eq!(profile.previous_usernames, vec!["old mapper"]);
    assert_eq!(profile.beatmapset_counts.ranked_and_approved, 1);
    assert_eq!(profile.beatmapset_counts.loved, 1);
    assert_eq!(profile.beatmapset_counts.unranked, 1);
    assert_eq!(profile.beatmapset_counts.graveyard, 1);

    Ok(())
}

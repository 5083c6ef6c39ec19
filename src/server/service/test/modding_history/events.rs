use super::*;

/// Tests that events keep their deleted beatmapset only for moderators.
///
/// Expected: Ok(ModdingPage) with the beatmapset attached for the moderator only
#[tokio::test]
async fn deleted_beatmapsets_for_moderators() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let nominator = factory::create_user(db).await?;
    let beatmapset = BeatmapsetFactory::new(db, nominator.id)
        .deleted(true)
        .build()
        .await?;
    factory::create_event(db, beatmapset.id, nominator.id, "nominate").await?;
    let gmt = factory::create_user_in_group(db, "gmt").await?;

    let service = ModdingHistoryService::new(db);

    let ctx = context(
        db,
        nominator.id,
        ModdingAction::Events,
        Privileges::anonymous(),
        &[],
    )
    .await?;
    let page = service.events(ctx).await?;
    assert_eq!(page.results.total, 1);
    assert!(page.results.items[0].beatmapset.is_none());

    let ctx = context(db, nominator.id, ModdingAction::Events, viewer(gmt.id, true), &[]).await?;
    let page = service.events(ctx).await?;
    let loaded = page.results.items[0].beatmapset.as_ref().unwrap();
    assert_eq!(loaded.beatmapset.id, beatmapset.id);
    assert_eq!(loaded.user.as_ref().map(|u| u.id), Some(nominator.id));

    Ok(())
}

use super::*;

/// Tests that received votes are those cast on the user's discussions.
///
/// Votes the user cast themselves are not included.
///
/// Expected: Ok(ModdingPage) with the two votes on the modder's discussion
#[tokio::test]
async fn lists_votes_on_users_discussions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (mapper, beatmapset, modder, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let mapper_discussion = factory::create_discussion(db, beatmapset.id, mapper.id).await?;
    let voter = factory::create_user(db).await?;

    factory::create_vote(db, discussion.id, voter.id).await?;
    factory::create_vote(db, discussion.id, mapper.id).await?;
    factory::create_vote(db, mapper_discussion.id, modder.id).await?;

    let ctx = context(
        db,
        modder.id,
        ModdingAction::VotesReceived,
        Privileges::anonymous(),
        &[],
    )
    .await?;
    let page = ModdingHistoryService::new(db).votes_received(ctx).await?;

    assert_eq!(page.results.total, 2);
    assert!(page
        .results
        .items
        .iter()
        .all(|v| v.vote.beatmap_discussion_id == discussion.id));
    assert!(page.results.items.iter().all(|v| v.user.is_some()));
    assert_eq!(page.context.params.receiver, Some(modder.id));
    assert_eq!(page.context.params.user, None);

    Ok(())
}

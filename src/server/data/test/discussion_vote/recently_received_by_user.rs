use super::*;

/// Tests summing votes on a user's discussions per voter.
///
/// Votes on a deleted discussion are left out of the summary.
///
/// Expected: Ok with one summary per voter, ordered by score
#[tokio::test]
async fn sums_votes_per_voter() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, beatmapset, modder, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let deleted =
        test_utils::factory::beatmap_discussion::BeatmapDiscussionFactory::new(db, beatmapset.id)
            .user_id(modder.id)
            .deleted(true)
            .build()
            .await?;
    let fan = factory::create_user(db).await?;
    let critic = factory::create_user(db).await?;

    factory::create_vote(db, discussion.id, fan.id).await?;
    factory::create_vote(db, deleted.id, fan.id).await?;
    BeatmapDiscussionVoteFactory::new(db, discussion.id, critic.id)
        .score(-1)
        .build()
        .await?;

    let repo = DiscussionVoteRepository::new(db);
    let summaries = repo
        .recently_received_by_user(modder.id, Utc::now() - Duration::days(90))
        .await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].user_id, Some(fan.id));
    assert_eq!((summaries[0].score, summaries[0].count), (1, 1));
    assert_eq!(summaries[1].user_id, Some(critic.id));
    assert_eq!((summaries[1].score, summaries[1].count), (-1, 1));

    Ok(())
}

use super::*;

/// Tests summing a voter's recent votes per discussion author.
///
/// The modder's two discussions got an upvote and a downvote, the mapper's got one
/// upvote. A vote older than the cutoff is ignored.
///
/// Expected: Ok with the mapper first (score 1, count 1), then the modder (score 0, count 2)
#[tokio::test]
async fn sums_votes_per_discussion_author() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (mapper, beatmapset, modder, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let second = factory::create_discussion(db, beatmapset.id, modder.id).await?;
    let mapper_discussion = factory::create_discussion(db, beatmapset.id, mapper.id).await?;
    let voter = factory::create_user(db).await?;
    let now = Utc::now();

    factory::create_vote(db, discussion.id, voter.id).await?;
    BeatmapDiscussionVoteFactory::new(db, second.id, voter.id)
        .score(-1)
        .build()
        .await?;
    factory::create_vote(db, mapper_discussion.id, voter.id).await?;

    let stale = factory::create_discussion(db, beatmapset.id, mapper.id).await?;
    BeatmapDiscussionVoteFactory::new(db, stale.id, voter.id)
        .created_at(now - Duration::days(120))
        .build()
        .await?;

    let repo = DiscussionVoteRepository::new(db);
    let summaries = repo
        .recently_given_by_user(voter.id, now - Duration::days(90))
        .await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].user_id, Some(mapper.id));
    assert_eq!((summaries[0].score, summaries[0].count), (1, 1));
    assert_eq!(summaries[1].user_id, Some(modder.id));
    assert_eq!((summaries[1].score, summaries[1].count), (0, 2));

    Ok(())
}

use super::*;

/// Tests filtering votes by voter and score.
///
/// Expected: Ok with only the downvote
#[tokio::test]
async fn filters_by_voter_and_score() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (mapper, beatmapset, _, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let other = factory::create_discussion(db, beatmapset.id, mapper.id).await?;
    let voter = factory::create_user(db).await?;

    factory::create_vote(db, discussion.id, voter.id).await?;
    let downvote = BeatmapDiscussionVoteFactory::new(db, other.id, voter.id)
        .score(-1)
        .build()
        .await?;

    let repo = DiscussionVoteRepository::new(db);
    let (votes, total) = repo
        .search(&search_params(voter.id, &[("score", "-1")], Privileges::anonymous()))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(votes[0].id, downvote.id);

    Ok(())
}

/// Tests searching by the author of the voted discussion.
///
/// Expected: Ok with both votes on the modder's discussion
#[tokio::test]
async fn filters_by_receiver() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (mapper, beatmapset, modder, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let unrelated = factory::create_discussion(db, beatmapset.id, mapper.id).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    factory::create_vote(db, discussion.id, first.id).await?;
    factory::create_vote(db, discussion.id, second.id).await?;
    factory::create_vote(db, unrelated.id, first.id).await?;

    let mut params = search_params(modder.id, &[], Privileges::anonymous());
    params.receiver = params.user.take();

    let repo = DiscussionVoteRepository::new(db);
    let (votes, total) = repo.search(&params).await?;

    assert_eq!(total, 2);
    assert!(votes.iter().all(|vote| vote.beatmap_discussion_id == discussion.id));

    Ok(())
}

/// Tests that votes on deleted discussions need moderator privileges.
///
/// Expected: Ok with 0 votes for a regular viewer, 1 for a moderator
#[tokio::test]
async fn hides_votes_on_deleted_discussions() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let mapper = factory::create_user(db).await?;
    let beatmapset = factory::create_beatmapset(db, mapper.id).await?;
    let voter = factory::create_user(db).await?;
    let discussion =
        test_utils::factory::beatmap_discussion::BeatmapDiscussionFactory::new(db, beatmapset.id)
            .user_id(mapper.id)
            .deleted(true)
            .build()
            .await?;
    factory::create_vote(db, discussion.id, voter.id).await?;

    let repo = DiscussionVoteRepository::new(db);
    let query = [("with_deleted", "1")];

    let (_, total) = repo
        .search(&search_params(voter.id, &query, Privileges::anonymous()))
        .await?;
    assert_eq!(total, 0);

    let (_, total) = repo
        .search(&search_params(voter.id, &query, moderator()))
        .await?;
    assert_eq!(total, 1);

    Ok(())
}

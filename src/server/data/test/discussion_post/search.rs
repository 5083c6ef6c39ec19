use super::*;

/// Tests that replies are the default post type.
///
/// The modder's starting post and system post are excluded.
///
/// Expected: Ok with only the reply
#[tokio::test]
async fn defaults_to_replies() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, _, modder, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let reply = factory::create_post(db, discussion.id, modder.id).await?;
    BeatmapDiscussionPostFactory::new(db, discussion.id)
        .user_id(modder.id)
        .system(true)
        .build()
        .await?;

    let repo = DiscussionPostRepository::new(db);
    let (posts, total) = repo
        .search(&search_params(modder.id, &[], Privileges::anonymous()))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(posts[0].id, reply.id);

    Ok(())
}

/// Tests requesting starting posts and system posts together.
///
/// Expected: Ok with two posts, the reply left out
#[tokio::test]
async fn selects_first_and_system_posts() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, _, modder, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let reply = factory::create_post(db, discussion.id, modder.id).await?;
    BeatmapDiscussionPostFactory::new(db, discussion.id)
        .user_id(modder.id)
        .system(true)
        .build()
        .await?;

    let repo = DiscussionPostRepository::new(db);
    let params = search_params(
        modder.id,
        &[("types[]", "first"), ("types[]", "system")],
        Privileges::anonymous(),
    );
    let (posts, total) = repo.search(&params).await?;

    assert_eq!(total, 2);
    assert!(posts.iter().all(|post| post.id != reply.id));

    Ok(())
}

/// Tests that posts in deleted discussions are hidden unless a moderator asks.
///
/// Expected: Ok with no posts for the regular viewer, one for the moderator
#[tokio::test]
async fn hides_posts_of_deleted_discussions() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let mapper = factory::create_user(db).await?;
    let beatmapset = factory::create_beatmapset(db, mapper.id).await?;
    let modder = factory::create_user(db).await?;
    let discussion =
        test_utils::factory::beatmap_discussion::BeatmapDiscussionFactory::new(db, beatmapset.id)
            .user_id(mapper.id)
            .deleted(true)
            .build()
            .await?;
    factory::create_post(db, discussion.id, modder.id).await?;

    let repo = DiscussionPostRepository::new(db);
    let query = [("with_deleted", "1")];

    let (_, total) = repo
        .search(&search_params(modder.id, &query, Privileges::anonymous()))
        .await?;
    assert_eq!(total, 0);

    let (_, total) = repo
        .search(&search_params(modder.id, &query, moderator()))
        .await?;
    assert_eq!(total, 1);

    Ok(())
}

use super::*;

/// Tests that the first post of each discussion is returned.
///
/// Expected: Ok(HashMap) mapping the discussion to its first post, not the reply
#[tokio::test]
async fn maps_discussions_to_first_post() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (mapper, _, modder, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    factory::create_post(db, discussion.id, mapper.id).await?;

    let repo = DiscussionPostRepository::new(db);
    let posts = repo.starting_posts(&[discussion.id]).await?;

    let first = &posts[&discussion.id];
    assert_eq!(first.user_id, Some(modder.id));
    assert_eq!(first.message, "starting post");

    Ok(())
}

/// Tests that no ids means no query.
///
/// Expected: Ok(empty HashMap)
#[tokio::test]
async fn empty_ids_return_empty_map() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = DiscussionPostRepository::new(db);

    assert!(repo.starting_posts(&[]).await?.is_empty());

    Ok(())
}

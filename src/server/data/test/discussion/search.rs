use super::*;
use test_utils::factory::beatmap_discussion::BeatmapDiscussionFactory;

/// Tests that only the target user's discussions are returned, newest first.
///
/// Expected: Ok with two discussions in descending id order and a total of 2
#[tokio::test]
async fn returns_users_discussions_newest_first() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, beatmapset, modder, first) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let second = factory::create_discussion(db, beatmapset.id, modder.id).await?;
    let other = factory::create_user(db).await?;
    factory::create_discussion(db, beatmapset.id, other.id).await?;

    let repo = DiscussionRepository::new(db);
    let params = search_params(modder.id, &[], Privileges::anonymous());
    let (discussions, total) = repo.search(&params).await?;

    assert_eq!(total, 2);
    let ids: Vec<_> = discussions.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests that deleted discussions need both the flag and moderator privileges.
///
/// Expected: Ok with 1 result for a regular viewer asking for deleted rows, 2 for a moderator
#[tokio::test]
async fn includes_deleted_only_for_moderators() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, beatmapset, modder, _) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    BeatmapDiscussionFactory::new(db, beatmapset.id)
        .user_id(modder.id)
        .deleted(true)
        .build()
        .await?;

    let repo = DiscussionRepository::new(db);
    let query = [("with_deleted", "1")];

    let (_, total) = repo
        .search(&search_params(modder.id, &query, Privileges::anonymous()))
        .await?;
    assert_eq!(total, 1);

    let (_, total) = repo
        .search(&search_params(modder.id, &query, moderator()))
        .await?;
    assert_eq!(total, 2);

    Ok(())
}

/// Tests filtering by message type and resolution state.
///
/// Expected: Ok with only the unresolved problem
#[tokio::test]
async fn filters_message_types_and_unresolved() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let mapper = factory::create_user(db).await?;
    let beatmapset = factory::create_beatmapset(db, mapper.id).await?;
    let modder = factory::create_user(db).await?;

    let open = BeatmapDiscussionFactory::new(db, beatmapset.id)
        .user_id(modder.id)
        .message_type("problem")
        .build()
        .await?;
    BeatmapDiscussionFactory::new(db, beatmapset.id)
        .user_id(modder.id)
        .message_type("problem")
        .resolved(true)
        .build()
        .await?;
    BeatmapDiscussionFactory::new(db, beatmapset.id)
        .user_id(modder.id)
        .message_type("praise")
        .build()
        .await?;

    let repo = DiscussionRepository::new(db);
    let params = search_params(
        modder.id,
        &[("message_types[]", "problem"), ("only_unresolved", "true")],
        Privileges::anonymous(),
    );
    let (discussions, total) = repo.search(&params).await?;

    assert_eq!(total, 1);
    assert_eq!(discussions[0].id, open.id);

    Ok(())
}

/// Tests paging with ascending sort.
///
/// Seven discussions at the minimum page size of five leave two on page two.
///
/// Expected: Ok with the two newest discussions on page 2 and a total of 7
#[tokio::test]
async fn pages_in_ascending_order() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let mapper = factory::create_user(db).await?;
    let beatmapset = factory::create_beatmapset(db, mapper.id).await?;
    let modder = factory::create_user(db).await?;

    let mut created = Vec::new();
    for _ in 0..7 {
        created.push(factory::create_discussion(db, beatmapset.id, modder.id).await?);
    }

    let repo = DiscussionRepository::new(db);
    let params = search_params(
        modder.id,
        &[("limit", "1"), ("page", "2"), ("sort", "id_asc")],
        Privileges::anonymous(),
    );
    let (discussions, total) = repo.search(&params).await?;

    assert_eq!(total, 7);
    let ids: Vec<_> = discussions.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![created[5].id, created[6].id]);

    Ok(())
}

/// Tests that an absurdly large page yields an empty page instead of failing.
///
/// Expected: Ok with no discussions and the full total
#[tokio::test]
async fn huge_page_returns_empty_page() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, _, modder, _) = factory::helpers::create_discussion_with_dependencies(db).await?;

    let repo = DiscussionRepository::new(db);
    let params = search_params(
        modder.id,
        &[("page", "9223372036854775807"), ("limit", "50")],
        Privileges::anonymous(),
    );
    let (discussions, total) = repo.search(&params).await?;

    assert!(discussions.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

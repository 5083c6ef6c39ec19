use super::*;

/// Tests paging through received kudosu past the overview.
///
/// Expected: Ok(Vec) with rows 6 and 7, each linked to its discussion
#[tokio::test]
async fn pages_received_kudosu() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (mapper, beatmapset, modder, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let mut created = Vec::new();
    for _ in 0..8 {
        created.push(factory::create_kudosu(db, modder.id, Some(mapper.id), discussion.id).await?);
    }

    let ctx = context(db, modder.id, ModdingAction::Kudosu, Privileges::anonymous(), &[]).await?;
    let paging = KudosuPageParams::from_query(&[
        ("limit".to_string(), "2".to_string()),
        ("offset".to_string(), "5".to_string()),
    ]);
    let rows = ModdingHistoryService::new(db).kudosu(&ctx, paging).await?;

    let ids: Vec<_> = rows.iter().map(|k| k.history.exchange_id).collect();
    assert_eq!(ids, vec![created[2].exchange_id, created[1].exchange_id]);

    let source = rows[0].source.as_ref().unwrap();
    assert_eq!(source.discussion.id, discussion.id);
    assert_eq!(
        source.beatmapset.as_ref().map(|s| s.beatmapset.id),
        Some(beatmapset.id)
    );

    Ok(())
}

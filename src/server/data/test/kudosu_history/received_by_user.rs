use super::*;

/// Tests that received kudosu comes back newest first within limit and offset.
///
/// Expected: Ok with the second and third newest rows
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_modding_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, _, modder, discussion) =
        factory::helpers::create_discussion_with_dependencies(db).await?;
    let giver = factory::create_user(db).await?;

    let mut created = Vec::new();
    for _ in 0..4 {
        created.push(factory::create_kudosu(db, modder.id, Some(giver.id), discussion.id).await?);
    }
    factory::create_kudosu(db, giver.id, Some(modder.id), discussion.id).await?;

    let repo = KudosuHistoryRepository::new(db);
    let rows = repo.received_by_user(modder.id, 2, 1).await?;

    let ids: Vec<_> = rows.iter().map(|row| row.exchange_id).collect();
    assert_eq!(ids, vec![created[2].exchange_id, created[1].exchange_id]);

    Ok(())
}

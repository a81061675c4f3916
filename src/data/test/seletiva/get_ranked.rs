use super::*;

/// Tests that entries come back fastest first.
///
/// Expected: Ok with the board ordered by lap time ascending
#[tokio::test]
async fn orders_fastest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_table(SeletivaEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slow) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, fast) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, middle) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = SeletivaRepository::new(db);
    repo.upsert(slow.id, 97_000, "1:37.000".to_string()).await?;
    repo.upsert(fast.id, 93_500, "1:33.500".to_string()).await?;
    repo.upsert(middle.id, 95_100, "1:35.100".to_string()).await?;

    let board = repo.get_ranked().await?;
    let order: Vec<i32> = board.iter().map(|e| e.pilot_id).collect();

    assert_eq!(order, vec![fast.id, middle.id, slow.id]);

    Ok(())
}

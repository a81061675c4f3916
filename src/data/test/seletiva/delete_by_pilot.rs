use super::*;

/// Tests removing one pilot's entry leaves the rest of the board alone.
///
/// Expected: Ok(1) and only the other pilot's entry remains
#[tokio::test]
async fn removes_only_that_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_table(SeletivaEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, leaving) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, staying) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = SeletivaRepository::new(db);
    repo.upsert(leaving.id, 95_800, "1:35.800".to_string())
        .await?;
    repo.upsert(staying.id, 96_200, "1:36.200".to_string())
        .await?;

    let deleted = repo.delete_by_pilot(leaving.id).await?;

    assert_eq!(deleted, 1);

    let board = repo.get_ranked().await?;
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].pilot_id, staying.id);

    Ok(())
}

/// Tests deleting a pilot with no entry reports zero rows.
///
/// Expected: Ok(0)
#[tokio::test]
async fn missing_entry_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_table(SeletivaEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let deleted = SeletivaRepository::new(db).delete_by_pilot(pilot.id).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

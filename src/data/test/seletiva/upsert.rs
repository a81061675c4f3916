use super::*;

/// Tests recording a first lap for a pilot.
///
/// Expected: Ok with the lap stored
#[tokio::test]
async fn creates_entry_for_new_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_table(SeletivaEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = SeletivaRepository::new(db);
    let entry = repo.upsert(pilot.id, 95_800, "1:35.800".to_string()).await?;

    assert_eq!(entry.time_ms, 95_800);
    assert_eq!(entry.time_display, "1:35.800");

    Ok(())
}

/// Tests that re-recording overwrites the pilot's previous lap.
///
/// Expected: Ok with one row holding the latest time
#[tokio::test]
async fn overwrites_previous_lap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_table(SeletivaEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = SeletivaRepository::new(db);
    let first = repo.upsert(pilot.id, 95_800, "1:35.800".to_string()).await?;
    let second = repo.upsert(pilot.id, 94_200, "1:34.200".to_string()).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.time_ms, 94_200);
    assert_eq!(repo.get_ranked().await?.len(), 1);

    Ok(())
}

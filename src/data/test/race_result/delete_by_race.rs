use super::*;

/// Tests deleting all result lines of one race.
///
/// Expected: Ok(2) with lines of the other race untouched
#[tokio::test]
async fn deletes_only_lines_of_that_race() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_result_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot_a) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, pilot_b) = factory::helpers::create_pilot_with_user(db).await?;
    let (season, race_one) = factory::helpers::create_race_with_season(db).await?;
    let race_two = factory::race::create_race(db, season.id).await?;

    factory::race_result::create_race_result(db, race_one.id, pilot_a.id).await?;
    factory::race_result::create_race_result(db, race_one.id, pilot_b.id).await?;
    factory::race_result::create_race_result(db, race_two.id, pilot_a.id).await?;

    let repo = RaceResultRepository::new(db);
    let deleted = repo.delete_by_race(race_one.id).await?;

    assert_eq!(deleted, 2);
    assert!(repo.get_by_race(race_one.id).await?.is_empty());
    assert_eq!(repo.get_by_race(race_two.id).await?.len(), 1);

    Ok(())
}

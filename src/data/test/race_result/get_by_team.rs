use super::*;

/// Tests that lines come back by their stored team attribution, not the
/// pilot's current roster team.
///
/// Expected: Ok with only the lines credited to the queried team
#[tokio::test]
async fn follows_the_stored_attribution() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await.unwrap();
    let other = factory::team::create_team(db).await.unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;
    let (season, race_one) = factory::helpers::create_race_with_season(db).await?;
    let race_two = factory::race::create_race(db, season.id).await?;

    factory::race_result::RaceResultFactory::new(db, race_one.id, pilot.id)
        .team_id(team.id)
        .points(35.0)
        .build()
        .await?;
    factory::race_result::RaceResultFactory::new(db, race_two.id, pilot.id)
        .team_id(other.id)
        .points(30.0)
        .build()
        .await?;

    let lines = RaceResultRepository::new(db).get_by_team(team.id).await?;

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].team_id, Some(team.id));
    assert_eq!(lines[0].points, 35.0);

    Ok(())
}

/// Tests a team with no credited lines.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_for_an_uncredited_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await.unwrap();

    let lines = RaceResultRepository::new(db).get_by_team(team.id).await?;

    assert!(lines.is_empty());

    Ok(())
}

use super::*;

/// Tests inserting a line with an explicit team snapshot.
///
/// Expected: Ok with the snapshot stored on the line
#[tokio::test]
async fn keeps_team_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_result_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;
    let team = factory::team::create_team(db).await?;

    let repo = RaceResultRepository::new(db);
    let line = repo
        .insert(InsertResultParams {
            race_id: race.id,
            pilot_id: pilot.id,
            team_id: Some(team.id),
            position: 3,
            points: 27.0,
            fastest_lap: false,
            driver_of_the_day: false,
            fan_favorite: false,
            dnf: false,
            dsq: false,
            absence: None,
        })
        .await?;

    assert_eq!(line.team_id, Some(team.id));
    assert_eq!(line.position, 3);
    assert_eq!(line.points, 27.0);

    Ok(())
}

/// Tests inserting an absence line with no team.
///
/// Expected: Ok with zero points and the absence kind stored
#[tokio::test]
async fn stores_absence_line() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_result_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;

    let repo = RaceResultRepository::new(db);
    let line = repo
        .insert(InsertResultParams {
            race_id: race.id,
            pilot_id: pilot.id,
            team_id: None,
            position: 0,
            points: 0.0,
            fastest_lap: false,
            driver_of_the_day: false,
            fan_favorite: false,
            dnf: false,
            dsq: false,
            absence: Some(entity::enums::Absence::Unjustified),
        })
        .await?;

    assert_eq!(line.points, 0.0);
    assert_eq!(line.absence, Some(entity::enums::Absence::Unjustified));

    Ok(())
}

use super::*;
use entity::enums::Grid;

/// Tests updating only the fields present in the params.
///
/// Expected: Ok with the nickname changed and all other fields untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = PilotRepository::new(db);
    let updated = repo
        .update(
            pilot.id,
            UpdatePilotParams {
                nickname: Some("Hammer".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.nickname, "Hammer");
    assert_eq!(updated.grid, pilot.grid);
    assert_eq!(updated.cnh_points, pilot.cnh_points);
    assert_eq!(updated.team_id, pilot.team_id);

    Ok(())
}

/// Tests assigning and then clearing a pilot's team.
///
/// The team field is doubly optional so that `Some(None)` clears the
/// assignment while `None` leaves it alone.
///
/// Expected: Ok with the team set, then Ok with the team cleared
#[tokio::test]
async fn clears_team_with_inner_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;
    let team = factory::team::create_team(db).await?;

    let repo = PilotRepository::new(db);
    let assigned = repo
        .update(
            pilot.id,
            UpdatePilotParams {
                team_id: Some(Some(team.id)),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(assigned.team_id, Some(team.id));

    let cleared = repo
        .update(
            pilot.id,
            UpdatePilotParams {
                team_id: Some(None),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(cleared.team_id, None);

    Ok(())
}

/// Tests moving a pilot to another grid.
///
/// Expected: Ok with the new grid stored
#[tokio::test]
async fn changes_grid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = PilotRepository::new(db);
    let updated = repo
        .update(
            pilot.id,
            UpdatePilotParams {
                grid: Some(Grid::Advanced),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.grid, Grid::Advanced);

    Ok(())
}

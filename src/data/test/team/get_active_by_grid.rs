use super::*;

/// Tests filtering active teams by grid.
///
/// Expected: Ok with only active teams of the requested grid
#[tokio::test]
async fn filters_grid_and_archived_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let elite = factory::team::TeamFactory::new(db).grid(Grid::Elite).build().await?;
    factory::team::TeamFactory::new(db).grid(Grid::Advanced).build().await?;
    factory::team::TeamFactory::new(db)
        .grid(Grid::Elite)
        .active(false)
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let teams = repo.get_active_by_grid(Grid::Elite).await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, elite.id);

    Ok(())
}

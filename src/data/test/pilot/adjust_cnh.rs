use super::*;

/// Tests applying a negative delta to a pilot's license balance.
///
/// Expected: Ok with the balance reduced by the delta
#[tokio::test]
async fn subtracts_penalty_from_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = PilotRepository::new(db);
    let updated = repo.adjust_cnh(pilot.id, -5).await?;

    assert_eq!(updated.cnh_points, pilot.cnh_points - 5);

    Ok(())
}

/// Tests applying a positive delta to a pilot's license balance.
///
/// Expected: Ok with the balance increased by the delta
#[tokio::test]
async fn adds_refund_to_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = PilotRepository::new(db);
    repo.adjust_cnh(pilot.id, -10).await?;
    let updated = repo.adjust_cnh(pilot.id, 10).await?;

    assert_eq!(updated.cnh_points, pilot.cnh_points);

    Ok(())
}

/// Tests that the balance is allowed to go negative.
///
/// A pilot with a balance at or below zero is banned rather than floored,
/// so refunds can restore the exact pre-penalty value.
///
/// Expected: Ok with a negative balance stored
#[tokio::test]
async fn balance_can_go_below_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;

    let repo = PilotRepository::new(db);
    let updated = repo.adjust_cnh(pilot.id, -(pilot.cnh_points + 3)).await?;

    assert_eq!(updated.cnh_points, -3);
    assert!(updated.is_banned());

    Ok(())
}

/// Tests adjusting a pilot that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_pilot() {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PilotRepository::new(db);
    let result = repo.adjust_cnh(9999, -5).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}

use super::*;

/// Tests recording a first check-in answer.
///
/// Expected: Ok with a confirmed registration
#[tokio::test]
async fn creates_registration_when_none_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_result_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;

    let repo = RegistrationRepository::new(db);
    let registration = repo
        .upsert(race.id, pilot.id, RegistrationStatus::Confirmed, None)
        .await?;

    assert_eq!(registration.status, RegistrationStatus::Confirmed);
    assert_eq!(registration.excuse, None);

    Ok(())
}

/// Tests changing an answer from confirmed to a justified absence.
///
/// A pilot may flip their answer until results are saved. The same row
/// must be updated instead of inserting a second one.
///
/// Expected: Ok with one row holding the latest status and excuse
#[tokio::test]
async fn updates_existing_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_result_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, pilot) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;

    let repo = RegistrationRepository::new(db);
    let first = repo
        .upsert(race.id, pilot.id, RegistrationStatus::Confirmed, None)
        .await?;
    let second = repo
        .upsert(
            race.id,
            pilot.id,
            RegistrationStatus::Justified,
            Some("Work trip".to_string()),
        )
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.status, RegistrationStatus::Justified);
    assert_eq!(second.excuse.as_deref(), Some("Work trip"));
    assert_eq!(repo.get_by_race(race.id).await?.len(), 1);

    Ok(())
}

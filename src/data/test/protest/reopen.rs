use super::*;

/// Tests reopening a closed protest.
///
/// Expected: Ok with status back to Voting and the verdict fields cleared
#[tokio::test]
async fn clears_verdict_and_returns_to_voting() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, accuser) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, accused) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;
    let protest = factory::protest::create_protest(db, race.id, accuser.id, accused.id).await?;

    let repo = ProtestRepository::new(db);
    repo.close(protest.id, Verdict::Severe, None, Utc::now()).await?;
    let reopened = repo.reopen(protest.id).await?;

    assert_eq!(reopened.status, ProtestStatus::Voting);
    assert_eq!(reopened.verdict, None);
    assert_eq!(reopened.verdict_reason, None);
    assert_eq!(reopened.closed_at, None);

    Ok(())
}

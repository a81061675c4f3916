use super::*;

/// Tests closing a protest with a verdict.
///
/// Expected: Ok with status Closed, the verdict, reason, and closing time stored
#[tokio::test]
async fn stores_verdict_and_closing_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, accuser) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, accused) = factory::helpers::create_pilot_with_user(db).await?;
    let (_, race) = factory::helpers::create_race_with_season(db).await?;
    let protest = factory::protest::create_protest(db, race.id, accuser.id, accused.id).await?;

    let repo = ProtestRepository::new(db);
    let closed = repo
        .close(
            protest.id,
            Verdict::Medium,
            Some("Avoidable contact".to_string()),
            Utc::now(),
        )
        .await?;

    assert_eq!(closed.status, ProtestStatus::Closed);
    assert_eq!(closed.verdict, Some(Verdict::Medium));
    assert_eq!(closed.verdict_reason.as_deref(), Some("Avoidable contact"));
    assert!(closed.closed_at.is_some());

    Ok(())
}

/// Tests closing a protest that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_protest() {
    let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProtestRepository::new(db);
    let result = repo.close(9999, Verdict::Light, None, Utc::now()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}

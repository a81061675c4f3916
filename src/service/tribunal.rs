//! Protest lifecycle and disciplinary settlement.
//!
//! A protest moves through awaiting-defense, voting, and closed. Closing is
//! the only step that touches license points, and reopening or deleting a
//! closed protest must refund exactly what closing charged. Both directions
//! go through [`apply_verdict`] and [`refund_verdict`] so the arithmetic
//! cannot drift apart.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use entity::enums::{ProtestStatus, Role, Verdict};

use crate::{
    data::{
        pilot::PilotRepository,
        protest::{OpenProtestParams, ProtestRepository},
        race::RaceRepository,
        race_result::RaceResultRepository,
        user::UserRepository,
    },
    error::AppError,
    service::scoring,
};

/// Opens a protest on behalf of the accusing pilot.
///
/// # Returns
/// - `Ok(Model)`: The protest, awaiting the accused pilot's defense
/// - `Err(AppError::NotFound)`: Race or accused pilot does not exist
/// - `Err(AppError::BadRequest)`: Pilot protested against themselves
pub async fn open(
    db: &DatabaseConnection,
    accuser_id: i32,
    params: OpenProtestParams,
) -> Result<entity::protest::Model, AppError> {
    let race_repo = RaceRepository::new(db);
    let pilot_repo = PilotRepository::new(db);
    let protest_repo = ProtestRepository::new(db);

    if params.accused_id == accuser_id {
        return Err(AppError::BadRequest(
            "You cannot open a protest against yourself".to_string(),
        ));
    }

    if race_repo.find_by_id(params.race_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Race {} not found",
            params.race_id
        )));
    }

    if pilot_repo.find_by_id(params.accused_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Pilot {} not found",
            params.accused_id
        )));
    }

    let protest = protest_repo
        .create(OpenProtestParams {
            accuser_id,
            ..params
        })
        .await?;

    tracing::info!(
        "Protest {} opened by pilot {} against pilot {}",
        protest.id,
        protest.accuser_id,
        protest.accused_id
    );

    Ok(protest)
}

/// Records the accused pilot's defense and moves the protest to voting.
///
/// # Returns
/// - `Ok(Model)`: The protest, now in voting
/// - `Err(AppError::NotFound)`: Protest does not exist
/// - `Err(AppError::BadRequest)`: Caller is not the accused, or the defense
///   window has passed
pub async fn submit_defense(
    db: &DatabaseConnection,
    protest_id: i32,
    pilot_id: i32,
    defense_video_url: Option<String>,
    defense_argument: Option<String>,
) -> Result<entity::protest::Model, AppError> {
    let protest_repo = ProtestRepository::new(db);

    let Some(protest) = protest_repo.find_by_id(protest_id).await? else {
        return Err(AppError::NotFound(format!("Protest {protest_id} not found")));
    };

    if protest.accused_id != pilot_id {
        return Err(AppError::BadRequest(
            "Only the accused pilot may submit a defense".to_string(),
        ));
    }

    if protest.status != ProtestStatus::AwaitingDefense {
        return Err(AppError::BadRequest(
            "The defense window for this protest has passed".to_string(),
        ));
    }

    Ok(protest_repo
        .set_defense(protest_id, defense_video_url, defense_argument)
        .await?)
}

/// Withdraws a protest before a verdict is reached.
///
/// # Returns
/// - `Ok(())`: Protest removed
/// - `Err(AppError::NotFound)`: Protest does not exist
/// - `Err(AppError::BadRequest)`: Caller is not the accuser
/// - `Err(AppError::Conflict)`: Protest already closed
pub async fn withdraw(
    db: &DatabaseConnection,
    protest_id: i32,
    pilot_id: i32,
) -> Result<(), AppError> {
    let protest_repo = ProtestRepository::new(db);

    let Some(protest) = protest_repo.find_by_id(protest_id).await? else {
        return Err(AppError::NotFound(format!("Protest {protest_id} not found")));
    };

    if protest.accuser_id != pilot_id {
        return Err(AppError::BadRequest(
            "Only the accusing pilot may withdraw a protest".to_string(),
        ));
    }

    if protest.status == ProtestStatus::Closed {
        return Err(AppError::Conflict(
            "A closed protest cannot be withdrawn".to_string(),
        ));
    }

    protest_repo.delete(protest_id).await?;

    Ok(())
}

/// Casts or replaces an admin's vote on the verdict.
///
/// Admins who are themselves a party to the protest (through their pilot
/// profile) are barred from voting. A vote on a protest still awaiting
/// defense moves it to voting, so a silent accused pilot cannot stall the
/// tribunal.
///
/// # Returns
/// - `Ok(Model)`: The recorded vote
/// - `Err(AppError::NotFound)`: Protest does not exist
/// - `Err(AppError::BadRequest)`: Voting admin is a party to the protest
/// - `Err(AppError::Conflict)`: Protest already closed
pub async fn cast_vote(
    db: &DatabaseConnection,
    protest_id: i32,
    admin_user_id: i32,
    choice: Verdict,
) -> Result<entity::protest_vote::Model, AppError> {
    let protest_repo = ProtestRepository::new(db);
    let pilot_repo = PilotRepository::new(db);

    let Some(protest) = protest_repo.find_by_id(protest_id).await? else {
        return Err(AppError::NotFound(format!("Protest {protest_id} not found")));
    };

    if protest.status == ProtestStatus::Closed {
        return Err(AppError::Conflict(
            "Voting has ended on this protest".to_string(),
        ));
    }

    // Race direction may always vote; other admins are excluded from cases
    // they are a party to.
    let is_race_direction = UserRepository::new(db)
        .find_by_id(admin_user_id)
        .await?
        .is_some_and(|u| u.role == Role::SuperAdmin);

    if !is_race_direction {
        if let Some(admin_pilot) = pilot_repo.find_by_user_id(admin_user_id).await? {
            if admin_pilot.id == protest.accuser_id || admin_pilot.id == protest.accused_id {
                return Err(AppError::BadRequest(
                    "Admins involved in a protest cannot vote on it".to_string(),
                ));
            }
        }
    }

    if protest.status == ProtestStatus::AwaitingDefense {
        protest_repo
            .set_status(protest_id, ProtestStatus::Voting)
            .await?;
    }

    Ok(protest_repo
        .upsert_vote(protest_id, admin_user_id, choice)
        .await?)
}

/// Closes a protest with a final verdict and applies the penalty.
///
/// # Returns
/// - `Ok(Model)`: The closed protest
/// - `Err(AppError::NotFound)`: Protest does not exist
/// - `Err(AppError::Conflict)`: Protest already closed, nothing re-applied
pub async fn close(
    db: &DatabaseConnection,
    protest_id: i32,
    verdict: Verdict,
    reason: Option<String>,
) -> Result<entity::protest::Model, AppError> {
    let protest_repo = ProtestRepository::new(db);

    let Some(protest) = protest_repo.find_by_id(protest_id).await? else {
        return Err(AppError::NotFound(format!("Protest {protest_id} not found")));
    };

    if protest.status == ProtestStatus::Closed {
        return Err(AppError::Conflict(
            "This protest has already been closed".to_string(),
        ));
    }

    apply_verdict(db, &protest, verdict).await?;

    let closed = protest_repo
        .close(protest_id, verdict, reason, Utc::now())
        .await?;

    tracing::info!(
        "Protest {} closed with verdict {:?} against pilot {}",
        protest_id,
        verdict,
        protest.accused_id
    );

    Ok(closed)
}

/// Reopens a closed protest, refunding the penalty its verdict charged.
///
/// # Returns
/// - `Ok(Model)`: The protest, back in voting with no verdict
/// - `Err(AppError::NotFound)`: Protest does not exist
/// - `Err(AppError::Conflict)`: Protest is not closed, nothing to refund
pub async fn reopen(
    db: &DatabaseConnection,
    protest_id: i32,
) -> Result<entity::protest::Model, AppError> {
    let protest_repo = ProtestRepository::new(db);

    let Some(protest) = protest_repo.find_by_id(protest_id).await? else {
        return Err(AppError::NotFound(format!("Protest {protest_id} not found")));
    };

    if protest.status != ProtestStatus::Closed {
        return Err(AppError::Conflict(
            "Only a closed protest can be reopened".to_string(),
        ));
    }

    if let Some(verdict) = protest.verdict {
        refund_verdict(db, &protest, verdict).await?;
    }

    let reopened = protest_repo.reopen(protest_id).await?;

    tracing::info!("Protest {} reopened, verdict refunded", protest_id);

    Ok(reopened)
}

/// Deletes a protest. A closed protest's penalty is refunded first so the
/// accused pilot's license is left as if the protest never existed.
pub async fn delete(db: &DatabaseConnection, protest_id: i32) -> Result<(), AppError> {
    let protest_repo = ProtestRepository::new(db);

    let Some(protest) = protest_repo.find_by_id(protest_id).await? else {
        return Err(AppError::NotFound(format!("Protest {protest_id} not found")));
    };

    if protest.status == ProtestStatus::Closed {
        if let Some(verdict) = protest.verdict {
            refund_verdict(db, &protest, verdict).await?;
        }
    }

    protest_repo.delete(protest_id).await?;

    Ok(())
}

/// Charges the accused pilot for a verdict: license points, the warning
/// counter, and the mirrored deduction on their result line for the race.
async fn apply_verdict(
    db: &DatabaseConnection,
    protest: &entity::protest::Model,
    verdict: Verdict,
) -> Result<(), AppError> {
    let pilot_repo = PilotRepository::new(db);

    match verdict {
        Verdict::Dismissed => {}
        Verdict::Warning => {
            let pilot = pilot_repo.adjust_warnings(protest.accused_id, 1).await?;

            // Every third warning converts into a light penalty.
            let penalty = scoring::warning_penalty(pilot.warnings);
            if penalty > 0 {
                pilot_repo.adjust_cnh(protest.accused_id, -penalty).await?;
                mirror_on_result(db, protest, -(penalty as f64)).await?;
            }
        }
        verdict => {
            let penalty = scoring::verdict_penalty(verdict);
            pilot_repo.adjust_cnh(protest.accused_id, -penalty).await?;
            mirror_on_result(db, protest, -(penalty as f64)).await?;
        }
    }

    Ok(())
}

/// Exact inverse of [`apply_verdict`]. A warning refund only returns license
/// points when the current counter sits on a multiple of the conversion
/// threshold, meaning this specific warning was the one that charged them.
async fn refund_verdict(
    db: &DatabaseConnection,
    protest: &entity::protest::Model,
    verdict: Verdict,
) -> Result<(), AppError> {
    let pilot_repo = PilotRepository::new(db);

    match verdict {
        Verdict::Dismissed => {}
        Verdict::Warning => {
            let Some(pilot) = pilot_repo.find_by_id(protest.accused_id).await? else {
                return Ok(());
            };

            let penalty = scoring::warning_penalty(pilot.warnings);
            if penalty > 0 {
                pilot_repo.adjust_cnh(protest.accused_id, penalty).await?;
                mirror_on_result(db, protest, penalty as f64).await?;
            }

            pilot_repo.adjust_warnings(protest.accused_id, -1).await?;
        }
        verdict => {
            let penalty = scoring::verdict_penalty(verdict);
            pilot_repo.adjust_cnh(protest.accused_id, penalty).await?;
            mirror_on_result(db, protest, penalty as f64).await?;
        }
    }

    Ok(())
}

/// Applies a signed points delta to the accused pilot's result line for the
/// protested race, when one exists. Absent lines are fine; a protest can be
/// judged before results are saved.
async fn mirror_on_result(
    db: &DatabaseConnection,
    protest: &entity::protest::Model,
    delta: f64,
) -> Result<(), AppError> {
    let result_repo = RaceResultRepository::new(db);

    if let Some(result) = result_repo
        .find_by_race_and_pilot(protest.race_id, protest.accused_id)
        .await?
    {
        result_repo.adjust_points(result.id, delta).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Accuser, accused, a settled race, and an open protest between them.
    async fn case(
        db: &DatabaseConnection,
    ) -> (
        entity::pilot::Model,
        entity::pilot::Model,
        entity::race::Model,
        entity::protest::Model,
    ) {
        let (_, accuser) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (_, accused) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (_, race) = factory::helpers::create_race_with_season(db).await.unwrap();
        let protest = factory::protest::create_protest(db, race.id, accuser.id, accused.id)
            .await
            .unwrap();

        (accuser, accused, race, protest)
    }

    async fn pilot(db: &DatabaseConnection, id: i32) -> entity::pilot::Model {
        PilotRepository::new(db).find_by_id(id).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn closing_charges_license_and_mirrors_the_result_line() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, accused, race, protest) = case(db).await;
        let line = factory::race_result::create_race_result(db, race.id, accused.id)
            .await
            .unwrap();

        close(db, protest.id, Verdict::Medium, None).await.unwrap();

        assert_eq!(pilot(db, accused.id).await.cnh_points, 20);

        let line = RaceResultRepository::new(db)
            .find_by_id(line.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(line.points, 30.0);
    }

    #[tokio::test]
    async fn reopening_refunds_exactly_what_closing_charged() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, accused, race, protest) = case(db).await;
        let line = factory::race_result::create_race_result(db, race.id, accused.id)
            .await
            .unwrap();

        close(db, protest.id, Verdict::Severe, None).await.unwrap();
        let reopened = reopen(db, protest.id).await.unwrap();

        assert_eq!(reopened.status, ProtestStatus::Voting);
        assert_eq!(pilot(db, accused.id).await.cnh_points, 25);

        let restored = RaceResultRepository::new(db)
            .find_by_id(line.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(restored.points, line.points);
    }

    #[tokio::test]
    async fn closing_twice_is_rejected() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, accused, _, protest) = case(db).await;

        close(db, protest.id, Verdict::Light, None).await.unwrap();
        let second = close(db, protest.id, Verdict::Light, None).await;

        assert!(matches!(second, Err(AppError::Conflict(_))));
        assert_eq!(pilot(db, accused.id).await.cnh_points, 22);
    }

    #[tokio::test]
    async fn reopening_an_open_protest_is_rejected() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, _, protest) = case(db).await;

        assert!(matches!(
            reopen(db, protest.id).await,
            Err(AppError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn dismissed_verdict_charges_nothing() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, accused, _, protest) = case(db).await;

        close(db, protest.id, Verdict::Dismissed, None).await.unwrap();

        let accused = pilot(db, accused.id).await;
        assert_eq!(accused.cnh_points, 25);
        assert_eq!(accused.warnings, 0);
    }

    #[tokio::test]
    async fn early_warnings_only_count() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, accused, _, protest) = case(db).await;

        close(db, protest.id, Verdict::Warning, None).await.unwrap();

        let accused = pilot(db, accused.id).await;
        assert_eq!(accused.warnings, 1);
        assert_eq!(accused.cnh_points, 25);
    }

    #[tokio::test]
    async fn every_third_warning_converts_into_a_penalty() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, accuser) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let accused_user = factory::user::create_user(db).await.unwrap();
        let accused = factory::pilot::PilotFactory::new(db, accused_user.id)
            .warnings(2)
            .build()
            .await
            .unwrap();
        let (_, race) = factory::helpers::create_race_with_season(db).await.unwrap();
        let line = factory::race_result::create_race_result(db, race.id, accused.id)
            .await
            .unwrap();
        let protest = factory::protest::create_protest(db, race.id, accuser.id, accused.id)
            .await
            .unwrap();

        close(db, protest.id, Verdict::Warning, None).await.unwrap();

        let charged = pilot(db, accused.id).await;
        assert_eq!(charged.warnings, 3);
        assert_eq!(charged.cnh_points, 22);

        let mirrored = RaceResultRepository::new(db)
            .find_by_id(line.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(mirrored.points, line.points - 3.0);

        // Reopening the converting warning must give everything back.
        reopen(db, protest.id).await.unwrap();

        let refunded = pilot(db, accused.id).await;
        assert_eq!(refunded.warnings, 2);
        assert_eq!(refunded.cnh_points, 25);
    }

    #[tokio::test]
    async fn deleting_a_closed_protest_refunds_the_penalty() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, accused, _, protest) = case(db).await;

        close(db, protest.id, Verdict::Severe, None).await.unwrap();
        delete(db, protest.id).await.unwrap();

        assert_eq!(pilot(db, accused.id).await.cnh_points, 25);
        assert!(ProtestRepository::new(db)
            .find_by_id(protest.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn involved_admins_cannot_vote() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (accuser_user, accuser) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (_, accused) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (_, race) = factory::helpers::create_race_with_season(db).await.unwrap();
        let protest = factory::protest::create_protest(db, race.id, accuser.id, accused.id)
            .await
            .unwrap();

        let vote = cast_vote(db, protest.id, accuser_user.id, Verdict::Severe).await;

        assert!(matches!(vote, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn first_vote_moves_the_case_to_voting() {
        let test = TestBuilder::new().with_protest_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = factory::user::create_admin(db).await.unwrap();
        let (_, _, _, protest) = case(db).await;

        cast_vote(db, protest.id, admin.id, Verdict::Light).await.unwrap();

        let protest = ProtestRepository::new(db)
            .find_by_id(protest.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(protest.status, ProtestStatus::Voting);
    }
}

//! Pilot administration, including removal.
//!
//! A pilot with race history cannot simply be deleted: their result lines
//! anchor past standings. Removal therefore anonymizes the account instead,
//! and only pilots who never raced are purged outright.

use rand::Rng;
use sea_orm::DatabaseConnection;

use entity::enums::Role;

use crate::{
    data::{
        pilot::{PilotRepository, UpdatePilotParams},
        race_result::RaceResultRepository,
        user::UserRepository,
    },
    error::AppError,
    service::auth,
};

/// Removes a pilot from the league.
///
/// If the pilot has any race results, the account is deactivated, its
/// credentials scrambled, and the personal fields on the profile blanked so
/// the history stays intact under an anonymous name. Otherwise the pilot
/// profile and account are deleted.
///
/// # Returns
/// - `Ok(true)`: Pilot anonymized, history kept
/// - `Ok(false)`: Pilot purged entirely
/// - `Err(AppError::NotFound)`: Pilot does not exist
/// - `Err(AppError::BadRequest)`: Attempted to remove race direction
pub async fn remove_pilot(db: &DatabaseConnection, pilot_id: i32) -> Result<bool, AppError> {
    let pilot_repo = PilotRepository::new(db);
    let user_repo = UserRepository::new(db);
    let result_repo = RaceResultRepository::new(db);

    let Some(pilot) = pilot_repo.find_by_id(pilot_id).await? else {
        return Err(AppError::NotFound(format!("Pilot {pilot_id} not found")));
    };

    let Some(user) = user_repo.find_by_id(pilot.user_id).await? else {
        return Err(AppError::NotFound(format!(
            "User {} not found",
            pilot.user_id
        )));
    };

    if user.role == Role::SuperAdmin {
        return Err(AppError::BadRequest(
            "Race direction accounts cannot be removed".to_string(),
        ));
    }

    if result_repo.pilot_has_results(pilot_id).await? {
        let suffix: u32 = rand::rng().random();

        user_repo
            .update(
                user.id,
                Some(format!("inactive_{}_{}", user.id, suffix)),
                Some(format!("inactive_{}_{}@retired.invalid", user.id, suffix)),
                Some(auth::hash_password(&format!("retired-{suffix}"))?),
                Some(Role::Inactive),
            )
            .await?;

        pilot_repo
            .update(
                pilot_id,
                UpdatePilotParams {
                    nickname: Some(format!("Removed Pilot {pilot_id}")),
                    real_name: Some("Data Removed".to_string()),
                    photo_url: Some(None),
                    phone: Some(None),
                    team_id: Some(None),
                    ..Default::default()
                },
            )
            .await?;

        tracing::info!("Anonymized pilot {} with existing race history", pilot_id);

        Ok(true)
    } else {
        pilot_repo.delete(pilot_id).await?;
        user_repo.delete(user.id).await?;

        tracing::info!("Purged pilot {} with no race history", pilot_id);

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn anonymizes_a_pilot_with_race_history() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, pilot) = factory::helpers::create_pilot_with_user(db).await.unwrap();
        let (_, race) = factory::helpers::create_race_with_season(db).await.unwrap();
        factory::race_result::create_race_result(db, race.id, pilot.id)
            .await
            .unwrap();

        let anonymized = remove_pilot(db, pilot.id).await.unwrap();
        assert!(anonymized);

        let user = UserRepository::new(db)
            .find_by_id(user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.role, Role::Inactive);
        assert!(user.username.starts_with("inactive_"));

        let pilot = PilotRepository::new(db)
            .find_by_id(pilot.id)
            .await
            .unwrap()
            .unwrap();
        assert!(pilot.nickname.starts_with("Removed Pilot"));
        assert_eq!(pilot.real_name, "Data Removed");
        assert_eq!(pilot.phone, None);
        assert_eq!(pilot.photo_url, None);
        assert_eq!(pilot.team_id, None);

        // The result line must survive for the standings.
        assert!(RaceResultRepository::new(db)
            .pilot_has_results(pilot.id)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn purges_a_pilot_who_never_raced() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, pilot) = factory::helpers::create_pilot_with_user(db).await.unwrap();

        let anonymized = remove_pilot(db, pilot.id).await.unwrap();
        assert!(!anonymized);

        assert!(PilotRepository::new(db)
            .find_by_id(pilot.id)
            .await
            .unwrap()
            .is_none());
        assert!(UserRepository::new(db)
            .find_by_id(user.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn race_direction_cannot_be_removed() {
        let test = TestBuilder::new().with_result_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let director = factory::user::UserFactory::new(db)
            .role(Role::SuperAdmin)
            .build()
            .await
            .unwrap();
        let pilot = factory::pilot::create_pilot(db, director.id).await.unwrap();

        let result = remove_pilot(db, pilot.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}

use entity::enums::Role;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    controller::auth::SESSION_AUTH_USER_ID,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
};

/// Tests a request with no authenticated session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn no_session_is_rejected() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests a plain pilot account is denied the admin area.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn pilot_is_denied_admin_endpoints() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let pilot = factory::user::create_user(db).await.unwrap();
    session
        .insert(SESSION_AUTH_USER_ID, pilot.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}

/// Tests an admin account is turned away from race-direction endpoints
/// such as closing a season, verdicts, and the seletiva close.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn admin_is_denied_super_admin_endpoints() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await.unwrap();
    session
        .insert(SESSION_AUTH_USER_ID, admin.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SuperAdmin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}

/// Tests race direction passes both the admin and the super-admin checks.
///
/// Expected: Ok(User) from both checks
#[tokio::test]
async fn super_admin_passes_both_checks() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let director = factory::user::UserFactory::new(db)
        .role(Role::SuperAdmin)
        .build()
        .await
        .unwrap();
    session
        .insert(SESSION_AUTH_USER_ID, director.id)
        .await
        .unwrap();

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::Admin]).await.is_ok());
    assert!(guard.require(&[Permission::SuperAdmin]).await.is_ok());
}

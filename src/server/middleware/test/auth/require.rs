use super::*;

const ADMIN_ID: u64 = 623172201088286725;
const MEMBER_ID: u64 = 987654321;

fn admins() -> AdminAllowList {
    AdminAllowList::new([ADMIN_ID])
}

/// Tests that a logged-in user passes a check without permissions.
///
/// Expected: Ok(User) resolved from the session
#[tokio::test]
async fn grants_access_to_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id(MEMBER_ID.to_string())
        .name("RegularUser")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(MEMBER_ID).await?;

    let admins = admins();
    let guard = AuthGuard::new(db, session, &admins);
    let user = guard.require(&[]).await?;

    assert_eq!(user.discord_id, MEMBER_ID);
    assert_eq!(user.name, "RegularUser");
    assert!(!guard.is_admin(&user));

    Ok(())
}

/// Tests that an allow-listed user passes the admin check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_admin_access_to_listed_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id(ADMIN_ID.to_string())
        .build()
        .await?;
    AuthSession::new(session).set_user_id(ADMIN_ID).await?;

    let admins = admins();
    let guard = AuthGuard::new(db, session, &admins);
    let user = guard.require(&[Permission::Admin]).await?;

    assert_eq!(user.discord_id, ADMIN_ID);
    assert!(guard.is_admin(&user));

    Ok(())
}

/// Tests that a user missing from the allow-list is denied admin access.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user's ID
#[tokio::test]
async fn denies_admin_access_to_unlisted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id(MEMBER_ID.to_string())
        .build()
        .await?;
    AuthSession::new(session).set_user_id(MEMBER_ID).await?;

    let admins = admins();
    let result = AuthGuard::new(db, session, &admins)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, MEMBER_ID)
        }
        other => panic!("expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests that a request without a logged-in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_session_without_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admins = admins();
    let result = AuthGuard::new(db, session, &admins).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at an unknown user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(ADMIN_ID).await?;

    let admins = admins();
    let result = AuthGuard::new(db, session, &admins)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == ADMIN_ID
    ));

    Ok(())
}

//! Bootstrap and authentication flows

mod common;

use biblioteca::{audit::AuditLog, bootstrap, error::AppError, models::account::Role};

#[tokio::test]
async fn bootstrap_seeds_two_accounts_once() {
    let app = common::setup().await;
    let audit = AuditLog::new(app.audit_path.clone());

    let created = bootstrap::seed_default_accounts(&app.repository, &audit)
        .await
        .unwrap();
    assert_eq!(created, 2);
    assert_eq!(app.repository.accounts.count().await.unwrap(), 2);

    // Re-running creates nothing
    let created = bootstrap::seed_default_accounts(&app.repository, &audit)
        .await
        .unwrap();
    assert_eq!(created, 0);
    assert_eq!(app.repository.accounts.count().await.unwrap(), 2);

    let admin = app
        .repository
        .accounts
        .get_by_username("admin")
        .await
        .unwrap()
        .expect("admin account");
    assert_eq!(admin.role, Role::Admin);

    let user = app
        .repository
        .accounts
        .get_by_username("user")
        .await
        .unwrap()
        .expect("user account");
    assert_eq!(user.role, Role::User);
}

#[tokio::test]
async fn login_succeeds_with_default_credentials() {
    let app = common::setup().await;
    let audit = AuditLog::new(app.audit_path.clone());
    bootstrap::seed_default_accounts(&app.repository, &audit)
        .await
        .unwrap();

    let session = app.services.auth.login("admin", "admin123").await.unwrap();
    assert_eq!(session.username, "admin");
    assert_eq!(session.role, Role::Admin);

    let session = app.services.auth.login("user", "user123").await.unwrap();
    assert_eq!(session.role, Role::User);
}

#[tokio::test]
async fn login_failures_do_not_reveal_which_check_failed() {
    let app = common::setup().await;
    let audit = AuditLog::new(app.audit_path.clone());
    bootstrap::seed_default_accounts(&app.repository, &audit)
        .await
        .unwrap();

    let wrong_password = app
        .services
        .auth
        .login("admin", "nope")
        .await
        .expect_err("wrong password must fail");
    let unknown_user = app
        .services
        .auth
        .login("ghost", "admin123")
        .await
        .expect_err("unknown username must fail");
    let empty_input = app
        .services
        .auth
        .login("", "")
        .await
        .expect_err("empty input must fail");

    assert!(matches!(wrong_password, AppError::Authentication(_)));
    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    assert_eq!(wrong_password.to_string(), empty_input.to_string());
}

#[tokio::test]
async fn auth_events_are_recorded_with_actor() {
    let app = common::setup().await;
    let audit = AuditLog::new(app.audit_path.clone());
    bootstrap::seed_default_accounts(&app.repository, &audit)
        .await
        .unwrap();

    let session = app.services.auth.login("admin", "admin123").await.unwrap();
    let _ = app.services.auth.login("ghost", "whatever").await;
    app.services.auth.logout(session);

    let log = std::fs::read_to_string(&app.audit_path).unwrap();
    assert!(log.contains("[admin] Login succeeded"));
    assert!(log.contains("[System] Failed login attempt for 'ghost'"));
    assert!(log.contains("[admin] Logged out"));
}

//! Auth service unit tests.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::always;

use auth_service_lib::{AuthService, Authenticator};
use common::AppError;
use domain::{Insertable, NewUser, PasswordScheme, RegisterUser, User};
use storage_service_lib::MockStorage;

fn registration() -> RegisterUser {
    RegisterUser {
        username: "amara".to_string(),
        password: "password123".to_string(),
        name: "Amara Okafor".to_string(),
        business_name: "Okafor Ceramics".to_string(),
        email: "amara@example.com".to_string(),
        phone: Some("+234 800 000 0000".to_string()),
        profile_image: None,
    }
}

fn stored_user(scheme: PasswordScheme, password: &str) -> User {
    let password = scheme.hash(password).unwrap();
    registration().into_new_user(password).into_record(1, Utc::now())
}

#[tokio::test]
async fn test_register_hashes_password() {
    let mut storage = MockStorage::new();
    storage
        .expect_get_user_by_username()
        .withf(|username| username == "amara")
        .returning(|_| Ok(None));
    storage
        .expect_get_user_by_email()
        .withf(|email| email == "amara@example.com")
        .returning(|_| Ok(None));
    storage
        .expect_create_user()
        .with(always())
        .times(1)
        .returning(|user: NewUser| Ok(user.into_record(1, Utc::now())));

    let service = Authenticator::new(Arc::new(storage), PasswordScheme::Argon2);
    let user = service.register(registration()).await.unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.username, "amara");
    assert!(!user.password.is_plaintext());
    assert_ne!(user.password.as_str(), "password123");
    assert!(user.password.verify("password123"));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let mut storage = MockStorage::new();
    storage
        .expect_get_user_by_username()
        .returning(|_| Ok(Some(stored_user(PasswordScheme::Plaintext, "x"))));
    storage.expect_create_user().never();

    let service = Authenticator::new(Arc::new(storage), PasswordScheme::Plaintext);
    let err = service.register(registration()).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref field) if field == "Username"));
    assert_eq!(err.user_message(), "Username already exists");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let mut storage = MockStorage::new();
    storage
        .expect_get_user_by_username()
        .returning(|_| Ok(None));
    storage
        .expect_get_user_by_email()
        .returning(|_| Ok(Some(stored_user(PasswordScheme::Plaintext, "x"))));
    storage.expect_create_user().never();

    let service = Authenticator::new(Arc::new(storage), PasswordScheme::Plaintext);
    let err = service.register(registration()).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref field) if field == "Email"));
}

#[tokio::test]
async fn test_login_success() {
    let mut storage = MockStorage::new();
    storage
        .expect_get_user_by_username()
        .withf(|username| username == "amara")
        .returning(|_| Ok(Some(stored_user(PasswordScheme::Argon2, "password123"))));

    let service = Authenticator::new(Arc::new(storage), PasswordScheme::Argon2);
    let user = service.login("amara", "password123").await.unwrap();

    assert_eq!(user.email, "amara@example.com");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_match() {
    let mut known = MockStorage::new();
    known
        .expect_get_user_by_username()
        .returning(|_| Ok(Some(stored_user(PasswordScheme::Argon2, "password123"))));
    let mut unknown = MockStorage::new();
    unknown
        .expect_get_user_by_username()
        .returning(|_| Ok(None));

    let wrong_password = Authenticator::new(Arc::new(known), PasswordScheme::Argon2)
        .login("amara", "password124")
        .await
        .unwrap_err();
    let no_such_user = Authenticator::new(Arc::new(unknown), PasswordScheme::Argon2)
        .login("nobody", "password123")
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert!(matches!(no_such_user, AppError::InvalidCredentials));
    assert_eq!(wrong_password.status(), no_such_user.status());
    assert_eq!(wrong_password.user_message(), no_such_user.user_message());
}

#[tokio::test]
async fn test_login_plaintext_credentials() {
    let mut storage = MockStorage::new();
    storage
        .expect_get_user_by_username()
        .returning(|_| Ok(Some(stored_user(PasswordScheme::Plaintext, "password123"))));

    let service = Authenticator::new(Arc::new(storage), PasswordScheme::Plaintext);

    assert!(service.login("amara", "password123").await.is_ok());
    assert!(service.login("amara", "PASSWORD123").await.is_err());
}

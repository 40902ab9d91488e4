//! Authentication service - Handles registration and credential checks.
//!
//! There are no sessions or tokens: a successful login returns the user.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::{Password, PasswordScheme, RegisterUser, User, DUMMY_PASSWORD_HASH};
use storage_service_lib::Storage;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user. Fails with `Conflict` on a taken username or email.
    async fn register(&self, registration: RegisterUser) -> AppResult<User>;

    /// Check credentials. Unknown user and wrong password fail identically.
    async fn login(&self, username: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService over storage.
pub struct Authenticator {
    storage: Arc<dyn Storage>,
    scheme: PasswordScheme,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(storage: Arc<dyn Storage>, scheme: PasswordScheme) -> Self {
        Self { storage, scheme }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, registration: RegisterUser) -> AppResult<User> {
        if self
            .storage
            .get_user_by_username(&registration.username)
            .await?
            .is_some()
        {
            warn!(username = %registration.username, "Registration rejected: username taken");
            return Err(AppError::conflict("Username"));
        }

        if self
            .storage
            .get_user_by_email(&registration.email)
            .await?
            .is_some()
        {
            warn!("Registration rejected: email taken");
            return Err(AppError::conflict("Email"));
        }

        let password = self.scheme.hash(&registration.password)?;
        let user = self
            .storage
            .create_user(registration.into_new_user(password))
            .await?;

        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self.storage.get_user_by_username(username).await?;

        // Verify against a dummy hash for unknown users so both failure paths
        // cost the same.
        let verified = match &user {
            Some(user) => user.password.verify(password),
            None => Password::from_encoded(DUMMY_PASSWORD_HASH).verify(password),
        };

        match user {
            Some(user) if verified => {
                info!(user_id = user.id, "Login succeeded");
                Ok(user)
            }
            _ => {
                warn!(username = %username, "Login failed");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}

//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::password::Password;
use crate::record::{Insertable, Record};
use crate::Id;

/// User domain entity.
///
/// Use [`UserResponse`] for the wire form.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub password: Password,
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload (the insertable subset of a user).
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    /// Unique login name
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Account password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Registered business name
    #[validate(length(min = 1, message = "Business name is required"))]
    pub business_name: String,
    /// Contact email, unique across users
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
}

impl RegisterUser {
    /// Swap the plain text password for its stored credential.
    pub fn into_new_user(self, password: Password) -> NewUser {
        NewUser {
            username: self.username,
            password,
            name: self.name,
            business_name: self.business_name,
            email: self.email,
            phone: self.phone,
            profile_image: self.profile_image,
        }
    }
}

/// User creation input accepted by storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: Password,
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
}

impl Record for User {
    fn id(&self) -> Id {
        self.id
    }
}

impl Insertable for NewUser {
    type Record = User;

    fn into_record(self, id: Id, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            name: self.name,
            business_name: self.business_name,
            email: self.email,
            phone: self.phone,
            profile_image: self.profile_image,
            created_at,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: Id,
    pub username: String,
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            business_name: user.business_name,
            email: user.email,
            phone: user.phone,
            profile_image: user.profile_image,
            created_at: user.created_at,
        }
    }
}

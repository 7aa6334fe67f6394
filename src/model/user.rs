use entity::user_detail::Role;
use serde::{Deserialize, Serialize};

use crate::server::model::user::UserAccount;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub role: Role,
}

/// Update payload; the password is never changed through this route.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub role: Role,
}

/// Account DTO. `profile` is absent when no detail row exists for the
/// account; callers decide how to render that, nothing is defaulted here.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub profile: Option<ProfileDto>,
}

#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub role: Role,
}

impl From<UserAccount> for UserDto {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.user.id,
            username: account.user.username,
            profile: account.profile.map(|profile| ProfileDto {
                first_name: profile.first_name,
                last_name: profile.last_name,
                dni: profile.dni,
                email: profile.email,
                role: profile.role,
            }),
        }
    }
}

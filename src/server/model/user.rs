//! Domain models for accounts and profiles.

use entity::user_detail::Role;

/// Login account. The password never crosses the repository boundary;
/// credential checks happen in the auth service against the entity row.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }
}

/// Personal profile attached to an account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    pub fn from_entity(entity: entity::user_detail::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            dni: entity.dni,
            email: entity.email,
            role: entity.role,
        }
    }
}

/// Account together with its optional profile.
///
/// The profile being `None` is a real state, since accounts can exist
/// before their detail row. Every consumer has to decide what that means
/// for it rather than assuming a default role.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user: User,
    pub profile: Option<UserProfile>,
}

/// Parameters for creating an account with its profile.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub role: Role,
}

/// Parameters for updating an account and its profile. The password is
/// deliberately absent.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub email: String,
    pub role: Role,
}

//! User and profile factories.
//!
//! Creates login accounts and their detail rows with unique usernames and
//! DNI values, so tests can build students and admins without tripping the
//! unique constraints.

use entity::user_detail::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test user accounts.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - password: `"secret123"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            password: "secret123".to_string(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(self.password),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating user detail rows attached to an existing user.
pub struct UserDetailFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    first_name: String,
    last_name: String,
    dni: String,
    email: String,
    role: Role,
}

impl<'a> UserDetailFactory<'a> {
    /// Creates a new UserDetailFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Test"`, last_name: `"Person {id}"`
    /// - dni: unique 8-digit value
    /// - email: `"person{id}@example.com"`
    /// - role: `Role::Student`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            first_name: "Test".to_string(),
            last_name: format!("Person {}", id),
            dni: format!("{}", 30_000_000 + id),
            email: format!("person{}@example.com", id),
            role: Role::Student,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn dni(mut self, dni: impl Into<String>) -> Self {
        self.dni = dni.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the user detail entity into the database.
    pub async fn build(self) -> Result<entity::user_detail::Model, DbErr> {
        entity::user_detail::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            dni: ActiveValue::Set(self.dni),
            email: ActiveValue::Set(self.email),
            role: ActiveValue::Set(self.role),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user account with an attached student profile.
///
/// # Returns
/// - `Ok((user, detail))` - Created account and profile rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::user_detail::Model), DbErr> {
    let user = UserFactory::new(db).build().await?;
    let detail = UserDetailFactory::new(db, user.id).build().await?;
    Ok((user, detail))
}

/// Creates a user account with an attached admin profile.
pub async fn create_admin(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::user_detail::Model), DbErr> {
    let user = UserFactory::new(db).build().await?;
    let detail = UserDetailFactory::new(db, user.id)
        .role(Role::Admin)
        .build()
        .await?;
    Ok((user, detail))
}

/// Creates a bare user account with no detail row.
///
/// Useful for tests exercising the missing-profile paths.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::user::{User, UserProfile};

pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a login account.
    pub async fn create(&self, username: String, password: String) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Creates the profile row for an account.
    pub async fn create_profile(
        &self,
        user_id: i32,
        first_name: String,
        last_name: String,
        dni: String,
        email: String,
        role: entity::user_detail::Role,
    ) -> Result<UserProfile, DbErr> {
        let profile = entity::user_detail::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            dni: ActiveValue::Set(dni),
            email: ActiveValue::Set(email),
            role: ActiveValue::Set(role),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(UserProfile::from_entity(profile))
    }

    /// Gets an account by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Finds an account by username, optionally excluding one id.
    ///
    /// Used for the unique-username check.
    pub async fn find_by_username(
        &self,
        username: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<User>, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Username.eq(username));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(exclude_id));
        }

        let user = query.one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Gets the profile attached to an account, if any.
    ///
    /// Accounts without a profile are a legal state; callers decide what a
    /// missing profile means for them.
    pub async fn find_profile_by_user(&self, user_id: i32) -> Result<Option<UserProfile>, DbErr> {
        let profile = entity::prelude::UserDetail::find()
            .filter(entity::user_detail::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(profile.map(UserProfile::from_entity))
    }

    /// Gets a profile row by its own id.
    pub async fn find_profile_by_id(&self, id: i32) -> Result<Option<UserProfile>, DbErr> {
        let profile = entity::prelude::UserDetail::find_by_id(id).one(self.db).await?;

        Ok(profile.map(UserProfile::from_entity))
    }

    /// Finds a profile by DNI, optionally excluding one profile id.
    ///
    /// Used for the unique-DNI check.
    pub async fn find_profile_by_dni(
        &self,
        dni: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<UserProfile>, DbErr> {
        let mut query =
            entity::prelude::UserDetail::find().filter(entity::user_detail::Column::Dni.eq(dni));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::user_detail::Column::Id.ne(exclude_id));
        }

        let profile = query.one(self.db).await?;

        Ok(profile.map(UserProfile::from_entity))
    }

    /// Updates an account's username. The password is untouched.
    pub async fn update_username(&self, id: i32, username: String) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.username = ActiveValue::Set(username);

        let updated = active_model.update(self.db).await?;

        Ok(User::from_entity(updated))
    }

    /// Updates a profile row's fields.
    pub async fn update_profile(
        &self,
        id: i32,
        first_name: String,
        last_name: String,
        dni: String,
        email: String,
        role: entity::user_detail::Role,
    ) -> Result<UserProfile, DbErr> {
        let profile = entity::prelude::UserDetail::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User detail {} not found",
                id
            )))?;

        let mut active_model: entity::user_detail::ActiveModel = profile.into();
        active_model.first_name = ActiveValue::Set(first_name);
        active_model.last_name = ActiveValue::Set(last_name);
        active_model.dni = ActiveValue::Set(dni);
        active_model.email = ActiveValue::Set(email);
        active_model.role = ActiveValue::Set(role);

        let updated = active_model.update(self.db).await?;

        Ok(UserProfile::from_entity(updated))
    }

    /// Deletes a profile row.
    pub async fn delete_profile(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::UserDetail::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes an account. The caller removes the profile first.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}

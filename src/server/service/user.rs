use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, UserAccount},
};

const MIN_PASSWORD_LEN: usize = 6;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account together with its profile, in one transaction.
    ///
    /// # Returns
    /// - `Ok(UserAccount)`: The created account with its profile
    /// - `Err(AppError::Conflict)`: Username or DNI already taken
    /// - `Err(AppError::Validation)`: Field validation failed
    pub async fn create(&self, params: CreateUserParams) -> Result<UserAccount, AppError> {
        Self::validate_common(
            &params.username,
            &params.first_name,
            &params.last_name,
            &params.dni,
            &params.email,
        )?;
        if params.password.trim().len() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo.find_by_username(&params.username, None).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if repo.find_profile_by_dni(&params.dni, None).await?.is_some() {
            return Err(AppError::Conflict("DNI is already registered".to_string()));
        }

        let user = repo.create(params.username, params.password).await?;
        let profile = repo
            .create_profile(
                user.id,
                params.first_name,
                params.last_name,
                params.dni,
                params.email,
                params.role,
            )
            .await?;

        txn.commit().await?;

        Ok(UserAccount {
            user,
            profile: Some(profile),
        })
    }

    /// Gets an account with its optional profile.
    pub async fn get(&self, user_id: i32) -> Result<UserAccount, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let profile = repo.find_profile_by_user(user.id).await?;

        Ok(UserAccount { user, profile })
    }

    /// Updates an account and its profile. The password is never changed
    /// here. An account that had no profile gets one created from the
    /// submitted fields.
    ///
    /// # Returns
    /// - `Ok(UserAccount)`: The updated account
    /// - `Err(AppError::NotFound)`: User does not exist
    /// - `Err(AppError::Conflict)`: Username or DNI taken by someone else
    /// - `Err(AppError::Validation)`: Field validation failed
    pub async fn update(
        &self,
        user_id: i32,
        params: UpdateUserParams,
    ) -> Result<UserAccount, AppError> {
        Self::validate_common(
            &params.username,
            &params.first_name,
            &params.last_name,
            &params.dni,
            &params.email,
        )?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        let user = repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if repo
            .find_by_username(&params.username, Some(user_id))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let profile = repo.find_profile_by_user(user.id).await?;

        if repo
            .find_profile_by_dni(&params.dni, profile.as_ref().map(|p| p.id))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("DNI is already registered".to_string()));
        }

        let user = repo.update_username(user_id, params.username).await?;

        let profile = match profile {
            Some(profile) => {
                repo.update_profile(
                    profile.id,
                    params.first_name,
                    params.last_name,
                    params.dni,
                    params.email,
                    params.role,
                )
                .await?
            }
            None => {
                repo.create_profile(
                    user.id,
                    params.first_name,
                    params.last_name,
                    params.dni,
                    params.email,
                    params.role,
                )
                .await?
            }
        };

        txn.commit().await?;

        Ok(UserAccount {
            user,
            profile: Some(profile),
        })
    }

    /// Deletes an account and its profile, in one transaction.
    ///
    /// # Returns
    /// - `Ok(())`: Account deleted
    /// - `Err(AppError::NotFound)`: User does not exist
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        repo.find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(profile) = repo.find_profile_by_user(user_id).await? {
            repo.delete_profile(profile.id).await?;
        }

        repo.delete(user_id).await?;

        txn.commit().await?;

        Ok(())
    }

    fn validate_common(
        username: &str,
        first_name: &str,
        last_name: &str,
        dni: &str,
        email: &str,
    ) -> Result<(), AppError> {
        if username.trim().is_empty() || first_name.trim().is_empty() || last_name.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Username, first name, and last name are required".to_string(),
            ));
        }

        let dni = dni.trim();
        if dni.is_empty() {
            return Err(AppError::Validation("DNI is required".to_string()));
        }
        if !dni.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::Validation("DNI must be numeric".to_string()));
        }
        if dni.len() < 7 || dni.len() > 9 {
            return Err(AppError::Validation(
                "DNI must be 7 to 9 digits".to_string(),
            ));
        }

        if !email.contains('@') {
            return Err(AppError::Validation("Email is not valid".to_string()));
        }

        Ok(())
    }
}

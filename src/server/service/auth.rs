use chrono::Utc;
use entity::user_detail::Role;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::AuthClaims,
};

const TOKEN_TTL_HOURS: i64 = 8;

/// Issues and verifies the JWT bearer tokens used by the auth guard.
///
/// Tokens are signed with HS256 using the secret from configuration. The
/// claims are encoded once at login and decoded once per request by the
/// guard; nothing else touches the raw token.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for the given account, valid for eight hours.
    pub fn issue(&self, user_id: i32, username: String, role: Role) -> Result<String, AppError> {
        let claims = AuthClaims {
            sub: user_id,
            username,
            role,
            exp: (Utc::now() + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| AppError::InternalError(format!("Failed to sign token: {}", err)))
    }

    /// Verifies a token's signature and expiry, returning the caller's
    /// claims.
    pub fn verify(&self, token: &str) -> Result<AuthClaims, AuthError> {
        decode::<AuthClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })
    }
}

/// Result of a successful credential check.
pub struct LoginOutcome {
    pub token: String,
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Checks username/password and issues a token.
    ///
    /// # Returns
    /// - `Ok(Some(LoginOutcome))`: Credentials valid, token issued
    /// - `Ok(None)`: Unknown username or wrong password
    /// - `Err(AppError)`: Database or signing error
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<LoginOutcome>, AppError> {
        let Some(user) = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if user.password != password {
            return Ok(None);
        }

        // An account without a profile can still log in; it gets the
        // student role until an admin attaches a profile.
        let role = UserRepository::new(self.db)
            .find_profile_by_user(user.id)
            .await?
            .map(|profile| profile.role)
            .unwrap_or(Role::Student);

        let token = self.tokens.issue(user.id, user.username.clone(), role)?;

        Ok(Some(LoginOutcome {
            token,
            user_id: user.id,
            username: user.username,
            role,
        }))
    }
}

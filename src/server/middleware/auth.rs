use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::user_detail::Role;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthClaims,
    service::auth::TokenService,
};

pub enum Permission {
    Admin,
    Student,
}

/// Bearer-token guard resolving the caller's claims once per request.
///
/// Controllers call `require` first; the returned `AuthClaims` is the only
/// identity handlers work with. The guard does not hit the database: the
/// role travels inside the signed token.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// Verifies the bearer token and checks the required permissions.
    ///
    /// # Returns
    /// - `Ok(AuthClaims)`: Authenticated caller satisfying all permissions
    /// - `Err(AppError::AuthErr)`: Missing/invalid/expired token, or a
    ///   role the route does not accept
    pub fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<AuthClaims, AppError> {
        let claims = self.claims_from_headers(headers)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if claims.role != Role::Admin {
                        return Err(AuthError::AccessDenied("admin").into());
                    }
                }
                Permission::Student => {
                    if claims.role != Role::Student {
                        return Err(AuthError::AccessDenied("alumno").into());
                    }
                }
            }
        }

        Ok(claims)
    }

    fn claims_from_headers(&self, headers: &HeaderMap) -> Result<AuthClaims, AppError> {
        let header = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        Ok(self.tokens.verify(token)?)
    }
}

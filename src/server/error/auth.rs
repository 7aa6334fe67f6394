use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ApiResponse;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was supplied.
    #[error("Authorization token missing")]
    MissingToken,

    /// The token failed signature or claims validation.
    #[error("Invalid authorization token")]
    InvalidToken,

    /// The token's expiry has passed; the client must log in again.
    #[error("Authorization token expired")]
    ExpiredToken,

    /// The caller is authenticated but lacks the required role.
    ///
    /// # Fields
    /// - Name of the role the route is restricted to
    #[error("Access restricted to {0} users")]
    AccessDenied(&'static str),
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems map to 401 Unauthorized, role problems to 403 Forbidden.
/// Messages are intentionally generic; which check failed is not leaked
/// beyond the token/role distinction.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::AccessDenied(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        };

        (status, Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

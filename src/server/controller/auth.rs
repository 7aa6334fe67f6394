use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ApiResponse,
        auth::{LoginDto, LoginRequest, LoginUserDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// POST /login
///
/// Checks credentials and returns a bearer token with an account summary.
/// Wrong credentials answer 200 with a failure envelope rather than 401;
/// the 401 status is reserved for missing/invalid tokens on guarded
/// routes.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let outcome = AuthService::new(&state.db, &state.tokens)
        .login(&payload.username, &payload.password)
        .await?;

    let Some(outcome) = outcome else {
        return Ok((
            StatusCode::OK,
            Json(ApiResponse::failure("Invalid username or password")),
        )
            .into_response());
    };

    let dto = LoginDto {
        token: outcome.token,
        user: LoginUserDto {
            id: outcome.user_id,
            username: outcome.username,
            role: outcome.role,
        },
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Login successful", dto)),
    )
        .into_response())
}

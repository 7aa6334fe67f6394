use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ApiResponse,
        user::{CreateUserRequest, UpdateUserRequest, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let account = UserService::new(&state.db)
        .create(CreateUserParams {
            username: payload.username,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
            dni: payload.dni,
            email: payload.email,
            role: payload.role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "User created successfully",
            UserDto::from(account),
        )),
    ))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let account = UserService::new(&state.db).get(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "User retrieved successfully",
            UserDto::from(account),
        )),
    ))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let account = UserService::new(&state.db)
        .update(
            user_id,
            UpdateUserParams {
                username: payload.username,
                first_name: payload.first_name,
                last_name: payload.last_name,
                dni: payload.dni,
                email: payload.email,
                role: payload.role,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "User updated successfully",
            UserDto::from(account),
        )),
    ))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    UserService::new(&state.db).delete(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_empty("User deleted successfully")),
    ))
}

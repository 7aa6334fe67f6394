use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ApiResponse,
        news::{CreateNewsRequest, NewsDto, UpdateNewsRequest},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::news::{CreateNewsParams, UpdateNewsParams},
        service::news::NewsService,
        state::AppState,
    },
};

/// POST /news
pub async fn create_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNewsRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let news = NewsService::new(&state.db)
        .create(CreateNewsParams {
            title: payload.title,
            content: payload.content,
            image_url: payload.image_url,
            author_id: payload.author_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "News created successfully",
            NewsDto::from(news),
        )),
    ))
}

/// GET /news/{news_id}
pub async fn get_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(news_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let news = NewsService::new(&state.db).get(news_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "News retrieved successfully",
            NewsDto::from(news),
        )),
    ))
}

/// PUT /news/{news_id}
pub async fn update_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(news_id): Path<i32>,
    Json(payload): Json<UpdateNewsRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let news = NewsService::new(&state.db)
        .update(
            news_id,
            UpdateNewsParams {
                title: payload.title,
                content: payload.content,
                image_url: payload.image_url,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "News updated successfully",
            NewsDto::from(news),
        )),
    ))
}

/// DELETE /news/{news_id}
pub async fn delete_news(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(news_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    NewsService::new(&state.db).delete(news_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_empty("News deleted successfully")),
    ))
}

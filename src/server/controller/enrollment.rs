use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, Page},
        enrollment::{
            CreateEnrollmentRequest, EnrollmentDto, EnrollmentListItemDto,
            EnrollmentsByUserRequest,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::enrollment::EnrollmentService,
        state::AppState,
    },
};

/// POST /enrollments
pub async fn create_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEnrollmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let (enrollment, career) = EnrollmentService::new(&state.db)
        .create(payload.user_id, payload.career_id)
        .await?;

    let dto = EnrollmentDto {
        id: enrollment.id,
        user_id: payload.user_id,
        user_detail_id: enrollment.user_detail_id,
        career_id: career.id,
        career_name: career.name,
        cohort_start: career.cohort_start,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Enrollment created successfully", dto)),
    ))
}

/// POST /enrollments/by-user
pub async fn get_enrollments_by_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<EnrollmentsByUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let (rows, total) = EnrollmentService::new(&state.db)
        .get_paginated_by_user(payload.user_id, payload.page, payload.page_size)
        .await?;

    let items = rows.into_iter().map(EnrollmentListItemDto::from).collect();
    let page = Page::new(items, payload.page, payload.page_size, total);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Enrollments retrieved successfully", page)),
    ))
}

/// DELETE /enrollments/{enrollment_id}
pub async fn delete_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(enrollment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    EnrollmentService::new(&state.db).delete(enrollment_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_empty("Enrollment deleted successfully")),
    ))
}

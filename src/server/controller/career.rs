use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, Page},
        career::{
            CareerDto, CareerPricesDto, CareerPricesPageRequest, CareersPageRequest,
            PriceEntryDto, SaveCareerRequest,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::career::{CreateCareerParams, UpdateCareerParams},
        service::career::CareerService,
        state::AppState,
    },
};

/// POST /careers
pub async fn create_career(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SaveCareerRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let career = CareerService::new(&state.db)
        .create(CreateCareerParams {
            name: payload.name,
            monthly_price: payload.monthly_price,
            duration_months: payload.duration_months,
            cohort_start: payload.cohort_start,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Career created successfully",
            CareerDto::from(career),
        )),
    ))
}

/// GET /careers/{career_id}
pub async fn get_career(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(career_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let career = CareerService::new(&state.db).get(career_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Career retrieved successfully",
            CareerDto::from(career),
        )),
    ))
}

/// PUT /careers/{career_id}
pub async fn update_career(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(career_id): Path<i32>,
    Json(payload): Json<SaveCareerRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let career = CareerService::new(&state.db)
        .update(
            career_id,
            UpdateCareerParams {
                name: payload.name,
                monthly_price: payload.monthly_price,
                duration_months: payload.duration_months,
                cohort_start: payload.cohort_start,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Career updated successfully",
            CareerDto::from(career),
        )),
    ))
}

/// DELETE /careers/{career_id}
pub async fn delete_career(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(career_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    CareerService::new(&state.db).delete(career_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_empty("Career deleted successfully")),
    ))
}

/// POST /careers/paginated
pub async fn get_careers_paginated(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CareersPageRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let (careers, total) = CareerService::new(&state.db)
        .get_paginated(payload.search.as_deref(), payload.page, payload.page_size)
        .await?;

    let items = careers.into_iter().map(CareerDto::from).collect();
    let page = Page::new(items, payload.page, payload.page_size, total);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Careers retrieved successfully", page)),
    ))
}

/// POST /careers/prices/paginated
pub async fn get_career_prices_paginated(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CareerPricesPageRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let (career, entries, total) = CareerService::new(&state.db)
        .get_prices_paginated(payload.career_id, payload.page, payload.page_size)
        .await?;

    let items = entries.into_iter().map(PriceEntryDto::from).collect();
    let dto = CareerPricesDto {
        career_id: career.id,
        career_name: career.name,
        page: Page::new(items, payload.page, payload.page_size, total),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Price history retrieved successfully", dto)),
    ))
}

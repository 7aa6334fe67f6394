use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, Page},
        payment::{
            PaymentDto, PaymentListItemDto, PaymentsByEnrollmentDto, PaymentsByEnrollmentRequest,
            PaymentsPageRequest, RegisterPaymentRequest,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::payment::RegisterPaymentParams,
        service::billing::BillingService,
        state::AppState,
    },
};

/// POST /payments
pub async fn register_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RegisterPaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let payment = BillingService::new(&state.db)
        .register_payment(RegisterPaymentParams {
            enrollment_id: payload.enrollment_id,
            installment_no: payload.installment_no,
            paid_at: payload.paid_at,
            paid_in_advance: payload.paid_in_advance,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Payment registered successfully",
            PaymentDto::from(payment),
        )),
    ))
}

/// PUT /payments/{payment_id}/cancel
pub async fn cancel_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(payment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let payment = BillingService::new(&state.db).void_payment(payment_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Payment voided successfully",
            PaymentDto::from(payment),
        )),
    ))
}

/// DELETE /payments/{payment_id}
pub async fn delete_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(payment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    BillingService::new(&state.db).delete_payment(payment_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_empty("Payment deleted successfully")),
    ))
}

/// POST /payments/by-enrollment
pub async fn get_payments_by_enrollment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PaymentsByEnrollmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[])?;

    let (payments, total) = BillingService::new(&state.db)
        .get_paginated_by_enrollment(
            payload.enrollment_id,
            payload.include_voided,
            payload.page,
            payload.page_size,
        )
        .await?;

    let items = payments.into_iter().map(PaymentDto::from).collect();
    let dto = PaymentsByEnrollmentDto {
        enrollment_id: payload.enrollment_id,
        page: Page::new(items, payload.page, payload.page_size, total),
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Payments retrieved successfully", dto)),
    ))
}

/// POST /payments/paginated
pub async fn get_payments_paginated(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PaymentsPageRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens).require(&headers, &[Permission::Admin])?;

    let (rows, total) = BillingService::new(&state.db)
        .get_paginated(payload.search.as_deref(), payload.page, payload.page_size)
        .await?;

    let items = rows.into_iter().map(PaymentListItemDto::from).collect();
    let page = Page::new(items, payload.page, payload.page_size, total);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Payments retrieved successfully", page)),
    ))
}

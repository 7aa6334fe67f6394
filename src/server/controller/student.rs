//! Student self-service routes under `/me`.
//!
//! All handlers require the student role and resolve the caller from the
//! token claims alone; no ids are taken from the request, so a student can
//! only ever see their own data.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ApiResponse,
        student::{
            StudentCareerDto, StudentCareersDto, StudentPaymentDto, StudentPaymentsDto,
            StudentPaymentsQuery,
        },
        user::UserDto,
    },
    server::{
        data::{
            enrollment::EnrollmentRepository, payment::PaymentRepository, user::UserRepository,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// GET /me/profile
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[Permission::Student])?;

    let account = UserService::new(&state.db).get(claims.sub).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Profile retrieved successfully",
            UserDto::from(account),
        )),
    ))
}

/// GET /me/careers
pub async fn get_careers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[Permission::Student])?;

    let profile = UserRepository::new(&state.db)
        .find_profile_by_user(claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;

    let rows = EnrollmentRepository::new(&state.db)
        .list_by_profile(profile.id, None, None)
        .await?;

    let careers = rows
        .into_iter()
        .map(|row| StudentCareerDto {
            enrollment_id: row.enrollment.id,
            career_id: row.career.id,
            career_name: row.career.name,
            monthly_price: row.career.monthly_price,
            duration_months: row.career.duration_months,
            cohort_start: row.career.cohort_start,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Careers retrieved successfully",
            StudentCareersDto { careers },
        )),
    ))
}

/// GET /me/payments
pub async fn get_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StudentPaymentsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let claims = AuthGuard::new(&state.tokens).require(&headers, &[Permission::Student])?;

    let profile = UserRepository::new(&state.db)
        .find_profile_by_user(claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;

    let enrollments = EnrollmentRepository::new(&state.db)
        .list_by_profile(profile.id, query.career_id, query.enrollment_id)
        .await?;

    let payment_repo = PaymentRepository::new(&state.db);
    let mut payments = Vec::new();

    for row in enrollments {
        for payment in payment_repo.list_by_enrollment(row.enrollment.id).await? {
            payments.push(StudentPaymentDto {
                id: payment.id,
                enrollment_id: row.enrollment.id,
                career_id: row.career.id,
                career_name: row.career.name.clone(),
                installment_no: payment.installment_no,
                paid_at: payment.paid_at,
                amount: payment.amount,
                paid_in_advance: payment.paid_in_advance,
                voided: payment.is_voided(),
            });
        }
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(
            "Payments retrieved successfully",
            StudentPaymentsDto { payments },
        )),
    ))
}

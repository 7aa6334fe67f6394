use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::{
    model::api::ApiResponse,
    server::{
        controller::{auth, career, enrollment, news, payment, student, user},
        state::AppState,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/login", post(auth::login))
        .route("/users", post(user::create_user))
        .route(
            "/users/{user_id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/careers", post(career::create_career))
        .route("/careers/paginated", post(career::get_careers_paginated))
        .route(
            "/careers/prices/paginated",
            post(career::get_career_prices_paginated),
        )
        .route(
            "/careers/{career_id}",
            get(career::get_career)
                .put(career::update_career)
                .delete(career::delete_career),
        )
        .route("/enrollments", post(enrollment::create_enrollment))
        .route(
            "/enrollments/by-user",
            post(enrollment::get_enrollments_by_user),
        )
        .route(
            "/enrollments/{enrollment_id}",
            delete(enrollment::delete_enrollment),
        )
        .route("/payments", post(payment::register_payment))
        .route(
            "/payments/by-enrollment",
            post(payment::get_payments_by_enrollment),
        )
        .route("/payments/paginated", post(payment::get_payments_paginated))
        .route("/payments/{payment_id}/cancel", put(payment::cancel_payment))
        .route("/payments/{payment_id}", delete(payment::delete_payment))
        .route("/news", post(news::create_news))
        .route(
            "/news/{news_id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route("/me/profile", get(student::get_profile))
        .route("/me/careers", get(student::get_careers))
        .route("/me/payments", get(student::get_payments))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::ok_empty("School API OK")))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Payment and stylist routes.
//!
//! Checkout is delegated to the configured [`PaymentProvider`]; until a
//! provider is integrated these endpoints only report unavailability.
//!
//! [`PaymentProvider`]: crate::services::PaymentProvider

use crate::error::{AppError, Result};
use crate::services::payments::{CreatePaymentRequest, CreatePaymentResponse, PaymentError};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use std::sync::Arc;

/// Payment routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/create-payment", post(create_payment))
        .route("/api/yookassa-webhook", post(payment_webhook))
        .route("/api/stylist-advice", post(stylist_advice))
}

/// Start a checkout for a plan upgrade (POST).
///
/// Only a well-formed request reaches the provider. Anything else gets the
/// same unavailable answer the provider gives.
async fn create_payment(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CreatePaymentResponse>> {
    let request: CreatePaymentRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Unparseable payment request");
            return Err(PaymentError::Unavailable.into());
        }
    };
    let checkout = state.payments.create_payment(&request)?;

    tracing::info!(email = %request.email, plan = %request.plan, "Checkout created");
    Ok(Json(checkout))
}

/// Payment provider notifications (POST). Acknowledged and logged only.
async fn payment_webhook(body: Bytes) -> StatusCode {
    tracing::info!(
        bytes = body.len(),
        payload = %String::from_utf8_lossy(&body),
        "Payment webhook received"
    );
    StatusCode::OK
}

/// Styling advice is not offered yet (POST).
async fn stylist_advice() -> AppError {
    AppError::NotImplemented("Stylist advice is not available yet".to_string())
}

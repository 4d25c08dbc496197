// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Payment provider boundary.
//!
//! The admin panel asks the provider for a checkout URL when a seller is
//! upgraded. No provider is integrated yet, so the default implementation
//! always reports the service as unavailable.

use crate::models::PlanId;
use serde::{Deserialize, Serialize};

/// Request to start a checkout for a seller's plan upgrade.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentRequest {
    pub email: String,
    pub plan: PlanId,
}

/// Checkout created by the provider.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentResponse {
    /// Where the browser should be sent to pay
    pub url: String,
}

/// A hosted-checkout payment provider.
pub trait PaymentProvider: Send + Sync {
    fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<CreatePaymentResponse, PaymentError>;
}

/// Provider used until a real integration is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailablePaymentProvider;

impl PaymentProvider for UnavailablePaymentProvider {
    fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<CreatePaymentResponse, PaymentError> {
        tracing::warn!(
            email = %request.email,
            plan = %request.plan,
            "Payment requested but no provider is configured"
        );
        Err(PaymentError::Unavailable)
    }
}

/// Errors from payment operations.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payments are temporarily unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_provider_rejects() {
        let request = CreatePaymentRequest {
            email: "a@x.com".to_string(),
            plan: PlanId::Basic,
        };
        let err = UnavailablePaymentProvider
            .create_payment(&request)
            .unwrap_err();
        assert_eq!(err.to_string(), "payments are temporarily unavailable");
    }
}

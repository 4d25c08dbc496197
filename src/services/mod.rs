// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod images;
pub mod payments;
pub mod plan_policy;

pub use images::ImageStorage;
pub use payments::{PaymentProvider, UnavailablePaymentProvider};
pub use plan_policy::evaluate;

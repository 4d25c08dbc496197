// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod analytics;
pub mod item;
pub mod plan;
pub mod seller;

pub use analytics::AnalyticsEvent;
pub use item::Item;
pub use plan::{PlanDefinition, PlanId, PlanStatus, PlanTable};
pub use seller::Seller;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Seller access evaluation.
//!
//! Access is recomputed from the seller record on every check and never
//! stored. A paid plan on record is checked first; if it is lapsed or over
//! quota the seller is still evaluated against the trial window.

use crate::models::{PlanId, PlanStatus, PlanTable, Seller};
use crate::time_utils::parse_utc_or_epoch;
use chrono::{DateTime, Duration, Utc};

/// Decide whether a seller currently has access and under which plan.
pub fn evaluate(seller: Option<&Seller>, plans: &PlanTable, now: DateTime<Utc>) -> PlanStatus {
    let Some(seller) = seller else {
        return PlanStatus::INACTIVE;
    };

    if let Some(plan) = seller.current_plan.filter(|p| *p != PlanId::Trial) {
        let paid_until = parse_utc_or_epoch(seller.paid_until.as_deref());
        if now <= paid_until && seller.items_count <= plans.get(plan).max_items {
            return PlanStatus::active(plan);
        }
    }

    let trial = plans.get(PlanId::Trial);
    let created_at = parse_utc_or_epoch(Some(&seller.created_at));
    let trial_end = created_at + Duration::days(i64::from(trial.validity_days));
    if now <= trial_end && seller.items_count <= trial.max_items {
        return PlanStatus::active(PlanId::Trial);
    }

    PlanStatus::INACTIVE
}

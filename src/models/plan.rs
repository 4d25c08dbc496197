// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Subscription plans and access status.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Identifier of a subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "views/generated/")
)]
pub enum PlanId {
    Trial,
    Basic,
    Pro,
}

impl PlanId {
    /// Plans a seller can pay for.
    pub const PAID: [PlanId; 2] = [PlanId::Basic, PlanId::Pro];

    pub fn as_str(self) -> &'static str {
        match self {
            PlanId::Trial => "trial",
            PlanId::Basic => "basic",
            PlanId::Pro => "pro",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static definition of a plan's limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDefinition {
    /// Display name
    pub name: &'static str,
    /// Maximum number of items a seller may hold on this plan
    pub max_items: u32,
    /// Length of the plan window in days
    pub validity_days: u32,
    /// Price in rubles
    pub price_rub: u32,
}

/// Plan table keyed by [`PlanId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanTable {
    pub trial: PlanDefinition,
    pub basic: PlanDefinition,
    pub pro: PlanDefinition,
}

impl Default for PlanTable {
    fn default() -> Self {
        Self {
            trial: PlanDefinition {
                name: "Trial",
                max_items: 25,
                validity_days: 7,
                price_rub: 0,
            },
            basic: PlanDefinition {
                name: "Basic",
                max_items: 50,
                validity_days: 30,
                price_rub: 15_000,
            },
            pro: PlanDefinition {
                name: "Pro",
                max_items: 150,
                validity_days: 30,
                price_rub: 30_000,
            },
        }
    }
}

impl PlanTable {
    pub fn get(&self, id: PlanId) -> &PlanDefinition {
        match id {
            PlanId::Trial => &self.trial,
            PlanId::Basic => &self.basic,
            PlanId::Pro => &self.pro,
        }
    }
}

/// Result of evaluating a seller against the plan table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStatus {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanId>,
}

impl PlanStatus {
    pub const INACTIVE: PlanStatus = PlanStatus {
        active: false,
        plan: None,
    };

    pub fn active(plan: PlanId) -> Self {
        Self {
            active: true,
            plan: Some(plan),
        }
    }
}

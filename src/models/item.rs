// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Clothing item model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Item record stored in items.json and returned by `GET /api/item/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "views/generated/")
)]
pub struct Item {
    /// Generated item ID (referenced by widget URLs)
    pub id: String,
    /// Owning seller's email (not enforced)
    pub seller_email: String,
    /// Public path of the front photo ("/uploads/...")
    pub photo_front: String,
    /// Public path of the back photo ("/uploads/...")
    pub photo_back: String,
    /// Size label -> measurements, shape chosen by the seller
    #[cfg_attr(feature = "binding-generation", ts(type = "Record<string, unknown>"))]
    pub size_table: serde_json::Value,
    /// Upload time (ISO 8601)
    pub created_at: String,
}

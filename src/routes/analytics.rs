// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fit analytics recording.

use crate::db::Collection;
use crate::error::Result;
use crate::models::AnalyticsEvent;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Analytics routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/analytics", post(record_event))
}

/// Try-on event submitted by the widget. Fields are taken as sent.
#[derive(Debug, Deserialize)]
struct AnalyticsRequest {
    item_id: Option<Value>,
    height: Option<Value>,
    chest: Option<Value>,
    waist: Option<Value>,
    hips: Option<Value>,
    weight: Option<Value>,
    tried_on: Option<Value>,
}

/// Truthiness as the widget script sees it: null, false, 0 and "" are unset.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Item reference as stored: strings verbatim, anything else as its JSON text.
fn item_reference(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[derive(Serialize)]
struct OkResponse {
    ok: bool,
}

/// Append a try-on event.
///
/// Always answers `{"ok": true}`. Only events with an item ID and a set
/// try-on flag are kept; anything else, including a non-JSON body, is dropped.
async fn record_event(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<AnalyticsRequest>, JsonRejection>,
) -> Result<Json<OkResponse>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Ignoring unparseable analytics event");
            return Ok(Json(OkResponse { ok: true }));
        }
    };

    let item_id = match request.item_id {
        Some(id) if is_truthy(Some(&id)) && is_truthy(request.tried_on.as_ref()) => {
            item_reference(id)
        }
        _ => {
            tracing::debug!("Ignoring analytics event without item_id or tried_on");
            return Ok(Json(OkResponse { ok: true }));
        }
    };

    let event = AnalyticsEvent {
        item_id,
        height: request.height,
        chest: request.chest,
        waist: request.waist,
        hips: request.hips,
        weight: request.weight,
        tried_on: true,
        timestamp: format_utc_rfc3339(chrono::Utc::now()),
    };

    let mut store = state.store.lock().await;
    tracing::info!(item_id = %event.item_id, "Analytics event recorded");
    store.record_event(event);
    store.save(Collection::Analytics)?;

    Ok(Json(OkResponse { ok: true }))
}

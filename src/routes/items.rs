// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Item upload and lookup routes.

use crate::error::{AppError, Result};
use crate::models::Item;
use crate::services::plan_policy;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// Item routes. The upload body limit comes from the config.
pub fn routes(max_upload_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/item/{id}", get(get_item))
        .route(
            "/api/items",
            post(upload_item).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}

// ─── Lookup ──────────────────────────────────────────────────

/// Get a single item for the try-on widget.
async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Item>> {
    let store = state.store.lock().await;
    store
        .find_item(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))
}

// ─── Upload ──────────────────────────────────────────────────

/// Upload response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "views/generated/")
)]
pub struct UploadResponse {
    pub widget_url: String,
}

/// A file part of the upload form.
struct UploadedFile {
    file_name: Option<String>,
    bytes: Vec<u8>,
}

/// Fields collected from the multipart upload form.
#[derive(Default)]
struct UploadForm {
    seller_email: Option<String>,
    size_table: Option<String>,
    photo_front: Option<UploadedFile>,
    photo_back: Option<UploadedFile>,
}

impl UploadForm {
    async fn read(multipart: &mut Multipart) -> Result<Self> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed upload: {}", e)))?
        {
            let name = field.name().map(str::to_owned);
            let file_name = field.file_name().map(str::to_owned);

            match name.as_deref() {
                Some("seller_email") | Some("size_table") => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("Malformed upload: {}", e)))?;
                    if name.as_deref() == Some("seller_email") {
                        form.seller_email = Some(text);
                    } else {
                        form.size_table = Some(text);
                    }
                }
                Some(slot @ ("photo_front" | "photo_back")) => {
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("Malformed upload: {}", e)))?;
                    // Browsers send an empty part when no file was chosen
                    if bytes.is_empty() {
                        continue;
                    }
                    let file = UploadedFile {
                        file_name,
                        bytes: bytes.to_vec(),
                    };
                    if slot == "photo_front" {
                        form.photo_front = Some(file);
                    } else {
                        form.photo_back = Some(file);
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// Parse the optional size table; absent or blank means an empty table.
fn parse_size_table(raw: Option<&str>) -> Result<serde_json::Value> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(serde_json::json!({})),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|_| AppError::BadRequest("Invalid size table format".to_string())),
    }
}

/// Upload a new item with front and back photos.
///
/// The seller is registered on first upload and must have an active plan.
async fn upload_item(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let form = UploadForm::read(&mut multipart).await?;

    let seller_email = form
        .seller_email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_owned);
    let (Some(seller_email), Some(photo_front), Some(photo_back)) =
        (seller_email, form.photo_front, form.photo_back)
    else {
        return Err(AppError::BadRequest(
            "seller_email and two item photos are required".to_string(),
        ));
    };

    let now = chrono::Utc::now();
    let mut store = state.store.lock().await;

    let (seller, created) = store.seller_or_create(&seller_email, format_utc_rfc3339(now));
    if created {
        tracing::info!(email = %seller_email, "Registered new trial seller");
    }

    let status = plan_policy::evaluate(Some(seller), &state.plans, now);
    if !status.active {
        tracing::warn!(
            email = %seller_email,
            items_count = seller.items_count,
            plan = ?seller.current_plan,
            "Upload rejected: seller inactive"
        );
        return Err(AppError::QuotaExceeded(
            "Subscription inactive or item quota exceeded".to_string(),
        ));
    }

    let size_table = parse_size_table(form.size_table.as_deref())?;

    let photo_front = state
        .images
        .store(photo_front.file_name.as_deref(), &photo_front.bytes)
        .await?;
    let photo_back = match state
        .images
        .store(photo_back.file_name.as_deref(), &photo_back.bytes)
        .await
    {
        Ok(path) => path,
        Err(e) => {
            state.images.remove(&photo_front).await;
            return Err(e.into());
        }
    };

    let item = Item {
        id: Uuid::new_v4().to_string(),
        seller_email: seller_email.clone(),
        photo_front,
        photo_back,
        size_table,
        created_at: format_utc_rfc3339(now),
    };
    let item_id = item.id.clone();
    let photos = [item.photo_front.clone(), item.photo_back.clone()];

    if let Err(e) = store.commit_item(item) {
        for photo in &photos {
            state.images.remove(photo).await;
        }
        return Err(e.into());
    }

    tracing::info!(
        item_id = %item_id,
        email = %seller_email,
        plan = ?status.plan,
        "Item uploaded"
    );

    Ok(Json(UploadResponse {
        widget_url: widget_url(&state, &headers, &item_id),
    }))
}

/// Build the shareable widget link for an item.
fn widget_url(state: &AppState, headers: &HeaderMap, item_id: &str) -> String {
    let base = match &state.config.public_base_url {
        Some(base) => base.clone(),
        None => {
            let host = headers
                .get(header::HOST)
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");
            format!("http://{}", host)
        }
    };
    format!("{}/widget?item={}", base, item_id)
}

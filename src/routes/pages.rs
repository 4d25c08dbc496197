// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static HTML pages.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;

/// Page routes: each serves `{views_dir}/{name}.html`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seller", get(seller_page))
        .route("/widget", get(widget_page))
        .route("/public-offer", get(public_offer_page))
        .route("/privacy", get(privacy_page))
}

/// Seller upload form.
async fn seller_page(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    page(&state, "seller").await
}

/// Try-on widget (reads `?item=<id>` client-side).
async fn widget_page(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    page(&state, "widget").await
}

async fn public_offer_page(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    page(&state, "public-offer").await
}

async fn privacy_page(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    page(&state, "privacy").await
}

async fn page(state: &AppState, name: &str) -> Result<Html<String>> {
    let path = state.config.views_dir.join(format!("{}.html", name));

    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(Html(body)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::NotFound(format!("Page {}", path.display())))
        }
        Err(e) => Err(AppError::Internal(
            anyhow::Error::new(e).context(format!("Failed to read {}", path.display())),
        )),
    }
}

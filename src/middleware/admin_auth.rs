// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin panel authentication middleware.

use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Login form returned with 401; it retries the page with the typed password.
const LOGIN_FORM: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>FitMirror Admin</title></head>
<body>
  <h2>FitMirror Admin</h2>
  <input type="password" id="pwd">
  <button onclick="login()">Sign in</button>
  <div id="panel"></div>
  <script>
    function login() {
      fetch('/admin', { headers: { 'Authorization': 'Bearer ' + document.getElementById('pwd').value } })
        .then(r => r.ok ? r.text() : Promise.reject())
        .then(html => { document.open(); document.write(html); document.close(); })
        .catch(() => alert('Wrong password'));
    }
  </script>
</body></html>"#;

/// Middleware that requires `Authorization: Bearer <ADMIN_PASSWORD>`.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let authorized = provided.is_some_and(|password| {
        password
            .as_bytes()
            .ct_eq(state.config.admin_password.as_bytes())
            .into()
    });

    if !authorized {
        tracing::warn!(
            header_present = provided.is_some(),
            "Rejected admin request"
        );
        return (StatusCode::UNAUTHORIZED, Html(LOGIN_FORM)).into_response();
    }

    next.run(request).await
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin panel authentication tests.
//!
//! These tests verify that:
//! 1. The panel rejects requests without the shared password
//! 2. The panel renders the seller table with the right password

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use fitmirror::models::{PlanId, Seller};
use fitmirror::time_utils::format_utc_rfc3339;
use tower::ServiceExt;

mod common;

fn admin_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/admin");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_admin_without_header_gets_login_form() {
    let app = common::create_test_app();

    let response = app.router.clone().oneshot(admin_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let html = common::body_text(response).await;
    assert!(html.contains("type=\"password\""));
}

#[tokio::test]
async fn test_admin_with_wrong_password() {
    let app = common::create_test_app();

    for value in [
        "Bearer wrong",
        "Bearer ",
        common::ADMIN_PASSWORD,
        &format!("Basic {}", common::ADMIN_PASSWORD),
        &format!("Bearer {}x", common::ADMIN_PASSWORD),
    ] {
        let response = app
            .router
            .clone()
            .oneshot(admin_request(Some(value)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", value);
    }
}

#[tokio::test]
async fn test_admin_lists_sellers() {
    let now = Utc::now();
    let sellers = [
        Seller::new_trial("trial@x.com", format_utc_rfc3339(now)),
        Seller {
            email: "pro@x.com".to_string(),
            created_at: format_utc_rfc3339(now - Duration::days(100)),
            items_count: 120,
            current_plan: Some(PlanId::Pro),
            paid_until: Some(format_utc_rfc3339(now + Duration::days(20))),
        },
    ];
    let app = common::create_test_app_with_sellers(&sellers);

    let response = app
        .router
        .clone()
        .oneshot(admin_request(Some(&format!(
            "Bearer {}",
            common::ADMIN_PASSWORD
        ))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = common::body_text(response).await;
    assert!(html.contains("trial@x.com"));
    assert!(html.contains("pro@x.com"));
    assert!(html.contains("<td>Pro</td>"));
    assert!(html.contains("active (pro)"));
    assert!(html.contains("/api/create-payment"));
}

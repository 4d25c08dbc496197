// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use fitmirror::config::Config;
use fitmirror::models::Seller;
use fitmirror::routes::create_router;
use fitmirror::AppState;
use std::sync::Arc;
use tempfile::TempDir;

pub const ADMIN_PASSWORD: &str = "test_admin_password";
pub const TEST_HOST: &str = "shop.test";
const BOUNDARY: &str = "fitmirror-test-boundary";

/// A router over an isolated temp directory.
///
/// Keep the struct alive for the duration of the test; dropping it removes
/// the data, uploads and views directories.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
    pub dir: TempDir,
}

/// Create a test app with empty collections.
#[allow(dead_code)]
pub fn create_test_app() -> TestApp {
    create_test_app_with_sellers(&[])
}

/// Create a test app whose sellers.json is seeded before startup.
#[allow(dead_code)]
pub fn create_test_app_with_sellers(sellers: &[Seller]) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let config = Config {
        data_dir: dir.path().join("data"),
        uploads_dir: dir.path().join("uploads"),
        views_dir: dir.path().join("views"),
        admin_password: ADMIN_PASSWORD.to_string(),
        ..Config::default()
    };

    if !sellers.is_empty() {
        std::fs::create_dir_all(&config.data_dir).unwrap();
        std::fs::write(
            config.data_dir.join("sellers.json"),
            serde_json::to_string_pretty(sellers).unwrap(),
        )
        .unwrap();
    }

    let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
    TestApp {
        router: create_router(state.clone()),
        state,
        dir,
    }
}

/// One part of a multipart form.
#[allow(dead_code)]
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        bytes: &'a [u8],
    },
}

/// Build a `multipart/form-data` upload to `POST /api/items`.
#[allow(dead_code)]
pub fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/items")
        .header(header::HOST, TEST_HOST)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// The two photo parts every valid upload needs.
#[allow(dead_code)]
pub fn photo_parts() -> [Part<'static>; 2] {
    [
        Part::File {
            name: "photo_front",
            file_name: "front.jpg",
            bytes: b"\xFF\xD8\xFFfront",
        },
        Part::File {
            name: "photo_back",
            file_name: "back.png",
            bytes: b"\x89PNGback",
        },
    ]
}

/// Read a response body as raw bytes.
#[allow(dead_code)]
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Read a response body as text.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).expect("response should be JSON")
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitMirror: virtual try-on widgets for marketplace sellers
//!
//! This crate provides the backend for uploading clothing items, handing
//! out shareable widget links, tracking seller plans and recording fit
//! analytics.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use anyhow::Context;
use config::Config;
use db::JsonStore;
use models::PlanTable;
use services::{ImageStorage, PaymentProvider, UnavailablePaymentProvider};
use tokio::sync::Mutex;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// All persisted collections; handlers hold the lock for a whole
    /// load-modify-save cycle.
    pub store: Mutex<JsonStore>,
    pub plans: PlanTable,
    pub images: ImageStorage,
    pub payments: Box<dyn PaymentProvider>,
}

impl AppState {
    /// Open the store and upload directory named by the config.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = JsonStore::open(&config.data_dir).context("Failed to open data store")?;
        let images =
            ImageStorage::new(&config.uploads_dir).context("Failed to prepare uploads directory")?;

        Ok(Self {
            config,
            store: Mutex::new(store),
            plans: PlanTable::default(),
            images,
            payments: Box::new(UnavailablePaymentProvider),
        })
    }
}

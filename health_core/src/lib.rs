#![forbid(unsafe_code)]

//! Core domain model and business logic for Healthlog.
//!
//! This crate provides:
//! - Domain types (entries, BMI categories, aggregate views)
//! - BMI calculation and rule-based recommendations
//! - Rolling averages and chart series
//! - The entry store and its persistence collaborators
//! - CSV export
//! - The presenter contract and the action controller

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod bmi;
pub mod recommendation;
pub mod averages;
pub mod storage;
pub mod store;
pub mod export;
pub mod presenter;
pub mod tracker;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use bmi::{bmi_category, compute_bmi, parse_measurement};
pub use recommendation::{generate_recommendation, FragmentKind, Recommendation};
pub use averages::{exercise_series, sleep_series, weekly_averages};
pub use storage::{EntryPersistence, JsonFileStorage, MemoryStorage};
pub use store::EntryStore;
pub use export::{export_csv, write_export};
pub use presenter::Presenter;
pub use tracker::HealthTracker;

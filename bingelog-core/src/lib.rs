//! # bingelog-core
//!
//! Core library for bingelog - a binge-eating recovery tracker.
//!
//! This library provides:
//! - Domain types for binge logs, urge check-ins, and urge-timer outcomes
//! - A single-blob JSON store with aggregate bookkeeping
//! - Pure analytics: streaks, patterns, risk prediction, trends, milestones
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Data flows through three layers:
//! - **Events:** Immutable, timestamped entries appended through the store
//! - **Counters:** Aggregates (`UserStats`) maintained at append time
//! - **Derived:** Everything else is recomputed from `(events, now)` on read
//!
//! Analytics take an explicit `now` and never touch the clock, so every
//! result is reproducible. The optional AI oracle layers on top and is
//! never load-bearing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bingelog_core::{analytics, BlobStore, Store};
//! use chrono::Utc;
//!
//! let mut store = Store::open(BlobStore::at_default_path());
//!
//! let now = Utc::now();
//! let grant = store.add_binge_log(vec!["Stressed".into()], "Home".into(), None, now);
//! for achieved in &grant.granted {
//!     println!("milestone: {}", achieved.milestone.title);
//! }
//!
//! if let Some(alert) = analytics::predictive_alert(&store.state().logs, now) {
//!     println!("{}", alert.message);
//! }
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use history::HistoryGate;
pub use store::{BlobStore, Store};
pub use types::*;

// Public modules
pub mod analytics;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod logging;
pub mod oracle;
pub mod store;
pub mod types;

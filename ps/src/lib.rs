//! PrefStore - durable trip preference storage
//!
//! Persists the last submitted trip-preference record per user id in a
//! single SQLite table. A new submission fully replaces the prior
//! record; no history is kept.
//!
//! # Example
//!
//! ```ignore
//! use prefstore::{PreferenceRecord, PreferenceStore};
//!
//! let store = PreferenceStore::open("preferences.db")?;
//! store.put("u1", &record)?;
//! let prior = store.get("u1")?;
//! ```

pub mod cli;
pub mod config;
mod store;

pub use store::{PreferenceRecord, PreferenceStore, StoreError};

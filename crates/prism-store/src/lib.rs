//! # prism-store: Persistence Layer for the Prism Kiosk
//!
//! This crate provides durable local storage for the kiosk.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Prism Kiosk Data Flow                             │
//! │                                                                         │
//! │  Kiosk Command (place_order)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    prism-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌─────────────┐  │   │
//! │  │   │     Store     │    │ SessionLedger  │    │  Migrations │  │   │
//! │  │   │   (pool.rs)   │◄───│ (sessions.rs)  │    │  (embedded) │  │   │
//! │  │   │               │    │                │    │             │  │   │
//! │  │   │  SqlitePool   │    │ orderedSessions│    │ 001_kv.sql  │  │   │
//! │  │   └───────────────┘    └────────────────┘    └─────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │        ~/.local/share/prism-kiosk/prism.db (Linux)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`sessions`] - The ordered-sessions ledger (the Persistence Adapter)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prism_store::{Store, StoreConfig};
//!
//! // Create store with default config
//! let config = StoreConfig::new("path/to/prism.db");
//! let store = Store::new(config).await?;
//!
//! // Read and update the ledger
//! let ordered = store.sessions().read().await?;
//! store.sessions().record(["sess42".to_string()]).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod sessions;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StoreError;
pub use pool::{Store, StoreConfig};
pub use sessions::SessionLedger;

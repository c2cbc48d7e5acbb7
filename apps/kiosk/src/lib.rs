//! # Prism Kiosk Library
//!
//! Checkout backend for the Prism photo-printing kiosk. The webview shell
//! embeds this crate and maps its commands onto whatever IPC it speaks.
//!
//! ## Module Organization
//! ```text
//! prism_kiosk/
//! ├── lib.rs          ◄─── You are here (wiring helpers)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Store state wrapper
//! │   ├── cart.rs     ◄─── Cart store (the item list + mutations)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── order.rs    ◄─── Checkout review and order placement
//! ├── navigation.rs   ◄─── Navigation collaborator seam
//! ├── rng.rs          ◄─── Production order-number source
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Kiosk State Management                               │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    DbState       │ │    CartState     │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Store pool    │ │  • Current cart  │ │  • Tax rate          │   │
//! │  │  • SessionLedger │ │  • Cart items    │ │  • Shipping fee      │   │
//! │  │                  │ │  • Totals        │ │  • Kiosk name        │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                   │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence (performed by the embedding shell)
//! 1. [`init_tracing`] - structured logging with env-filter
//! 2. [`default_store_path`] - resolve the SQLite file location
//! 3. `Store::new(StoreConfig::new(path))` - connect + migrate
//! 4. Construct `DbState`, `CartState::new()`, `ConfigState::from_env()`
//! 5. Route shell IPC onto the functions in [`commands`]

pub mod commands;
pub mod error;
pub mod navigation;
pub mod rng;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=prism=trace` - Show trace for prism crates only
/// - Default: INFO level, sqlx noise suppressed
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,prism=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the store file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.prism.kiosk/prism.db`
/// - **Windows**: `%APPDATA%\prism\kiosk\prism.db`
/// - **Linux**: `~/.local/share/prism-kiosk/prism.db`
///
/// ## Development Override
/// Set `PRISM_DB_PATH` environment variable to use a custom path.
pub fn default_store_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(path) = std::env::var("PRISM_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "prism", "kiosk")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("prism.db"))
}

//! # propstore
//!
//! An order-preserving `.properties` configuration store with:
//! - Comment lines kept with the entry they precede
//! - Backslash escaping of separators in keys and values
//! - Multi-line values via trailing-backslash continuation
//! - Lossless read → write → read round-trips
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                SharedStore (optional)                        │
//! │            (Single Writer / Multi Reader)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Store                                 │
//! │      exists / create / reload / get / add_key / save         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Reader    │          │   Writer    │
//!   │  (parse)    │          │ (serialize) │
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬────────────┘
//!                       ▼
//!               ┌─────────────┐
//!               │    Entry    │
//!               └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod format;
pub mod store;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::{CommentMarker, Config, FormatOptions, Separator};
pub use format::{parse, serialize, Entry};
pub use shared::SharedStore;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of propstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

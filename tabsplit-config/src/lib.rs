//! Configuration and shared types for the tabsplit layout engine.
//!
//! This crate provides:
//!
//! - `LayoutConfig`: divider ranges, pane/tab policy, drag notification policy
//! - Default values used by serde when fields are missing
//! - Identifier types (`PaneId`, `TabId`, `SplitId`) shared with hosts
//! - `ConfigError` for load/save/validation failures

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::LayoutConfig;
pub use error::ConfigError;
pub use types::{DividerDragNotify, NewTabPosition, PaneId, SplitId, TabId};

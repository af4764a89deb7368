// Library exports for tabsplit hosts and tests
//
// The layout engine is single-threaded: a `PaneManager` is owned and mutated
// by one logical thread. The only lock in the crate guards the debug log file
// (`parking_lot::Mutex`, see `debug.rs`).

/// Crate version, for hosts that report it alongside serialized layouts.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod pane;
pub mod tab;
pub mod traits;

pub use tabsplit_config as config;

pub use pane::{
    Frame, LayoutSnapshot, NavigationDirection, PaneId, PaneManager, SplitId, SplitOrientation,
    TreeSnapshot,
};
pub use tab::{Tab, TabId, TabList};
pub use tabsplit_config::{DividerDragNotify, LayoutConfig, NewTabPosition};
pub use traits::{LayoutChange, LayoutObserver};

//! Shared identifier and policy types.
//!
//! Identifiers live here (rather than in the layout crate) so that hosts and
//! sub-crates can name panes, tabs and splits without depending on the whole
//! layout engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh identifier. Never returns a value seen before in
            /// this process.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID (e.g. one read back from an external snapshot)
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Underlying UUID value
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }
    };
}

uuid_id! {
    /// Unique identifier for a pane (a leaf of the split tree)
    PaneId
}

uuid_id! {
    /// Unique identifier for a tab
    TabId
}

uuid_id! {
    /// Unique identifier for a split (an internal node of the split tree)
    SplitId
}

// ============================================================================
// Policy Types
// ============================================================================

/// Where `add_tab` places a new tab when the caller does not pick an index
///
/// The chosen index is still subject to the pinned-prefix clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NewTabPosition {
    /// Append after the last tab
    #[default]
    End,
    /// Insert right after the currently selected tab
    AfterSelected,
    /// Insert at the front of the pane
    Start,
}

impl NewTabPosition {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            NewTabPosition::End => "End",
            NewTabPosition::AfterSelected => "After Selected Tab",
            NewTabPosition::Start => "Start",
        }
    }
}

/// When layout-change notifications fire while a divider is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DividerDragNotify {
    /// Notify on every drag update
    #[default]
    EveryFrame,
    /// Stay quiet during the drag and notify once when it ends
    OnDragEnd,
}

//! `LayoutConfig`: tunables for the split-tree layout engine.
//!
//! Covers:
//! - The config struct and its serde defaults
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-style path resolution (`config_path`)
//! - Semantic validation of divider ranges

use crate::error::ConfigError;
use crate::types::{DividerDragNotify, NewTabPosition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Layout engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    // ========================================================================
    // Divider Settings
    // ========================================================================
    /// Thickness of dividers between panes in pixels
    /// Divider positions are fractions of the space left after the divider.
    #[serde(default = "crate::defaults::divider_thickness")]
    pub divider_thickness: f32,

    /// Smallest normalized divider position (0.0-1.0)
    #[serde(default = "crate::defaults::min_divider_position")]
    pub min_divider_position: f32,

    /// Largest normalized divider position (0.0-1.0)
    #[serde(default = "crate::defaults::max_divider_position")]
    pub max_divider_position: f32,

    /// Minimum pane extent in pixels along a split's axis
    /// Only enforced once the container frame is known.
    #[serde(default = "crate::defaults::min_pane_size")]
    pub min_pane_size: f32,

    /// Notification cadence while a divider is being dragged
    #[serde(default = "crate::defaults::divider_drag_notify")]
    pub divider_drag_notify: DividerDragNotify,

    // ========================================================================
    // Pane & Tab Policy
    // ========================================================================
    /// Close a pane automatically once its last tab is closed
    #[serde(default = "crate::defaults::bool_true")]
    pub auto_close_empty_panes: bool,

    /// Allow the last remaining pane to be closed (leaving an empty tree)
    #[serde(default = "crate::defaults::bool_false")]
    pub allow_close_last_pane: bool,

    /// Default placement for newly added tabs
    #[serde(default = "crate::defaults::new_tab_position")]
    pub new_tab_position: NewTabPosition,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            divider_thickness: crate::defaults::divider_thickness(),
            min_divider_position: crate::defaults::min_divider_position(),
            max_divider_position: crate::defaults::max_divider_position(),
            min_pane_size: crate::defaults::min_pane_size(),
            divider_drag_notify: crate::defaults::divider_drag_notify(),
            auto_close_empty_panes: crate::defaults::bool_true(),
            allow_close_last_pane: crate::defaults::bool_false(),
            new_tab_position: crate::defaults::new_tab_position(),
        }
    }
}

impl LayoutConfig {
    /// Load configuration from the default path, falling back to defaults
    /// when no file exists yet
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        log::info!("Layout config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("Layout config not found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading layout config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let config: LayoutConfig = serde_yaml_ng::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("tabsplit").join("layout.yaml")
            } else {
                PathBuf::from("layout.yaml")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/tabsplit/layout.yaml on all Unix-likes, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir
                    .join(".config")
                    .join("tabsplit")
                    .join("layout.yaml")
            } else {
                PathBuf::from("layout.yaml")
            }
        }
    }

    /// Check field ranges
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.divider_thickness.is_finite() || self.divider_thickness < 0.0 {
            return Err(ConfigError::Validation(format!(
                "divider_thickness must be a non-negative number, got {}",
                self.divider_thickness
            )));
        }
        if !(0.0..=1.0).contains(&self.min_divider_position)
            || !(0.0..=1.0).contains(&self.max_divider_position)
        {
            return Err(ConfigError::Validation(format!(
                "divider positions must lie in 0.0..=1.0, got {}..={}",
                self.min_divider_position, self.max_divider_position
            )));
        }
        if self.min_divider_position > self.max_divider_position {
            return Err(ConfigError::Validation(format!(
                "min_divider_position ({}) exceeds max_divider_position ({})",
                self.min_divider_position, self.max_divider_position
            )));
        }
        if !self.min_pane_size.is_finite() || self.min_pane_size < 0.0 {
            return Err(ConfigError::Validation(format!(
                "min_pane_size must be a non-negative number, got {}",
                self.min_pane_size
            )));
        }
        Ok(())
    }
}

//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Application directory name used for config and logs
pub const APP_DIR_NAME: &str = "app-shell";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "shell.toml";

/// Log file prefix for the rolling file appender
pub const LOG_FILE_PREFIX: &str = "app-shell.log";

/// Home banner height in pixels
pub const BANNER_HEIGHT: f32 = 96.0;

/// Top bar height in pixels
pub const TOPBAR_HEIGHT: f32 = 48.0;

/// Sidebar width in pixels
pub const SIDEBAR_WIDTH: f32 = 180.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 750.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 500.0;

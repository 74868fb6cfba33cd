//! Config - Shell Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::error::{Error, Result};

/// Main shell configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShellConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Content supplied to the leaf regions
    pub content: ContentConfig,
}

impl ShellConfig {
    /// Check values that the window layer cannot recover from
    pub fn validate(&self) -> Result<()> {
        let WindowConfig { width, height, .. } = self.window;
        let finite = width.is_finite() && height.is_finite();
        if !(finite && width >= MIN_WINDOW_WIDTH && height >= MIN_WINDOW_HEIGHT) {
            return Err(Error::Invalid {
                message: format!(
                    "window size {width}x{height} is below the minimum {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}"
                ),
            });
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in pixels
    pub width: f32,
    /// Initial height in pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "App Shell".to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Text content for the leaf regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Home banner title
    pub home_title: String,
    /// Top bar title
    pub topbar_title: String,
    /// Sidebar heading
    pub sidebar_title: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            home_title: "Home".to_string(),
            topbar_title: "Navigation".to_string(),
            sidebar_title: "Menu".to_string(),
        }
    }
}

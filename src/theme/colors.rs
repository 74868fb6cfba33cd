//! Colors - Shell Theme Colors

use gpui::{Rgba, rgb};

/// Shell color palette - All colors are accessed via associated functions
pub struct ShellColors;

impl ShellColors {
    // Region backgrounds
    /// Main window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Home banner background - Cyan/Teal
    pub fn banner_bg() -> Rgba { rgb(0x2cb3b8) }
    /// Top bar background
    pub fn topbar_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xf9fafb) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Text on the banner
    pub fn text_banner() -> Rgba { rgb(0xffffff) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
}

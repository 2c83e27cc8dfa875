//! Compile-time Settings
//!
//! Page layout constants shared by the shell and the section tracker.

/// Section holding delivery and contact info; always first in navigation
pub const INFO_SECTION_ID: &str = "infos";
pub const INFO_SECTION_LABEL: &str = "Infos";

/// Height reserved for the sticky navigation when scrolling to a section
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Viewport insets for the scrollspy region
pub const SPY_TOP_INSET_PX: u32 = 100;
pub const SPY_BOTTOM_INSET_PERCENT: u32 = 70;

/// How long a product card shows its "added" check mark
pub const ADDED_FLASH_MS: u32 = 800;

/// Element id of the horizontally scrolling navigation strip
pub const NAV_STRIP_ID: &str = "section-nav";

/// Element id of the navigation button for a section
pub fn nav_button_id(section_id: &str) -> String {
    format!("nav-btn-{}", section_id)
}

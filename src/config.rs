//! Display preferences
//!
//! User-facing view settings read by the rendering code.

use serde::{Deserialize, Serialize};

use crate::constants::view;
use crate::sort::SortKey;
use crate::view::{ViewStyle, VisualStyle};

/// View settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    // === Layout ===
    pub view_display_type: ViewStyle,
    pub view_display_style: VisualStyle,
    pub view_show_icons: bool,
    pub view_small_icons: bool,

    /// Age of the user, entries above it are hidden by the front end
    pub user_age: u32,

    // === Entries ===
    /// Open entry links directly instead of the entry detail view
    pub entries_direct_links: bool,
    pub highlight_bookmarks: bool,
    /// Open entries in a modal window on click
    pub click_behavior_modal_window: bool,

    /// Opacity of visited entries (0.0 - 1.0, not clamped)
    pub entries_visit_alpha: f32,
    /// Opacity of dead entries (0.0 - 1.0, not clamped)
    pub entries_dead_alpha: f32,

    // === Listing ===
    pub sort_function: SortKey,
    pub default_page_size: usize,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            view_display_type: ViewStyle::SearchEngine,
            view_display_style: VisualStyle::Light,
            view_show_icons: true,
            view_small_icons: true,
            user_age: view::USER_AGE,
            entries_direct_links: true,
            highlight_bookmarks: false,
            click_behavior_modal_window: true,
            entries_visit_alpha: view::ENTRIES_VISIT_ALPHA,
            entries_dead_alpha: view::ENTRIES_DEAD_ALPHA,
            sort_function: SortKey::default(),
            default_page_size: view::DEFAULT_PAGE_SIZE,
        }
    }
}

impl DisplayPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

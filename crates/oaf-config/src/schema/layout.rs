//! Layout dimension constants used by the geometry calculators.

use serde::{Deserialize, Serialize};

/// Share of the viewport height used by the maximized panel.
pub const MAXIMIZE_HEIGHT_RATIO: f64 = 0.6;
/// Share of the viewport width used by the maximized panel.
pub const MAXIMIZE_WIDTH_RATIO: f64 = 0.3;
/// Share of the viewport height used by the side panel.
pub const SIDE_PANEL_HEIGHT_RATIO: f64 = 0.95;
/// Share of the viewport width used by the side panel.
pub const SIDE_PANEL_WIDTH_RATIO: f64 = 0.3;
/// Edge length in pixels of the minimized (square) panel.
pub const MINIMIZE_SIZE: u32 = 200;

/// Overridable dimensions for the maximize, side-panel and minimize layouts.
///
/// Ratios are fractions of the viewport (valid range: (0.0, 1.0]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutDimensions {
    pub maximize_height_ratio: f64,
    pub maximize_width_ratio: f64,
    pub side_panel_height_ratio: f64,
    pub side_panel_width_ratio: f64,
    /// Minimized panel edge in pixels (valid range: 1-4096).
    pub minimize_size: u32,
}

impl Default for LayoutDimensions {
    fn default() -> Self {
        Self {
            maximize_height_ratio: MAXIMIZE_HEIGHT_RATIO,
            maximize_width_ratio: MAXIMIZE_WIDTH_RATIO,
            side_panel_height_ratio: SIDE_PANEL_HEIGHT_RATIO,
            side_panel_width_ratio: SIDE_PANEL_WIDTH_RATIO,
            minimize_size: MINIMIZE_SIZE,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

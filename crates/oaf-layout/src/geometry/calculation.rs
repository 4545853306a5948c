//! Geometry calculation for each layout kind.
//!
//! Sizes are rounded first and positions are derived from the rounded sizes,
//! so `top + height` always lands exactly on the rounded viewport edge.

use oaf_common::{Geometry, LayoutPosition, Viewport, WindowSize};

use super::{Calculator, LayoutKind};

/// Round to whole pixels, clamping negatives (and NaN) to zero.
fn px(value: f64) -> u32 {
    // `as` saturates, so huge values clamp to u32::MAX.
    value.round().max(0.0) as u32
}

/// Offset that places a span of `size` flush against the far `edge`.
fn flush(edge: f64, size: u32) -> u32 {
    px(edge.round() - f64::from(size))
}

impl Calculator {
    pub fn compute(
        &self,
        kind: LayoutKind,
        viewport: Viewport,
        window: WindowSize,
        previous: Option<LayoutPosition>,
    ) -> Geometry {
        match kind {
            LayoutKind::DockLeft => self.dock_left(viewport, window),
            LayoutKind::DockRight => self.dock_right(viewport, window),
            LayoutKind::Maximize => self.maximize(viewport, previous),
            LayoutKind::SidePanel => self.side_panel(viewport, previous),
            LayoutKind::Minimize => self.minimize(viewport),
            LayoutKind::Close => self.close(viewport),
        }
    }

    /// Current window size, bottom-left corner.
    pub fn dock_left(&self, viewport: Viewport, window: WindowSize) -> Geometry {
        let height = px(window.height);
        Geometry {
            top: flush(viewport.height, height),
            left: 0,
            height,
            width: px(window.width),
        }
    }

    /// Current window size, bottom-right corner.
    pub fn dock_right(&self, viewport: Viewport, window: WindowSize) -> Geometry {
        let height = px(window.height);
        let width = px(window.width);
        Geometry {
            top: flush(viewport.height, height),
            left: flush(viewport.width, width),
            height,
            width,
        }
    }

    pub fn maximize(&self, viewport: Viewport, previous: Option<LayoutPosition>) -> Geometry {
        let dims = &self.dimensions;
        self.scaled(
            viewport,
            dims.maximize_height_ratio,
            dims.maximize_width_ratio,
            previous,
        )
    }

    pub fn side_panel(&self, viewport: Viewport, previous: Option<LayoutPosition>) -> Geometry {
        let dims = &self.dimensions;
        self.scaled(
            viewport,
            dims.side_panel_height_ratio,
            dims.side_panel_width_ratio,
            previous,
        )
    }

    /// Fixed square in the bottom-right corner.
    pub fn minimize(&self, viewport: Viewport) -> Geometry {
        let size = self.dimensions.minimize_size;
        Geometry {
            top: flush(viewport.height, size),
            left: flush(viewport.width, size),
            height: size,
            width: size,
        }
    }

    /// Zero-sized, parked at the bottom-right edge of the viewport.
    pub fn close(&self, viewport: Viewport) -> Geometry {
        Geometry {
            top: px(viewport.height),
            left: px(viewport.width),
            height: 0,
            width: 0,
        }
    }

    fn scaled(
        &self,
        viewport: Viewport,
        height_ratio: f64,
        width_ratio: f64,
        previous: Option<LayoutPosition>,
    ) -> Geometry {
        let height = px(viewport.height * height_ratio);
        let width = px(viewport.width * width_ratio);
        let left = match previous {
            Some(LayoutPosition::DockedLeft) => 0,
            _ => flush(viewport.width, width),
        };
        Geometry {
            top: flush(viewport.height, height),
            left,
            height,
            width,
        }
    }
}

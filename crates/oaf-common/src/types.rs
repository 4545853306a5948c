use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal side the panel is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPosition {
    DockedLeft,
    DockedRight,
}

impl LayoutPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutPosition::DockedLeft => "docked-left",
            LayoutPosition::DockedRight => "docked-right",
        }
    }
}

impl fmt::Display for LayoutPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual mode of the panel. Every state accepts every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutState {
    Default,
    Maximized,
    Minimized,
    SidePanel,
}

impl LayoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutState::Default => "default",
            LayoutState::Maximized => "maximized",
            LayoutState::Minimized => "minimized",
            LayoutState::SidePanel => "side-panel",
        }
    }
}

impl fmt::Display for LayoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size of the host page's visible area, as reported by the page context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: f64,
    pub width: f64,
}

impl Viewport {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }
}

/// Size of the panel's own window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub height: f64,
    pub width: f64,
}

impl WindowSize {
    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }
}

/// Target pixel rectangle for the panel. Derived per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub top: u32,
    pub left: u32,
    pub height: u32,
    pub width: u32,
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.height, self.width, self.top, self.left
        )
    }
}

//! Calculator types.

use oaf_config::LayoutDimensions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The layout a geometry is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    DockLeft,
    DockRight,
    Maximize,
    SidePanel,
    Minimize,
    Close,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 6] = [
        LayoutKind::DockLeft,
        LayoutKind::DockRight,
        LayoutKind::Maximize,
        LayoutKind::SidePanel,
        LayoutKind::Minimize,
        LayoutKind::Close,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::DockLeft => "dock-left",
            LayoutKind::DockRight => "dock-right",
            LayoutKind::Maximize => "maximize",
            LayoutKind::SidePanel => "side-panel",
            LayoutKind::Minimize => "minimize",
            LayoutKind::Close => "close",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes target panel geometry from viewport and window measurements.
///
/// Holds only the configured dimension constants; every computation is a
/// pure function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Calculator {
    pub dimensions: LayoutDimensions,
}

impl Calculator {
    pub fn new(dimensions: LayoutDimensions) -> Self {
        Self { dimensions }
    }
}

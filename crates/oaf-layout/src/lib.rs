//! Panel layout core.
//!
//! Geometry calculators, the layout state store, the resize orchestrator and
//! the [`OafPanel`] facade that ties them to an [`oaf_bridge::OafClient`].

pub mod geometry;
pub mod orchestrator;
pub mod panel;
pub mod store;

pub use geometry::{Calculator, LayoutKind};
pub use orchestrator::resize_to;
pub use panel::OafPanel;
pub use store::{reduce, Dispatch, LayoutAction, LayoutResponse, LayoutSnapshot, LayoutStore};

//! Panel side of the host bridge.
//!
//! Provides:
//! - The [`HostBridge`] contract the panel calls into
//! - [`OafClient`], which owns an optional bridge and degrades to standalone
//! - The response normalizer producing [`HostResult`]
//! - A per-kind [`EventEmitter`] for events the host pushes
//! - [`SimulatedHost`], an in-process host for the CLI and tests

pub mod client;
pub mod events;
pub mod host;
pub mod normalize;
pub mod result;
pub mod simulated;

pub use client::{fixed_window, OafClient, WindowSizeSource};
pub use events::{EventEmitter, EventHandler, HandlerId, Subscription};
pub use host::{
    page_details, BridgeResult, HostBridge, MoveAndResize, MoveToLocation, NavigateRequest,
    RawResponse, SetSize,
};
pub use normalize::execute;
pub use result::{HostFailure, HostResult, HostStatus, HostSuccess};
pub use simulated::{HostOp, RecordedCall, Scripted, SimulatedHost};

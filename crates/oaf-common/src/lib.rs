pub mod errors;
pub mod events;
pub mod types;

pub use errors::{BridgeError, ConfigError, OafError};
pub use events::{HostEvent, HostEventKind, PushEventKind};
pub use types::{Geometry, LayoutPosition, LayoutState, Viewport, WindowSize};

pub type Result<T> = std::result::Result<T, OafError>;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure raised by a host-bridge call before any response shape exists.
///
/// These never reach UI callers directly: the response normalizer turns them
/// into a failed `HostResult`, and the resize orchestrator into a `SET_ERROR`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("Not connected to the host application")]
    NotConnected,

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Rejected(String),

    #[error("host operation not supported: {0}")]
    Unsupported(String),

    #[error("malformed host payload: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum OafError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

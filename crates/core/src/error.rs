/// Result alias that carries the custom [`ClockError`] type.
pub type Result<T> = std::result::Result<T, ClockError>;

/// Common error type for the core crate.
///
/// Rendering never fails; these variants cover the host-side work around it
/// (writing frames, reading configuration, parsing pinned instants).
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for [`crate::ClockConfig`].
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid time `{0}`")]
    InvalidTime(String),
}

impl ClockError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<String> for ClockError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

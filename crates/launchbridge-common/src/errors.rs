#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the message channel collaborator itself.
///
/// A missing listener is not an error; only a transport that was never
/// attached (or already torn down) is.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("transport unavailable on channel {channel}")]
    TransportUnavailable { channel: String },

    #[error("encode error: {0}")]
    Encode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("harness error: {0}")]
    Harness(String),
}

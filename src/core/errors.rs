use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmcError {
    /// Network-level failure with no readable response body. Carries the
    /// original transport error unchanged.
    #[error("HTTP transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was present but not valid JSON for the requested shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required alternative parameter set had no usable member.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A numeric parameter fell outside its documented bound.
    #[error("parameter `{param}` out of range: {value} (valid: {valid})")]
    OutOfRange {
        param: &'static str,
        value: i64,
        valid: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),
}

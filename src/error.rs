use thiserror::Error;

/// Everything a command can fail with, surfaced to the user as one message.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: the request never produced a usable response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("request rejected ({status}): {message}")]
    Api { status: u16, message: String },

    /// A 2xx body did not match the expected schema.
    #[error("unexpected response shape: {0}")]
    Schema(String),

    /// A sign-in token whose payload segment could not be decoded.
    #[error("malformed session token: {0}")]
    MalformedToken(String),

    /// Bad or missing input caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// Reading or writing local state (session file, image to upload).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;

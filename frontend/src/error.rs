use std::fmt;

/// Storefront client errors
///
/// Every variant ends up as the same generic notification in the UI; the split
/// only exists so the logs say what actually went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response
    Transport(String),
    /// The backend answered with a non-2xx status
    Status { status: u16, body: String },
    /// The response body did not match the expected shape
    Decode(String),
    /// The request body could not be serialized
    Encode(String),
    /// Local storage rejected a write
    Storage(&'static str),
    /// Cart quantities must be at least 1
    InvalidQuantity(i64),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "network error: {}", msg),
            ClientError::Status { status, body } => {
                write!(f, "server responded with {}", status)?;
                if !body.is_empty() {
                    write!(f, ": {}", body)?;
                }
                Ok(())
            }
            ClientError::Decode(msg) => write!(f, "unexpected response body: {}", msg),
            ClientError::Encode(msg) => write!(f, "could not encode request: {}", msg),
            ClientError::Storage(key) => write!(f, "could not write `{}` to local storage", key),
            ClientError::InvalidQuantity(qty) => write!(f, "quantity {} is below 1", qty),
        }
    }
}

impl std::error::Error for ClientError {}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

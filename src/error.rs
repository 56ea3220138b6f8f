use reqwest::Method;
use std::fmt;

/// Possible error types while talking to the reseller API.
///
/// Non-JSON response bodies are not an error; they come back as
/// [`ApiResponse::Raw`](crate::ApiResponse::Raw) instead.
#[derive(Debug)]
pub enum Error {
    /// A constructor or request argument was rejected before dispatch.
    InvalidArgument(String),
    /// The HTTP verb is outside the set the API accepts
    /// (GET, POST, PUT, DELETE). No request is sent.
    UnsupportedMethod(Method),
    /// The HTTP layer failed: connection errors, timeouts, TLS failures
    /// and non-2xx statuses, propagated as-is.
    Transport(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::UnsupportedMethod(method) => {
                write!(f, "unsupported HTTP method {method}")
            }
            Error::Transport(err) => write!(f, "transport error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

//! Error types for the Counters API client.
//!
//! # Design
//! One closed enum covers every failure the client can report. Each variant
//! carries a stable integer code under [`ERROR_DOMAIN`] so callers that
//! bridge to systems keyed on (domain, code) pairs — alert tables, FFI
//! layers — don't have to invent their own mapping. `NoData` keeps the
//! historical -777 code from the original service contract.

use std::fmt;

/// Error namespace identifier carried by every client error.
pub const ERROR_DOMAIN: &str = "CountersErrorDomain";

/// Errors surfaced through the completion path.
///
/// Exactly one of these is delivered when a request fails; the client never
/// logs or retries on its own.
#[derive(Debug)]
pub enum Error {
    /// The URL could not be parsed, before or after parameter encoding.
    InvalidUrl(String),

    /// The transport reported success but the response body was empty.
    NoData,

    /// The server answered with a status outside the 200–299 range.
    InvalidStatusCode { status: u16 },

    /// The response body could not be decoded as JSON.
    Decode(String),

    /// The underlying networking stack failed (DNS, timeout, refused
    /// connection). The message is the transport's own diagnostic.
    Transport(String),

    /// The caller cancelled the request before the transport delivered.
    Cancelled,
}

impl Error {
    /// Stable integer code for this error within [`ERROR_DOMAIN`].
    pub fn code(&self) -> i32 {
        match self {
            Error::InvalidUrl(_) => -775,
            Error::Transport(_) => -776,
            Error::NoData => -777,
            Error::InvalidStatusCode { .. } => -778,
            Error::Decode(_) => -779,
            Error::Cancelled => -780,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            Error::NoData => write!(f, "server returned an empty body"),
            Error::InvalidStatusCode { status } => {
                write!(f, "server returned status {status}")
            }
            Error::Decode(msg) => write!(f, "JSON decoding failed: {msg}"),
            Error::Transport(msg) => write!(f, "transport failed: {msg}"),
            Error::Cancelled => write!(f, "request was cancelled"),
        }
    }
}

impl std::error::Error for Error {}

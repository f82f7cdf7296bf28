//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A filter input was rejected before any request was built or sent:
    /// a blank name, an empty id list, or a non-positive id.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A network-level failure: connection refused, DNS, timeout, or a
    /// response body that could not be read. The underlying cause is
    /// preserved as the error source.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered but the exchange failed: a non-2xx status, a
    /// body that did not match the expected schema, or an envelope with
    /// `success: false` (carrying the server-provided message).
    #[error("API error: {0}")]
    Api(String),
}

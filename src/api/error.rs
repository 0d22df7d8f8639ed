use thiserror::Error;

/// Errors from talking to the router firmware. All of them are terminal for
/// the current invocation; nothing is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure: connection refused, TLS failure, timeout.
    #[error("router unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The login round-trip succeeded at the transport level but the
    /// response carried no usable session token. Usually a wrong password.
    #[error("authentication failed: no session token in login response")]
    AuthFailed,

    /// Non-2xx status from an authenticated endpoint. A 401 here typically
    /// means the stored token expired; re-run `glinet auth`.
    #[error("unexpected status code {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

//! Navigation error types
//!
//! Building a request never fails; only the transport behind a `Navigator`
//! can reject one.

use thiserror::Error;

/// Errors raised by a navigation transport
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The transport refused the request
    #[error("Navigation to '{to}' rejected: {reason}")]
    Rejected { to: String, reason: String },

    /// The transport is gone (page unloading, runtime shut down)
    #[error("Navigation transport unavailable")]
    Unavailable,
}

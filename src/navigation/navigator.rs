//! Navigation transport abstraction
//!
//! The gateway hands finished requests to a `Navigator`; how the client
//! actually changes page is up to the implementation.

use super::error::NavigationError;
use super::request::NavigationRequest;

/// Navigation transport
pub trait Navigator {
    /// Navigate to the requested location
    ///
    /// # Errors
    ///
    /// Returns `NavigationError` if the transport refuses the request.
    fn navigate(&mut self, request: &NavigationRequest) -> Result<(), NavigationError>;
}

/// In-memory navigator that keeps every request it receives
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: Vec<NavigationRequest>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn requests(&self) -> &[NavigationRequest] {
        &self.requests
    }

    #[must_use]
    pub fn last(&self) -> Option<&NavigationRequest> {
        self.requests.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, request: &NavigationRequest) -> Result<(), NavigationError> {
        self.requests.push(request.clone());
        Ok(())
    }
}

//! Dispatch API client port definition.

use crate::domain::{AppError, DispatchPayload};

/// Response from a dispatch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    /// HTTP status returned by the API.
    pub status: u16,
}

/// Port for announcing document updates to the app repository.
pub trait DispatchClient {
    fn dispatch(&self, payload: &DispatchPayload) -> Result<DispatchResponse, AppError>;
}

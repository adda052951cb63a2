use std::sync::{Arc, Mutex};

use crate::domain::{AppError, DispatchPayload};
use crate::ports::{DispatchClient, DispatchResponse};

/// Records payloads instead of sending them. Clones share the record.
#[derive(Debug, Clone)]
pub struct FakeDispatchClient {
    sent: Arc<Mutex<Vec<DispatchPayload>>>,
    failure: Option<u16>,
}

impl FakeDispatchClient {
    pub fn new() -> Self {
        Self { sent: Arc::new(Mutex::new(Vec::new())), failure: None }
    }

    /// Every dispatch fails with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self { failure: Some(status), ..Self::new() }
    }

    pub fn sent(&self) -> Vec<DispatchPayload> {
        self.sent.lock().unwrap().clone()
    }
}

impl DispatchClient for FakeDispatchClient {
    fn dispatch(&self, payload: &DispatchPayload) -> Result<DispatchResponse, AppError> {
        if let Some(status) = self.failure {
            return Err(AppError::DispatchError {
                message: "Bad credentials".to_string(),
                status: Some(status),
            });
        }
        self.sent.lock().unwrap().push(payload.clone());
        Ok(DispatchResponse { status: 204 })
    }
}

//! Mock share target for testing.

use std::sync::{Arc, Mutex};

use crate::error::CapabilityError;
use crate::traits::{SharePayload, ShareTarget};

/// Mock share target that records shared payloads.
#[derive(Debug, Clone)]
pub struct MockShareTarget {
    available: bool,
    shared: Arc<Mutex<Vec<SharePayload>>>,
}

impl Default for MockShareTarget {
    fn default() -> Self {
        Self {
            available: true,
            shared: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockShareTarget {
    /// Create an available mock share target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unavailable mock share target.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            shared: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All payloads shared through this mock, in order.
    pub fn shared(&self) -> Vec<SharePayload> {
        self.shared.lock().unwrap().clone()
    }
}

impl ShareTarget for MockShareTarget {
    fn is_available(&self) -> bool {
        self.available
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), CapabilityError> {
        if !self.available {
            return Err(CapabilityError::Unsupported {
                capability: "share",
            });
        }
        self.shared.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

//! Platform share trait abstraction.

use crate::error::CapabilityError;

/// Payload handed to a platform share capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    /// Short title for the share sheet
    pub title: String,
    /// Full shared text
    pub text: String,
}

/// Trait for the host platform's share capability.
pub trait ShareTarget: Send {
    /// Whether a native share capability exists on this platform.
    fn is_available(&self) -> bool;

    /// Hand the payload to the platform share sheet.
    fn share(&mut self, payload: &SharePayload) -> Result<(), CapabilityError>;
}

/// Share target for hosts without a native share sheet.
///
/// Always reports [`CapabilityError::Unsupported`]; never panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSharePlatform;

impl ShareTarget for NoSharePlatform {
    fn is_available(&self) -> bool {
        false
    }

    fn share(&mut self, _payload: &SharePayload) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported {
            capability: "share",
        })
    }
}

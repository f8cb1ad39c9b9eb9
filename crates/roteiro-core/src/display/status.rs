//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages, such as the
/// outcome of clearing the itinerary or importing a file.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{prefix} {}", self.message)
    }
}

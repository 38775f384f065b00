//! Error types for customer notifications.

use thiserror::Error;

/// Errors that can occur while sending a confirmation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// The confirmation could not be delivered.
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

use super::value_objects::{ShipmentId, StatusKind};

// ============================================================================
// Shipment Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShipmentError {
    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Invalid quantity: {0} (must be greater than 0)")]
    InvalidQuantity(i32),

    #[error("Recipient cannot be empty")]
    EmptyRecipient,

    #[error("Purchase order cannot be empty")]
    EmptyPurchaseOrder,

    #[error("Branch cannot be empty")]
    EmptyBranch,

    #[error("Confirmed status requires a confirmer and a tracking reference")]
    IncompleteConfirmation,

    #[error("Shipment must be pending to confirm, current status: {0}")]
    NotPending(StatusKind),

    #[error("Confirmer name is required")]
    MissingConfirmer,

    #[error("Tracking reference is required unless handed to user")]
    MissingTrackingRef,

    #[error("Shipment not found: {0}")]
    NotFound(ShipmentId),

    #[error("No confirmation in progress")]
    NoConfirmationInProgress,

    #[error("Aggregate not initialized")]
    NotInitialized,
}

/// Coarse grouping of [`ShipmentError`] for callers that only care about the class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required field missing or out of range; shown inline next to the field
    Validation,
    /// Status change not allowed from the current status
    InvalidTransition,
    /// Confirmation prompt is missing input; the prompt stays open
    ConfirmationInput,
    NotFound,
    Workflow,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::InvalidTransition => "invalid_transition",
            ErrorKind::ConfirmationInput => "confirmation_input",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Workflow => "workflow",
        }
    }
}

impl ShipmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShipmentError::EmptyDescription
            | ShipmentError::InvalidQuantity(_)
            | ShipmentError::EmptyRecipient
            | ShipmentError::EmptyPurchaseOrder
            | ShipmentError::EmptyBranch
            | ShipmentError::IncompleteConfirmation => ErrorKind::Validation,
            ShipmentError::NotPending(_) => ErrorKind::InvalidTransition,
            ShipmentError::MissingConfirmer | ShipmentError::MissingTrackingRef => {
                ErrorKind::ConfirmationInput
            }
            ShipmentError::NotFound(_) => ErrorKind::NotFound,
            ShipmentError::NoConfirmationInProgress | ShipmentError::NotInitialized => {
                ErrorKind::Workflow
            }
        }
    }
}

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale;

// ============================================================================
// Shipment Value Objects
// ============================================================================

/// Store-assigned shipment identity. Time-ordered, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(Uuid);

impl ShipmentId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ShipmentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The editable fields of a shipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentDetails {
    pub description: String,
    pub qty: i32,
    #[serde(rename = "penerima")]
    pub recipient: String,
    #[serde(rename = "po")]
    pub purchase_order: String,
    #[serde(rename = "tglKirim")]
    pub ship_date: NaiveDate,
    pub branch: String,
}

/// How a confirmed shipment reached its recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Delivery {
    /// Sent through a carrier with this tracking reference (no resi)
    Tracking(String),
    /// Handed directly to the user, no tracking reference
    HandedToUser,
}

impl Delivery {
    pub fn label(&self) -> &str {
        match self {
            Delivery::Tracking(reference) => reference,
            Delivery::HandedToUser => locale::HANDED_TO_USER,
        }
    }
}

impl From<String> for Delivery {
    fn from(value: String) -> Self {
        if value == locale::HANDED_TO_USER {
            Delivery::HandedToUser
        } else {
            Delivery::Tracking(value)
        }
    }
}

impl From<Delivery> for String {
    fn from(delivery: Delivery) -> Self {
        match delivery {
            Delivery::Tracking(reference) => reference,
            Delivery::HandedToUser => locale::HANDED_TO_USER.to_string(),
        }
    }
}

/// Confirmation data, only ever present on a confirmed shipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    #[serde(rename = "confirmedDate")]
    pub confirmed_on: NaiveDate,
    #[serde(rename = "confirmedBy")]
    pub confirmed_by: String,
    #[serde(rename = "noResi")]
    pub delivery: Delivery,
}

/// Shipment status with its status-specific data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ShipmentStatus {
    Pending,
    Confirmed(Confirmation),
    Rejected,
}

impl ShipmentStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            ShipmentStatus::Pending => StatusKind::Pending,
            ShipmentStatus::Confirmed(_) => StatusKind::Confirmed,
            ShipmentStatus::Rejected => StatusKind::Rejected,
        }
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match self {
            ShipmentStatus::Confirmed(confirmation) => Some(confirmation),
            _ => None,
        }
    }
}

/// Status discriminant without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Pending,
    Confirmed,
    Rejected,
}

impl StatusKind {
    /// Localized label used in the table and the export
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Pending => locale::STATUS_PENDING,
            StatusKind::Confirmed => locale::STATUS_CONFIRMED,
            StatusKind::Rejected => locale::STATUS_REJECTED,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            locale::STATUS_PENDING => Some(StatusKind::Pending),
            locale::STATUS_CONFIRMED => Some(StatusKind::Confirmed),
            locale::STATUS_REJECTED => Some(StatusKind::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusKind::Pending => "pending",
            StatusKind::Confirmed => "confirmed",
            StatusKind::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// Raw confirmation input as gathered from the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub confirmed_by: String,
    pub tracking_ref: String,
    pub handed_to_user: bool,
}

// ============================================================================
// Unit Tests
// ============================================================================

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::shipment::{Delivery, Shipment, ShipmentDetails, StatusKind};
use crate::locale;

// ============================================================================
// Shipment Form - raw text input to typed shipment fields
// ============================================================================
//
// The form reports every field problem at once so the view can show them
// inline. The store re-validates whatever the form lets through.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Description,
    Qty,
    Recipient,
    PurchaseOrder,
    ShipDate,
    Branch,
    ConfirmedBy,
    TrackingRef,
}

pub type FieldErrors = BTreeMap<FormField, &'static str>;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form contents exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentForm {
    pub description: String,
    pub qty: String,
    pub recipient: String,
    pub purchase_order: String,
    /// `YYYY-MM-DD`
    pub ship_date: String,
    pub branch: String,
    pub status: StatusKind,
    pub confirmed_by: String,
    pub tracking_ref: String,
}

impl Default for ShipmentForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            qty: String::new(),
            recipient: String::new(),
            purchase_order: String::new(),
            ship_date: String::new(),
            branch: String::new(),
            status: StatusKind::Pending,
            confirmed_by: String::new(),
            tracking_ref: String::new(),
        }
    }
}

/// Validated form output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub details: ShipmentDetails,
    pub status: StatusKind,
    /// Set only when `status` is confirmed
    pub confirmation: Option<(String, Delivery)>,
}

impl ShipmentForm {
    /// Prefill for editing an existing shipment
    pub fn from_shipment(shipment: &Shipment) -> Self {
        let details = &shipment.details;
        let confirmation = shipment.confirmation();

        Self {
            description: details.description.clone(),
            qty: details.qty.to_string(),
            recipient: details.recipient.clone(),
            purchase_order: details.purchase_order.clone(),
            ship_date: details.ship_date.format(DATE_FORMAT).to_string(),
            branch: details.branch.clone(),
            status: shipment.status_kind(),
            confirmed_by: confirmation.map(|c| c.confirmed_by.clone()).unwrap_or_default(),
            tracking_ref: confirmation
                .map(|c| c.delivery.label().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<FormSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.description.trim().is_empty() {
            errors.insert(FormField::Description, "Deskripsi diperlukan");
        }

        let qty = self.qty.trim().parse::<i32>().ok().filter(|q| *q > 0);
        if qty.is_none() {
            errors.insert(FormField::Qty, "Qty harus lebih dari 0");
        }

        if self.recipient.trim().is_empty() {
            errors.insert(FormField::Recipient, "Penerima diperlukan");
        }
        if self.purchase_order.trim().is_empty() {
            errors.insert(FormField::PurchaseOrder, "PO diperlukan");
        }

        let ship_date = if self.ship_date.trim().is_empty() {
            errors.insert(FormField::ShipDate, "Tanggal Kirim diperlukan");
            None
        } else {
            let parsed = NaiveDate::parse_from_str(self.ship_date.trim(), DATE_FORMAT).ok();
            if parsed.is_none() {
                errors.insert(FormField::ShipDate, "Tanggal Kirim tidak valid");
            }
            parsed
        };

        if self.branch.trim().is_empty() {
            errors.insert(FormField::Branch, "Branch diperlukan");
        }

        let confirmation = if self.status == StatusKind::Confirmed {
            self.validate_confirmation(&mut errors)
        } else {
            None
        };

        match (qty, ship_date) {
            (Some(qty), Some(ship_date)) if errors.is_empty() => Ok(FormSubmission {
                details: ShipmentDetails {
                    description: self.description.clone(),
                    qty,
                    recipient: self.recipient.clone(),
                    purchase_order: self.purchase_order.clone(),
                    ship_date,
                    branch: self.branch.clone(),
                },
                status: self.status,
                confirmation,
            }),
            _ => Err(errors),
        }
    }

    fn validate_confirmation(&self, errors: &mut FieldErrors) -> Option<(String, Delivery)> {
        if self.confirmed_by.trim().is_empty() {
            errors.insert(
                FormField::ConfirmedBy,
                "Nama pihak yang mengkonfirmasi harus diisi",
            );
        }
        if self.tracking_ref.trim().is_empty() {
            errors.insert(
                FormField::TrackingRef,
                "No Resi harus diisi atau pilih \"Serah ke User\"",
            );
        }
        if errors.contains_key(&FormField::ConfirmedBy) || errors.contains_key(&FormField::TrackingRef) {
            return None;
        }

        let delivery = if self.tracking_ref == locale::HANDED_TO_USER {
            Delivery::HandedToUser
        } else {
            Delivery::Tracking(self.tracking_ref.clone())
        };
        Some((self.confirmed_by.clone(), delivery))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

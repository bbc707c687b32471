use chrono::NaiveDate;

use crate::domain::shipment::{
    Confirmation, Delivery, Shipment, ShipmentDetails, ShipmentId, ShipmentStatus,
};

// ============================================================================
// Sample Data
// ============================================================================
//
// Two records loaded into a fresh session: one pending, one already
// confirmed with a tracking reference.
//
// ============================================================================

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid calendar dates")
}

pub fn sample_shipments() -> Vec<Shipment> {
    vec![
        Shipment {
            id: ShipmentId::generate(),
            version: 1,
            details: ShipmentDetails {
                description: "Produk A - Bahan Baku".to_string(),
                qty: 100,
                recipient: "PT. Maju Jaya".to_string(),
                purchase_order: "PO-2025-001".to_string(),
                ship_date: date(2025, 1, 15),
                branch: "Jakarta".to_string(),
            },
            status: ShipmentStatus::Pending,
        },
        Shipment {
            id: ShipmentId::generate(),
            version: 2,
            details: ShipmentDetails {
                description: "Produk B - Material Pendukung".to_string(),
                qty: 50,
                recipient: "PT. Mitra Baik".to_string(),
                purchase_order: "PO-2025-002".to_string(),
                ship_date: date(2025, 1, 16),
                branch: "Surabaya".to_string(),
            },
            status: ShipmentStatus::Confirmed(Confirmation {
                confirmed_on: date(2025, 1, 16),
                confirmed_by: "Budi Santoso".to_string(),
                delivery: Delivery::Tracking("RSI-2025-00001".to_string()),
            }),
        },
    ]
}

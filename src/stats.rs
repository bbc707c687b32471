use std::collections::HashSet;

use serde::Serialize;

use crate::domain::shipment::{Shipment, StatusKind};

/// Whole-store summary shown next to the table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShipmentStats {
    pub total_shipments: usize,
    pub total_qty: i64,
    pub unique_purchase_orders: usize,
    pub unique_recipients: usize,
    pub unique_branches: usize,
    pub confirmed: usize,
}

impl ShipmentStats {
    pub fn from_shipments<'a, I>(shipments: I) -> Self
    where
        I: IntoIterator<Item = &'a Shipment>,
    {
        let mut stats = Self::default();
        let mut purchase_orders = HashSet::new();
        let mut recipients = HashSet::new();
        let mut branches = HashSet::new();

        for shipment in shipments {
            let details = &shipment.details;
            stats.total_shipments += 1;
            stats.total_qty += i64::from(details.qty);
            purchase_orders.insert(details.purchase_order.as_str());
            recipients.insert(details.recipient.as_str());
            branches.insert(details.branch.as_str());
            if shipment.status_kind() == StatusKind::Confirmed {
                stats.confirmed += 1;
            }
        }

        stats.unique_purchase_orders = purchase_orders.len();
        stats.unique_recipients = recipients.len();
        stats.unique_branches = branches.len();
        stats
    }
}

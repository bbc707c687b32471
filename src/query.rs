use serde::{Deserialize, Serialize};

use crate::domain::shipment::{Shipment, StatusKind};
use crate::locale;

// ============================================================================
// Filter / Search Engine
// ============================================================================
//
// A shipment is visible iff it matches the search text AND the status
// selector. Filtering never reorders.
//
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Confirmed,
    Rejected,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Confirmed,
        StatusFilter::Rejected,
    ];

    pub fn matches(&self, kind: StatusKind) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => kind == StatusKind::Pending,
            StatusFilter::Confirmed => kind == StatusKind::Confirmed,
            StatusFilter::Rejected => kind == StatusKind::Rejected,
        }
    }

    /// Label shown on the filter button
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => locale::FILTER_ALL,
            StatusFilter::Pending => StatusKind::Pending.label(),
            StatusFilter::Confirmed => StatusKind::Confirmed.label(),
            StatusFilter::Rejected => StatusKind::Rejected.label(),
        }
    }
}

impl From<StatusKind> for StatusFilter {
    fn from(kind: StatusKind) -> Self {
        match kind {
            StatusKind::Pending => StatusFilter::Pending,
            StatusKind::Confirmed => StatusFilter::Confirmed,
            StatusKind::Rejected => StatusFilter::Rejected,
        }
    }
}

/// Current search text plus status selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl ShipmentQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn matches(&self, shipment: &Shipment) -> bool {
        self.matches_search(shipment) && self.status.matches(shipment.status_kind())
    }

    fn matches_search(&self, shipment: &Shipment) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        let details = &shipment.details;
        [
            &details.description,
            &details.recipient,
            &details.purchase_order,
            &details.branch,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Order-preserving filter over any borrowed sequence of shipments
    pub fn apply<'a, I>(&self, shipments: I) -> Vec<&'a Shipment>
    where
        I: IntoIterator<Item = &'a Shipment>,
    {
        shipments.into_iter().filter(|s| self.matches(s)).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

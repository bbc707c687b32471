//! In-memory shipment tracking core.
//!
//! A session owns a [`ShipmentTracker`], which wraps the [`store::ShipmentStore`]
//! (create, update, delete, confirm, reject), the current search/status
//! [`query::ShipmentQuery`], the two-step [`workflow::ConfirmationWorkflow`]
//! and a tab-separated [`export`] of whatever is currently visible.

pub mod config;
pub mod domain;
pub mod export;
pub mod form;
pub mod locale;
pub mod metrics;
pub mod query;
pub mod stats;
pub mod store;
pub mod tracker;
pub mod workflow;

pub use config::{ExportConfig, TrackerConfig};
pub use domain::shipment::{
    Confirmation, ConfirmationRequest, Delivery, ErrorKind, Shipment, ShipmentDetails,
    ShipmentError, ShipmentId, ShipmentStatus, StatusKind,
};
pub use query::{ShipmentQuery, StatusFilter};
pub use store::ShipmentStore;
pub use tracker::{FormOutcome, ShipmentTracker};
pub use workflow::{ConfirmationReceipt, ConfirmationWorkflow};

// ============================================================================
// Store Layer
// ============================================================================
//
// In-memory ownership of shipment aggregates for the lifetime of a session.
//
// ============================================================================

mod seed;
mod shipment_store;

pub use seed::sample_shipments;
pub use shipment_store::{Clock, ShipmentStore};

// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Value objects
// - Events
// - Commands
// - Errors
// - Aggregate implementation
//
// The generic command/event contract lives in `aggregate`. Collections of
// aggregates are owned by the store layer, not by the domain.
//
// ============================================================================

pub mod aggregate;
pub mod shipment;

pub use aggregate::Aggregate;

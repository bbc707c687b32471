// ============================================================================
// Aggregate Root Pattern - Command/Event Core
// ============================================================================
//
// Key Principles:
// 1. Commands are validated before any event is emitted
// 2. Events represent facts that have already happened
// 3. Aggregates enforce business invariants
// 4. All state changes flow through events
//
// Events are applied in memory only. Nothing is persisted and no history is
// kept once a command has been folded into the aggregate.
//
// ============================================================================

/// Generic Aggregate trait - every command-driven entity implements this
///
/// Type Parameters:
/// - `Id`: Identity of the aggregate within its store
/// - `Event`: The domain event type for this aggregate
/// - `Command`: The command type for this aggregate
/// - `Error`: The error type for business rule violations
pub trait Aggregate: Sized + Clone {
    type Id: Copy;
    type Event;
    type Command;
    type Error;

    /// Validate a creation command before any state exists
    fn initiate(command: &Self::Command) -> Result<Self::Event, Self::Error>;

    /// Create new aggregate from its first event
    fn apply_first_event(id: Self::Id, event: &Self::Event) -> Result<Self, Self::Error>;

    /// Apply subsequent events to update state
    fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error>;

    /// Handle command and emit events (business logic)
    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Get aggregate ID
    fn aggregate_id(&self) -> Self::Id;

    /// Get current version (number of applied events)
    fn version(&self) -> u64;

    /// Handle a command and fold its events into a copy of the aggregate.
    ///
    /// `self` is never touched, so a failing command leaves no partial state.
    fn execute(&self, command: &Self::Command) -> Result<(Self, Vec<Self::Event>), Self::Error> {
        let events = self.handle_command(command)?;

        let mut next = self.clone();
        for event in &events {
            next.apply_event(event)?;
        }

        Ok((next, events))
    }
}

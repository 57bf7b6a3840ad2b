use crate::model::Event;

// Metrics are emitted through the `metrics` facade. They stay no-ops until the
// embedding application installs a recorder.

/// Counter: registry operations. Labels: operation, outcome.
pub const OPERATIONS_TOTAL: &str = "hotel_operations_total";

/// Gauge: booking references currently active.
pub const ACTIVE_BOOKINGS: &str = "hotel_active_bookings";

/// Gauge: booked (room, day) pairs across the hotel.
pub const BOOKED_ROOM_DAYS: &str = "hotel_booked_room_days";

pub const OUTCOME_COMMITTED: &str = "committed";
pub const OUTCOME_CONFLICT: &str = "conflict";
pub const OUTCOME_REJECTED: &str = "rejected";

pub fn record_operation(operation: &'static str, outcome: &'static str) {
    metrics::counter!(OPERATIONS_TOTAL, "operation" => operation, "outcome" => outcome)
        .increment(1);
}

/// Map an Event variant to a short label for metrics.
pub fn event_label(event: &Event) -> &'static str {
    match event {
        Event::BookingConfirmed { .. } => "book",
        Event::BookingUpdated { .. } => "update",
        Event::BookingCancelled { .. } => "cancel",
    }
}

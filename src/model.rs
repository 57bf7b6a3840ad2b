use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::hotel::HotelError;

/// An opaque day identifier. No calendar semantics are attached.
pub type Day = i64;

/// Room identifier, unique within a hotel.
pub type RoomNumber = u32;

/// A set of days. Duplicates collapse and iteration is ordered.
pub type DaySet = BTreeSet<Day>;

/// Collect a day list (which may repeat days) into a set.
pub fn day_set(days: &[Day]) -> DaySet {
    days.iter().copied().collect()
}

/// Booked days of a single room, partitioned by booking reference.
///
/// A room never checks for conflicts itself. The hotel validates a change
/// against every affected room before calling [`Room::book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    number: RoomNumber,
    bookings: BTreeMap<String, DaySet>,
}

impl Room {
    pub fn new(number: RoomNumber) -> Self {
        Self {
            number,
            bookings: BTreeMap::new(),
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    /// Set or replace the days held under `reference`.
    pub fn book(&mut self, reference: &str, days: DaySet) {
        self.bookings.insert(reference.to_string(), days);
    }

    /// Union of the days held by every reference.
    pub fn all_booked_days(&self) -> DaySet {
        self.bookings.values().flatten().copied().collect()
    }

    /// Union of the days held by every reference other than `reference`.
    pub fn all_booked_days_except(&self, reference: &str) -> DaySet {
        self.bookings
            .iter()
            .filter(|(r, _)| r.as_str() != reference)
            .flat_map(|(_, days)| days.iter().copied())
            .collect()
    }

    /// Drop the entry for `reference`, returning the days it held.
    pub fn cancel_booking(&mut self, reference: &str) -> Result<DaySet, HotelError> {
        self.bookings
            .remove(reference)
            .ok_or_else(|| HotelError::NoSuchBooking(reference.to_string()))
    }

    pub fn days_for(&self, reference: &str) -> Option<&DaySet> {
        self.bookings.get(reference)
    }

    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.bookings.keys().map(String::as_str)
    }

    pub fn is_vacant(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// A validated change to the registry. Applied in one step, after every
/// affected room has passed its conflict check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BookingConfirmed {
        reference: String,
        rooms: BTreeSet<RoomNumber>,
        days: DaySet,
    },
    /// `rooms` may be any subset of the rooms the booking already holds.
    BookingUpdated {
        reference: String,
        rooms: BTreeSet<RoomNumber>,
        days: DaySet,
    },
    BookingCancelled {
        reference: String,
        rooms: BTreeSet<RoomNumber>,
    },
}

// ── Query result types ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomInfo {
    pub number: RoomNumber,
    pub booked_days: DaySet,
    pub bookings: BTreeMap<String, DaySet>,
}

impl From<&Room> for RoomInfo {
    fn from(room: &Room) -> Self {
        Self {
            number: room.number,
            booked_days: room.all_booked_days(),
            bookings: room.bookings.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingInfo {
    pub reference: String,
    pub rooms: BTreeSet<RoomNumber>,
    /// Days held per room. Rooms of one booking can diverge after a partial update.
    pub days: BTreeMap<RoomNumber, DaySet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelSnapshot {
    pub rooms: Vec<RoomInfo>,
    pub bookings: Vec<BookingInfo>,
}
